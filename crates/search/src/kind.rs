//! Result kinds and the scope a search runs over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;

/// The kind of record a search result refers to.
///
/// Variants are ordered the way results are returned: items first, then
/// people, invoices and cash documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Goods and services.
    Item,
    /// Customers and vendors.
    Person,
    /// Sales invoices.
    Invoice,
    /// Cash receipts.
    Receive,
    /// Cash payments.
    Payment,
}

impl SearchKind {
    /// Every kind, in result order.
    pub const ALL: [SearchKind; 5] = [
        SearchKind::Item,
        SearchKind::Person,
        SearchKind::Invoice,
        SearchKind::Receive,
        SearchKind::Payment,
    ];

    /// Canonical lowercase name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Item => "item",
            SearchKind::Person => "person",
            SearchKind::Invoice => "invoice",
            SearchKind::Receive => "receive",
            SearchKind::Payment => "payment",
        }
    }

    /// Returns `true` for cash documents (receive and payment).
    pub fn is_cash(self) -> bool {
        matches!(self, SearchKind::Receive | SearchKind::Payment)
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        SearchKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lowered)
            .ok_or_else(|| SearchError::UnknownKind {
                kind: s.to_string(),
            })
    }
}

/// The set of kinds a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchScope {
    /// A single kind.
    One(SearchKind),
    /// Receive and payment documents.
    Cash,
    /// Every kind.
    #[default]
    All,
}

impl SearchScope {
    /// Resolves a user- or page-supplied kind name, including aliases.
    ///
    /// Empty and unrecognised names search everything.
    ///
    /// | Names | Scope |
    /// |-------|-------|
    /// | `item`, `items`, `product` | item |
    /// | `person`, `people`, `customer`, `vendor` | person |
    /// | `invoice`, `invoices`, `sale`, `sales`, `factor` | invoice |
    /// | `receive`, `receipt` | receive |
    /// | `payment`, `payments` | payment |
    /// | `cash`, `cashdoc` | receive + payment |
    /// | `all`, `any`, empty | everything |
    pub fn resolve(kind: &str) -> Self {
        let lowered = kind.trim().to_lowercase();
        match lowered.as_str() {
            "item" | "items" | "product" => SearchScope::One(SearchKind::Item),
            "person" | "people" | "customer" | "vendor" => SearchScope::One(SearchKind::Person),
            "invoice" | "invoices" | "sale" | "sales" | "factor" => {
                SearchScope::One(SearchKind::Invoice)
            }
            "receive" | "receipt" => SearchScope::One(SearchKind::Receive),
            "payment" | "payments" => SearchScope::One(SearchKind::Payment),
            "cash" | "cashdoc" => SearchScope::Cash,
            "all" | "any" | "" => SearchScope::All,
            other => {
                debug!(kind = other, "unknown search kind, searching everything");
                SearchScope::All
            }
        }
    }

    /// Kinds covered, in result order.
    pub fn kinds(self) -> &'static [SearchKind] {
        match self {
            SearchScope::One(SearchKind::Item) => &[SearchKind::Item],
            SearchScope::One(SearchKind::Person) => &[SearchKind::Person],
            SearchScope::One(SearchKind::Invoice) => &[SearchKind::Invoice],
            SearchScope::One(SearchKind::Receive) => &[SearchKind::Receive],
            SearchScope::One(SearchKind::Payment) => &[SearchKind::Payment],
            SearchScope::Cash => &[SearchKind::Receive, SearchKind::Payment],
            SearchScope::All => &SearchKind::ALL,
        }
    }

    /// Returns `true` if results of `kind` belong to this scope.
    pub fn contains(self, kind: SearchKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// The value sent as the `kind` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SearchScope::One(kind) => kind.as_str(),
            SearchScope::Cash => "cash",
            SearchScope::All => "all",
        }
    }
}

impl From<SearchKind> for SearchScope {
    fn from(kind: SearchKind) -> Self {
        SearchScope::One(kind)
    }
}

/// Resolves a kind name (see [`SearchScope::resolve`]) to the kinds searched,
/// in result order.
pub fn resolve_targets(kind: &str) -> Vec<SearchKind> {
    SearchScope::resolve(kind).kinds().to_vec()
}
