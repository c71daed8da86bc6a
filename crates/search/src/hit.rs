//! Typed search results.

use hesab_numerals::format_compact;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::kind::SearchKind;

/// An item result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHit {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Quantity on hand, when tracked.
    #[serde(default)]
    pub stock: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Unit of measure.
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub meta: String,
}

/// A customer or vendor result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonHit {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Account balance; positive means the person owes.
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub meta: String,
}

/// An invoice or cash document result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHit {
    pub id: i64,
    /// Document number.
    #[serde(default)]
    pub code: String,
    /// Counterparty name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub meta: String,
}

/// One search result, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    Item(ItemHit),
    Person(PersonHit),
    Invoice(DocumentHit),
    Receive(DocumentHit),
    Payment(DocumentHit),
}

impl SearchHit {
    /// The kind of record this hit refers to.
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchHit::Item(_) => SearchKind::Item,
            SearchHit::Person(_) => SearchKind::Person,
            SearchHit::Invoice(_) => SearchKind::Invoice,
            SearchHit::Receive(_) => SearchKind::Receive,
            SearchHit::Payment(_) => SearchKind::Payment,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            SearchHit::Item(h) => h.id,
            SearchHit::Person(h) => h.id,
            SearchHit::Invoice(h) | SearchHit::Receive(h) | SearchHit::Payment(h) => h.id,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            SearchHit::Item(h) => &h.code,
            SearchHit::Person(h) => &h.code,
            SearchHit::Invoice(h) | SearchHit::Receive(h) | SearchHit::Payment(h) => &h.code,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SearchHit::Item(h) => &h.name,
            SearchHit::Person(h) => &h.name,
            SearchHit::Invoice(h) | SearchHit::Receive(h) | SearchHit::Payment(h) => &h.name,
        }
    }

    /// Text shown in the suggestion list: `code — name`, or whichever is set.
    pub fn label(&self) -> String {
        match (self.code(), self.name()) {
            ("", name) => name.to_string(),
            (code, "") => code.to_string(),
            (code, name) => format!("{code} — {name}"),
        }
    }

    /// Secondary line under the label. Uses the server's `meta` when present,
    /// otherwise builds one from the typed fields.
    pub fn meta(&self) -> String {
        let server_meta = match self {
            SearchHit::Item(h) => &h.meta,
            SearchHit::Person(h) => &h.meta,
            SearchHit::Invoice(h) | SearchHit::Receive(h) | SearchHit::Payment(h) => &h.meta,
        };
        if !server_meta.is_empty() {
            return server_meta.clone();
        }
        match self {
            SearchHit::Item(h) => {
                let mut parts = Vec::new();
                if !h.extra.is_empty() {
                    parts.push(h.extra.clone());
                }
                if let Some(stock) = h.stock {
                    parts.push(format!("موجودی: {}", format_compact(stock)));
                }
                parts.join(" • ")
            }
            SearchHit::Person(h) => format!("مانده: {}", format_compact(h.balance)),
            SearchHit::Invoice(h) | SearchHit::Receive(h) | SearchHit::Payment(h) => {
                format!("مبلغ: {}", format_compact(h.amount))
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Bare(Vec<SearchHit>),
    Wrapped { results: Vec<SearchHit> },
}

/// Decodes a search response body.
///
/// Accepts both a bare array of results and an object with a `results`
/// array.
///
/// # Errors
///
/// Returns [`SearchError::Decode`] for malformed JSON or unknown result types.
pub fn parse_hits(body: &str) -> Result<Vec<SearchHit>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(match response {
        SearchResponse::Bare(hits) => hits,
        SearchResponse::Wrapped { results } => results,
    })
}
