//! Search requests.

use url::form_urlencoded;

use crate::base::ApiBase;
use crate::hit::SearchHit;
use crate::kind::SearchScope;

/// Results returned when no limit is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Upper bound the server enforces on `limit`.
pub const MAX_LIMIT: usize = 50;

/// Path of the search endpoint below the [`ApiBase`].
pub const SEARCH_PATH: &str = "api/search";

/// A search request as sent by an autocomplete field.
///
/// # Example
///
/// ```
/// use hesab_search::{ApiBase, SearchKind, SearchQuery};
///
/// let base = ApiBase::new("/hesabpak").unwrap();
/// let query = SearchQuery::new("شیر")
///     .with_scope(SearchKind::Item.into())
///     .with_limit(5);
/// assert_eq!(
///     query.to_url(&base),
///     "/hesabpak/api/search?q=%D8%B4%DB%8C%D8%B1&kind=item&limit=5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    scope: SearchScope,
    limit: usize,
}

impl SearchQuery {
    /// Creates a query over every kind with the default limit.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into().trim().to_string(),
            scope: SearchScope::All,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the scope.
    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the result limit, clamped to `1..=MAX_LIMIT`.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    /// The trimmed search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The scope searched.
    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    /// Maximum number of results.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Request path with form-encoded `q`, `kind` and `limit` parameters.
    pub fn to_url(&self, base: &ApiBase) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.term)
            .append_pair("kind", self.scope.as_param())
            .append_pair("limit", &self.limit.to_string())
            .finish();
        format!("{}?{query}", base.endpoint(SEARCH_PATH))
    }

    /// Keeps the hits that belong to this query's scope, up to the limit,
    /// preserving server order.
    pub fn select(&self, hits: Vec<SearchHit>) -> Vec<SearchHit> {
        hits.into_iter()
            .filter(|hit| self.scope.contains(hit.kind()))
            .take(self.limit)
            .collect()
    }
}
