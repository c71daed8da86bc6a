//! # hesab-search
//!
//! One typed component behind every autocomplete field: the kind of record
//! being searched is an explicit [`SearchScope`] rather than something
//! guessed from an element id, the deployment prefix is an explicit
//! [`ApiBase`], and results decode into the [`SearchHit`] enum.
//!
//! ## Quick Start
//!
//! ```
//! use hesab_search::{ApiBase, SearchQuery, SearchScope, parse_hits};
//!
//! let base = ApiBase::new("hesabpak/").unwrap();
//! let query = SearchQuery::new("1001").with_scope(SearchScope::resolve("product"));
//! assert_eq!(query.to_url(&base), "/hesabpak/api/search?q=1001&kind=item&limit=10");
//!
//! let hits = parse_hits(r#"[{"id": 7, "type": "item", "code": "1001", "name": "Pen"}]"#).unwrap();
//! let hits = query.select(hits);
//! assert_eq!(hits[0].label(), "1001 — Pen");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `kind` | Result kinds, scopes and alias resolution |
//! | `base` | Deployment-relative base path |
//! | `query` | Search request and URL building |
//! | `hit` | Typed result decoding and display |
//! | `error` | Error types |

mod base;
mod error;
mod hit;
mod kind;
mod query;

pub use base::ApiBase;
pub use error::SearchError;
pub use hit::{DocumentHit, ItemHit, PersonHit, SearchHit, parse_hits};
pub use kind::{SearchKind, SearchScope, resolve_targets};
pub use query::{DEFAULT_LIMIT, MAX_LIMIT, SEARCH_PATH, SearchQuery};
