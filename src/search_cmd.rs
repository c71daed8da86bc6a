//! Search commands: request URLs and decoding of saved responses.

use std::path::Path;

use anyhow::{Context, Result};
use hesab_search::{SearchHit, SearchQuery, SearchScope, parse_hits};
use tracing::{info, info_span};

use crate::cli::{SearchArgs, SearchCommand};
use crate::config::HesabConfig;
use crate::convert;

pub fn run(args: SearchArgs, config: &HesabConfig) -> Result<()> {
    let default_limit = convert::build_search_limit(&config.search)?;
    match args.command {
        SearchCommand::Url { kind, limit, term } => {
            let _cmd = info_span!("search_url").entered();
            let base = convert::build_api_base(&config.api)?;
            let query = build_query(&term, &kind, limit, default_limit)?;
            println!("{}", query.to_url(&base));
        }
        SearchCommand::Show { file, kind, limit } => {
            let _cmd = info_span!("search_show").entered();
            let query = build_query("", &kind, limit, default_limit)?;
            for hit in load_hits(&file, &query)? {
                println!("{}", render_hit(&hit));
            }
        }
    }
    Ok(())
}

fn build_query(
    term: &str,
    kind: &str,
    limit: Option<usize>,
    default_limit: usize,
) -> Result<SearchQuery> {
    let limit = match limit {
        Some(limit) => convert::check_limit(limit)?,
        None => default_limit,
    };
    Ok(SearchQuery::new(term)
        .with_scope(SearchScope::resolve(kind))
        .with_limit(limit))
}

fn load_hits(path: &Path, query: &SearchQuery) -> Result<Vec<SearchHit>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read search response: {}", path.display()))?;
    let hits = parse_hits(&body)
        .with_context(|| format!("failed to decode search response: {}", path.display()))?;
    let total = hits.len();
    let selected = query.select(hits);
    info!(
        total,
        shown = selected.len(),
        scope = query.scope().as_param(),
        "search response decoded"
    );
    Ok(selected)
}

fn render_hit(hit: &SearchHit) -> String {
    let meta = hit.meta();
    if meta.is_empty() {
        format!("[{}] {}", hit.kind(), hit.label())
    } else {
        format!("[{}] {}  ({meta})", hit.kind(), hit.label())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use hesab_search::ApiBase;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn url_uses_config_limit() {
        let base = ApiBase::new("/hesabpak").unwrap();
        let query = build_query("ali", "customer", None, 20).unwrap();
        assert_eq!(
            query.to_url(&base),
            "/hesabpak/api/search?q=ali&kind=person&limit=20"
        );
    }

    #[test]
    fn explicit_limit_is_validated() {
        assert!(build_query("x", "all", Some(0), 10).is_err());
        assert!(build_query("x", "all", Some(51), 10).is_err());
        assert_eq!(build_query("x", "all", Some(3), 10).unwrap().limit(), 3);
    }

    #[test]
    fn show_filters_saved_response() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"results": [
                {{"type": "item", "id": 1, "code": "1001", "name": "شیر", "stock": 12, "unit": "عدد"}},
                {{"type": "person", "id": 2, "code": "P-7", "name": "علی", "balance": -2500}},
                {{"type": "payment", "id": 3, "code": "PAY-1", "name": "علی", "amount": 1500}}
            ]}}"#
        )
        .unwrap();

        let query = build_query("", "cash", None, 10).unwrap();
        let hits = load_hits(file.path(), &query).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(render_hit(&hits[0]), "[payment] PAY-1 — علی  (مبلغ: 1,500)");
    }

    #[test]
    fn show_reports_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let query = build_query("", "all", None, 10).unwrap();
        let err = load_hits(file.path(), &query).unwrap_err();
        assert!(err.to_string().starts_with("failed to decode search response"));
    }
}
