use hesab_search::{ApiBase, SearchHit, SearchKind, SearchQuery, SearchScope, parse_hits};

const MIXED_RESPONSE: &str = r#"[
    {"id": 11, "type": "item", "code": "1001", "name": "Ballpoint pen", "stock": 240, "price": null, "extra": "pcs", "meta": "pcs • موجودی: 240"},
    {"id": 4, "type": "person", "code": "2001", "name": "Reza Ahmadi", "balance": 1250000.0, "extra": "", "meta": ""},
    {"id": 31, "type": "invoice", "code": "INV-14020101-091500", "name": "Reza Ahmadi", "amount": 1250000.0, "meta": "2023-03-21 • مبلغ: 1,250,000"},
    {"id": 8, "type": "receive", "code": "RCV-14020102-100000", "name": "Reza Ahmadi", "amount": 500000.0, "meta": ""},
    {"id": 9, "type": "payment", "code": "PAY-14020103-110000", "name": "Supplier Co", "amount": 320000.5, "meta": ""}
]"#;

#[test]
fn decodes_every_kind_in_order() {
    let hits = parse_hits(MIXED_RESPONSE).unwrap();
    let kinds: Vec<SearchKind> = hits.iter().map(SearchHit::kind).collect();
    assert_eq!(kinds, SearchKind::ALL);
}

#[test]
fn person_meta_is_built_from_balance() {
    let hits = parse_hits(MIXED_RESPONSE).unwrap();
    assert_eq!(hits[1].meta(), "مانده: 1,250,000");
    assert_eq!(hits[1].label(), "2001 — Reza Ahmadi");
}

#[test]
fn payment_meta_keeps_fraction() {
    let hits = parse_hits(MIXED_RESPONSE).unwrap();
    assert_eq!(hits[4].meta(), "مبلغ: 320,000.5");
}

#[test]
fn cash_scope_selects_documents() {
    let query = SearchQuery::new("").with_scope(SearchScope::Cash);
    let hits = query.select(parse_hits(MIXED_RESPONSE).unwrap());
    let ids: Vec<i64> = hits.iter().map(SearchHit::id).collect();
    assert_eq!(ids, vec![8, 9]);
}

#[test]
fn select_respects_limit() {
    let query = SearchQuery::new("reza").with_limit(2);
    let hits = query.select(parse_hits(MIXED_RESPONSE).unwrap());
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id(), 11);
    assert_eq!(hits[1].id(), 4);
}

#[test]
fn same_query_same_url_under_any_prefix_spelling() {
    let query = SearchQuery::new("pen").with_scope(SearchScope::resolve("items"));
    let urls: Vec<String> = ["hesabpak", "/hesabpak", "/hesabpak/"]
        .into_iter()
        .map(|p| query.to_url(&ApiBase::new(p).unwrap()))
        .collect();
    assert!(urls.iter().all(|u| u == "/hesabpak/api/search?q=pen&kind=item&limit=10"));
}

#[test]
fn hits_serialize_with_type_tag() {
    let hits = parse_hits(MIXED_RESPONSE).unwrap();
    let value = serde_json::to_value(&hits[2]).unwrap();
    assert_eq!(value["type"], "invoice");
    assert_eq!(value["code"], "INV-14020101-091500");
}
