use hesab_search::{SearchKind, SearchScope, resolve_targets};

use SearchKind::{Invoice, Item, Payment, Person, Receive};

#[test]
fn alias_table() {
    let cases: &[(&str, &[SearchKind])] = &[
        ("item", &[Item]),
        ("items", &[Item]),
        ("product", &[Item]),
        ("person", &[Person]),
        ("people", &[Person]),
        ("customer", &[Person]),
        ("vendor", &[Person]),
        ("invoice", &[Invoice]),
        ("invoices", &[Invoice]),
        ("sale", &[Invoice]),
        ("sales", &[Invoice]),
        ("factor", &[Invoice]),
        ("receive", &[Receive]),
        ("receipt", &[Receive]),
        ("payment", &[Payment]),
        ("payments", &[Payment]),
        ("cash", &[Receive, Payment]),
        ("cashdoc", &[Receive, Payment]),
        ("all", &[Item, Person, Invoice, Receive, Payment]),
        ("any", &[Item, Person, Invoice, Receive, Payment]),
    ];
    for &(name, expected) in cases {
        assert_eq!(
            resolve_targets(name),
            expected,
            "resolve_targets({name:?}) should be {expected:?}"
        );
    }
}

#[test]
fn empty_and_unknown_search_everything() {
    for name in ["", "   ", "warehouse", "persons?"] {
        assert_eq!(resolve_targets(name), SearchKind::ALL, "{name:?}");
    }
}

#[test]
fn targets_are_in_result_order() {
    for name in ["all", "cash", "item", "payment"] {
        let targets = resolve_targets(name);
        let mut sorted = targets.clone();
        sorted.sort();
        assert_eq!(targets, sorted, "{name:?}");
    }
}

#[test]
fn resolved_scope_round_trips_through_param() {
    for name in ["product", "customer", "sales", "receipt", "payments", "cashdoc", "any"] {
        let scope = SearchScope::resolve(name);
        assert_eq!(SearchScope::resolve(scope.as_param()), scope, "{name:?}");
    }
}
