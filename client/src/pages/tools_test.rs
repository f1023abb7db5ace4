use super::*;

// =============================================================
// visible_tools
// =============================================================

#[test]
fn no_filters_lists_whole_catalog() {
    let catalog = Catalog::builtin();
    assert_eq!(visible_tools(&catalog, "", None).len(), catalog.tools().len());
}

#[test]
fn category_filter_narrows_results() {
    let catalog = Catalog::builtin();
    let tools = visible_tools(&catalog, "", Some("security"));
    assert_eq!(tools.len(), catalog.count_in("security"));
    assert!(tools.iter().all(|t| t.category == "security"));
}

#[test]
fn text_and_category_filters_combine() {
    let catalog = Catalog::builtin();
    let tools = visible_tools(&catalog, "  PASSWORD ", Some("security"));
    let ids: Vec<_> = tools.iter().map(|t| t.id).collect();
    assert!(ids.contains(&"password-strength"));
    assert!(!ids.contains(&"password-generator"));
}

#[test]
fn unknown_category_is_ignored() {
    let catalog = Catalog::builtin();
    assert_eq!(visible_tools(&catalog, "uuid", Some("nope")), catalog.search("uuid"));
}

// =============================================================
// filter_href / results_label
// =============================================================

#[test]
fn filter_href_encodes_parameters() {
    assert_eq!(filter_href("", None), "/tools");
    assert_eq!(filter_href(" ", Some("design")), "/tools?category=design");
    assert_eq!(filter_href("a&b", Some("text")), "/tools?q=a%26b&category=text");
}

#[test]
fn results_label_mentions_query() {
    assert_eq!(results_label(1, ""), "1 tool");
    assert_eq!(results_label(3, " json "), "3 tools matching \"json\"");
}
