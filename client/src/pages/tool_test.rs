use super::*;

#[test]
fn title_uses_tool_name() {
    let catalog = Catalog::builtin();
    assert_eq!(page_title(&catalog, "uuid-generator"), "UUID Generator · Toolbox");
    assert_eq!(page_title(&catalog, "missing"), "Tool not found · Toolbox");
}

#[test]
fn breadcrumbs_walk_category_then_tool() {
    let catalog = Catalog::builtin();
    let crumbs = breadcrumbs(&catalog, "hash-generator");
    let hrefs: Vec<_> = crumbs.iter().map(|(_, href)| href.as_str()).collect();
    assert_eq!(hrefs, ["/tools", "/categories/security", "/tools/hash-generator"]);
}

#[test]
fn breadcrumbs_for_unknown_tool_stop_at_root() {
    let catalog = Catalog::builtin();
    assert_eq!(breadcrumbs(&catalog, ""), [("Tools".to_owned(), "/tools".to_owned())]);
}
