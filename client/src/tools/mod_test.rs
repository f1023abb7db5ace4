use super::*;

use catalog::{Catalog, Resolution};

#[test]
fn every_widget_id_is_a_catalog_tool() {
    let catalog = Catalog::builtin();
    for (id, _) in WIDGETS {
        assert!(catalog.tool(id).is_some(), "widget {id} has no catalog entry");
    }
}

#[test]
fn widget_ids_are_unique() {
    let registry = build_registry();
    assert_eq!(registry.len(), WIDGETS.len());
}

#[test]
fn registry_resolves_implemented_tools() {
    let registry = build_registry();
    assert!(registry.resolve("uuid-generator").is_known());
    assert!(registry.resolve("markdown-previewer").is_known());
}

#[test]
fn registry_leaves_catalog_only_tools_unresolved() {
    let registry = build_registry();
    assert!(matches!(registry.resolve("qr-generator"), Resolution::Unknown));
    assert!(matches!(registry.resolve(""), Resolution::Unknown));
}
