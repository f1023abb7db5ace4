use super::*;

use crate::state::AppState;

#[tokio::test]
async fn full_catalog_lists_everything() {
    let state = AppState::in_memory();
    let total = state.catalog.tools().len();
    let Json(body) = get_catalog(State(state), Query(CatalogQuery::default())).await;
    assert_eq!(body.tools.len(), total);
    assert!(!body.categories.is_empty());
}

#[tokio::test]
async fn filters_combine_category_and_text() {
    let state = AppState::in_memory();
    let query = CatalogQuery { q: Some("BASE64".into()), category: Some("encoders".into()) };
    let Json(body) = get_catalog(State(state), Query(query)).await;
    let ids: Vec<_> = body.tools.iter().map(|entry| entry.tool.id).collect();
    assert_eq!(ids, ["base64-encoder"]);
}

#[tokio::test]
async fn entries_report_widget_availability() {
    let state = AppState::in_memory();
    let Json(ready) = get_catalog_tool(State(state.clone()), Path("uuid-generator".into())).await.unwrap();
    assert!(ready.implemented);
    assert_eq!(ready.path, "/tools/uuid-generator");

    let Json(pending) = get_catalog_tool(State(state), Path("qr-generator".into())).await.unwrap();
    assert!(!pending.implemented);
}

#[tokio::test]
async fn unknown_tool_is_404() {
    let state = AppState::in_memory();
    let status = get_catalog_tool(State(state), Path("nope".into())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn entry_serializes_flat_with_wire_names() {
    let tool = catalog::Catalog::builtin().tool("qr-generator").unwrap();
    let json = serde_json::to_value(entry(tool)).unwrap();
    assert_eq!(json["id"], "qr-generator");
    assert_eq!(json["new"], true);
    assert_eq!(json["implemented"], false);
}
