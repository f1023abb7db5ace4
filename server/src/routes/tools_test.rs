use super::*;

use crate::state::test_helpers::{sample_record, test_app_state};

fn new_body(name: &str, category_id: &str) -> NewToolRecord {
    NewToolRecord { name: name.into(), category_id: category_id.into(), ..NewToolRecord::default() }
}

// =============================================================================
// STATUS MAPPING
// =============================================================================

#[test]
fn tool_store_error_to_status_maps_not_found() {
    let err = ToolStoreError::NotFound(Uuid::nil());
    assert_eq!(tool_store_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn tool_store_error_to_status_maps_invalid() {
    let err = ToolStoreError::Invalid(catalog::RecordError::EmptyName);
    assert_eq!(tool_store_error_to_status(err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn tool_store_error_to_status_maps_database() {
    let err = ToolStoreError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(tool_store_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// HANDLERS
// =============================================================================

#[tokio::test]
async fn list_returns_seeded_records() {
    let record = sample_record("Seeded");
    let state = test_app_state(vec![record.clone()]);
    let Json(records) = list_tools(State(state)).await.unwrap();
    assert_eq!(records, vec![record]);
}

#[tokio::test]
async fn create_returns_201_with_record() {
    let state = test_app_state(Vec::new());
    let (status, Json(record)) = create_tool(State(state.clone()), Json(new_body("Lorem", "text")))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record.name, "Lorem");
    assert_eq!(state.store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let state = test_app_state(Vec::new());
    let status = create_tool(State(state), Json(new_body("Lorem", "astrology")))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_patches_flags() {
    let record = sample_record("Flagged");
    let state = test_app_state(vec![record.clone()]);
    let patch = ToolPatch { featured: Some(true), is_new: Some(true), ..ToolPatch::default() };
    let Json(updated) = update_tool(State(state), Path(record.id), Json(patch)).await.unwrap();
    assert!(updated.featured);
    assert!(updated.is_new);
    assert_eq!(updated.id, record.id);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let state = test_app_state(Vec::new());
    let status = update_tool(State(state), Path(Uuid::new_v4()), Json(ToolPatch::default()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let record = sample_record("Doomed");
    let state = test_app_state(vec![record.clone()]);
    let status = delete_tool(State(state.clone()), Path(record.id)).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let status = delete_tool(State(state), Path(record.id)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}
