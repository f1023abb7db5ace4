//! Admin tool CRUD routes.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use catalog::{NewToolRecord, ToolPatch, ToolRecord};

use crate::services::tool_store::{self, ToolStoreError};
use crate::state::AppState;

/// `GET /api/tools` — list stored tools.
pub async fn list_tools(State(state): State<AppState>) -> Result<Json<Vec<ToolRecord>>, StatusCode> {
    let records = state.store.list().await.map_err(tool_store_error_to_status)?;
    Ok(Json(records))
}

/// `POST /api/tools` — insert a tool.
pub async fn create_tool(
    State(state): State<AppState>,
    Json(body): Json<NewToolRecord>,
) -> Result<(StatusCode, Json<ToolRecord>), StatusCode> {
    let record = tool_store::validated_insert(state.store.as_ref(), &state.catalog, body)
        .await
        .map_err(tool_store_error_to_status)?;
    tracing::info!(id = %record.id, name = %record.name, "tool created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PATCH /api/tools/:id` — update selected fields.
pub async fn update_tool(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ToolPatch>,
) -> Result<Json<ToolRecord>, StatusCode> {
    let record = tool_store::validated_update(state.store.as_ref(), &state.catalog, id, body)
        .await
        .map_err(tool_store_error_to_status)?;
    tracing::info!(%id, "tool updated");
    Ok(Json(record))
}

/// `DELETE /api/tools/:id` — remove a tool.
pub async fn delete_tool(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    state.store.delete(id).await.map_err(tool_store_error_to_status)?;
    tracing::info!(%id, "tool deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn tool_store_error_to_status(err: ToolStoreError) -> StatusCode {
    match err {
        ToolStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        ToolStoreError::Invalid(e) => {
            tracing::debug!(error = %e, "rejected tool write");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ToolStoreError::Database(e) => {
            tracing::error!(error = %e, "tool store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
