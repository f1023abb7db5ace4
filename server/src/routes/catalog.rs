//! Read-only catalog routes.
//!
//! Serves the compiled-in catalog so external clients see the same ids the
//! UI routes on. `implemented` reflects the UI's widget registry.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use catalog::{CategoryDescriptor, ToolDescriptor};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolEntry {
    #[serde(flatten)]
    pub tool: &'static ToolDescriptor,
    pub path: String,
    pub implemented: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: &'static [CategoryDescriptor],
    pub tools: Vec<ToolEntry>,
}

fn entry(tool: &'static ToolDescriptor) -> ToolEntry {
    ToolEntry { tool, path: tool.path(), implemented: implemented(tool.id) }
}

fn implemented(id: &str) -> bool {
    client::tools::WIDGETS.iter().any(|(widget_id, _)| *widget_id == id)
}

/// `GET /api/catalog` — categories plus tools, optionally filtered by
/// `?category=` and `?q=`.
pub async fn get_catalog(State(state): State<AppState>, Query(query): Query<CatalogQuery>) -> Json<CatalogResponse> {
    let catalog = state.catalog;
    let tools = match query.category.as_deref() {
        Some(category_id) => catalog.list_by_category(category_id),
        None => catalog.tools().iter().collect(),
    };
    let tools = catalog.filter_by_text(query.q.as_deref().unwrap_or("").trim(), tools);
    Json(CatalogResponse { categories: catalog.categories(), tools: tools.into_iter().map(entry).collect() })
}

/// `GET /api/catalog/tools/:id` — one tool descriptor.
pub async fn get_catalog_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToolEntry>, StatusCode> {
    state.catalog.tool(&id).map(|tool| Json(entry(tool))).ok_or(StatusCode::NOT_FOUND)
}
