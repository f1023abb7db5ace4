//! REST API helpers for the admin tool store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only called from browser event handlers and effects.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a message suitable for a
//! toast, so a failed request degrades the admin page instead of crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{NewToolRecord, ToolPatch, ToolRecord};
use uuid::Uuid;

#[cfg(any(test, feature = "hydrate"))]
const TOOLS_ENDPOINT: &str = "/api/tools";

#[cfg(any(test, feature = "hydrate"))]
fn tool_endpoint(id: Uuid) -> String {
    format!("{TOOLS_ENDPOINT}/{id}")
}

/// Message for a non-success HTTP status.
#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    match status {
        404 => format!("{action} failed: tool not found"),
        422 => format!("{action} failed: the server rejected the tool fields"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

/// List every stored tool via `GET /api/tools`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn list_tools() -> Result<Vec<ToolRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TOOLS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("loading tools", resp.status()));
        }
        resp.json::<Vec<ToolRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Insert a tool via `POST /api/tools`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_tool(record: &NewToolRecord) -> Result<ToolRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(TOOLS_ENDPOINT)
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("creating tool", resp.status()));
        }
        resp.json::<ToolRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        unavailable()
    }
}

/// Apply a partial update via `PATCH /api/tools/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn update_tool(id: Uuid, patch: &ToolPatch) -> Result<ToolRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&tool_endpoint(id))
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("updating tool", resp.status()));
        }
        resp.json::<ToolRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        unavailable()
    }
}

/// Delete a tool via `DELETE /api/tools/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn delete_tool(id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&tool_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("deleting tool", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        unavailable()
    }
}
