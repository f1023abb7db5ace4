use super::*;

use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

use crate::state::test_helpers::{sample_record, test_app_state};

async fn send(router: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = send(api_routes(AppState::in_memory()), Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn tools_crud_over_http() {
    let state = test_app_state(Vec::new());

    let (status, body) = send(
        api_routes(state.clone()),
        Method::POST,
        "/api/tools",
        Some(serde_json::json!({ "name": "Slug", "category_id": "text", "new": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ::catalog::ToolRecord = serde_json::from_slice(&body).unwrap();
    assert!(created.is_new);

    let uri = format!("/api/tools/{}", created.id);
    let (status, body) = send(
        api_routes(state.clone()),
        Method::PATCH,
        &uri,
        Some(serde_json::json!({ "featured": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: ::catalog::ToolRecord = serde_json::from_slice(&body).unwrap();
    assert!(updated.featured);

    let (status, _) = send(api_routes(state.clone()), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(api_routes(state), Method::GET, "/api/tools", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn invalid_payload_is_422() {
    let state = test_app_state(vec![sample_record("Existing")]);
    let (status, _) = send(
        api_routes(state),
        Method::POST,
        "/api/tools",
        Some(serde_json::json!({ "name": " ", "category_id": "text" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_id_is_rejected() {
    let (status, _) = send(api_routes(AppState::in_memory()), Method::DELETE, "/api/tools/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_endpoint_serves_json() {
    let (status, body) = send(api_routes(AppState::in_memory()), Method::GET, "/api/catalog?q=uuid", None).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["tools"][0]["id"], "uuid-generator");
}
