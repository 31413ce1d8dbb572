//! Integration tests for the docshelf HTTP adapter
//!
//! Drives the complete router: health endpoint, stateless MCP
//! endpoint, and authentication middleware.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;
use tower_http::cors::CorsLayer;

use crate::common::DocsTree;
use docshelf::core::services::Services;
use docshelf::http::{self, middleware as http_middleware, AppState};

/// Build the production router shape over a test docs tree
fn create_test_app(tree: &DocsTree, api_key: &str) -> Router {
    let mut config = tree.config();
    config.server.api_key = api_key.to_string();

    let services = Arc::new(Services::new(config));
    let state = AppState::new(Arc::clone(&services));

    Router::new()
        .route("/health", get(http::health_handler))
        .route("/mcp", post(http::mcp_handler))
        .layer(middleware::from_fn_with_state(
            services.config.clone(),
            http_middleware::require_api_key,
        ))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn mcp_request(body: Value, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health = response_json(response).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["server"], "docs");
    assert!(health["docs_dir"].as_str().unwrap().contains(
        tree.root().file_name().unwrap().to_str().unwrap()
    ));
}

#[tokio::test]
async fn test_mcp_initialize_roundtrip() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "");

    let response = app
        .oneshot(mcp_request(
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["result"]["serverInfo"]["name"], "docs");
}

#[tokio::test]
async fn test_mcp_tool_call_over_http() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "");

    let response = app
        .oneshot(mcp_request(
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "tools/call",
                "params": {"name": "grep_docs", "arguments": {"pattern": "endpoints?"}}
            }),
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"], 7);
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("api/endpoints.md:"));
}

#[tokio::test]
async fn test_mcp_malformed_body_is_parse_error() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "");

    // Valid JSON, not a valid JSON-RPC request
    let response = app
        .oneshot(mcp_request(json!({"not": "a request"}), &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn test_auth_rejects_missing_credentials() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "sekrit");

    let response = app
        .oneshot(mcp_request(
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_auth_accepts_bearer_token() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "sekrit");

    let response = app
        .oneshot(mcp_request(
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
            &[("authorization", "Bearer sekrit")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_accepts_api_key_header() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "sekrit");

    let response = app
        .oneshot(mcp_request(
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
            &[("x-api-key", "sekrit")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_rejects_wrong_key() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "sekrit");

    let response = app
        .oneshot(mcp_request(
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
            &[("x-api-key", "wrong")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_bypasses_auth() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "sekrit");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_disabled_when_no_key_configured() {
    let tree = DocsTree::sample();
    let app = create_test_app(&tree, "");

    let response = app
        .oneshot(mcp_request(
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
