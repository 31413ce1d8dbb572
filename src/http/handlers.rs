//! HTTP request handlers
//!
//! Implements the health endpoint and the stateless MCP endpoint.
//! `/mcp` always answers HTTP 200 with a JSON-RPC body; failures are
//! JSON-RPC error objects, never transport-level errors.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::services::Services;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::{JsonRpcRequest, PARSE_ERROR};

/// Shared state for the HTTP adapter
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
    pub handlers: Arc<ProtocolHandlers>,
}

impl AppState {
    pub fn new(services: Arc<Services>) -> Self {
        let handlers = Arc::new(ProtocolHandlers::new(Arc::clone(&services)));
        Self { services, handlers }
    }
}

/// Health check response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub server: String,
    pub docs_dir: String,
}

/// Health check handler
///
/// Returns server status, configured name and docs directory. Always
/// reachable without authentication.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.services.config;
    Json(HealthResponse {
        status: "ok".to_string(),
        server: config.server.name.clone(),
        docs_dir: config.docs.dir.display().to_string(),
    })
}

/// MCP endpoint handler
///
/// Accepts one JSON-RPC request per POST and returns the JSON-RPC
/// response. A body that is not a valid request becomes a -32700
/// error response.
pub async fn mcp_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let request: JsonRpcRequest = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(e) => {
            return Json(state.handlers.create_error_response(
                None,
                PARSE_ERROR,
                format!("Invalid JSON-RPC request: {e}"),
            ));
        }
    };

    let id = request.id.clone();
    match state.handlers.dispatch(request).await {
        Ok(response) => Json(response),
        Err(e) => Json(state.handlers.create_error_response(
            id,
            crate::mcp::protocol::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
