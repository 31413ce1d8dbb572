//! Middleware for the docshelf HTTP adapter
//!
//! Provides request logging with duration tracking and shared-key
//! authentication.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::core::config::Config;

/// Request logging middleware
///
/// Logs all incoming requests with method, URI, status code, and
/// duration. Successful requests are logged at INFO level, failed
/// requests at ERROR level.
///
/// # Arguments
///
/// * `request` - The incoming HTTP request
/// * `next` - The next middleware or handler in the chain
///
/// # Returns
///
/// The response from the next handler
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    // Process request
    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    // Log based on status
    if status.is_success() {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else {
        error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    response
}

/// Shared-key authentication middleware
///
/// Accepts either `Authorization: Bearer <key>` or `x-api-key: <key>`.
/// The health endpoint is always reachable, and an empty configured
/// key disables authentication entirely (dev mode).
pub async fn require_api_key(
    State(config): State<Arc<Config>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // Skip auth for health endpoint
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    // No auth if key not set
    let api_key = &config.server.api_key;
    if api_key.is_empty() {
        return next.run(request).await;
    }

    if is_authorized(&request, api_key) {
        return next.run(request).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized"})),
    )
        .into_response()
}

fn is_authorized(request: &Request<Body>, api_key: &str) -> bool {
    // Check Authorization: Bearer <token>
    let bearer_ok = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {api_key}"))
        .unwrap_or(false);

    if bearer_ok {
        return true;
    }

    // Check x-api-key header
    request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == api_key)
        .unwrap_or(false)
}
