//! docshelf HTTP server entry point
//!
//! Serves the MCP documentation tools over stateless JSON-RPC.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docshelf::core::config::Config;
use docshelf::core::services::Services;
use docshelf::http::{self, middleware as http_middleware, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docshelf=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docshelf service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;

    // Log configuration details
    config.log_config();

    // Create shared services
    let services = Arc::new(Services::new(config.clone()));
    let state = AppState::new(Arc::clone(&services));

    // Build the router
    let app = Router::new()
        // Health check endpoint (never behind auth)
        .route("/health", get(http::health_handler))
        // MCP endpoint: one JSON-RPC request per POST
        .route("/mcp", post(http::mcp_handler))
        // Add middleware
        .layer(middleware::from_fn_with_state(
            services.config.clone(),
            http_middleware::require_api_key,
        ))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(state);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
