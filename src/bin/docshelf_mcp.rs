//! docshelf MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the documentation tools to
//! Claude Code and other local MCP clients.

use docshelf::core::config::Config;
use docshelf::core::services::Services;
use docshelf::mcp::McpServer;
use std::sync::Arc;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    tracing::info!("Docs directory: {:?}", config.docs.dir);
    tracing::info!(
        "Auth: {}",
        if config.server.api_key.is_empty() {
            "disabled (dev mode)"
        } else {
            "enabled"
        }
    );

    // Create services
    let services = Arc::new(Services::new(config));

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
