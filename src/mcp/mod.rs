//! MCP (Model Context Protocol) server module
//!
//! This module implements a JSON-RPC 2.0 compliant MCP server that
//! exposes the documentation tools to Claude Code and other MCP
//! clients. The protocol router is transport-agnostic; the stdio
//! loop lives here and the HTTP binding lives in [`crate::http`].

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

// Re-export main types
pub use error::McpError;
pub use handlers::ProtocolHandlers;
pub use server::McpServer;
pub use tools::{McpToolHandler, ToolRegistry};
