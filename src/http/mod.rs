//! HTTP adapter
//!
//! Depends only on core/ and the transport-agnostic MCP router.
//! Serves the MCP tools over stateless JSON-RPC (`POST /mcp`) plus a
//! health endpoint, with optional shared-key authentication.

pub mod handlers;
pub mod middleware;

pub use handlers::{health_handler, mcp_handler, AppState};
