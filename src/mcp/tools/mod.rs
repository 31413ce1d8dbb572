//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose the
//! documentation corpus to Claude Code and other agents.

pub mod grep_docs;
pub mod handler;
pub mod load_docs;
pub mod registry;

pub use grep_docs::GrepDocsHandler;
pub use handler::{text_content, McpToolHandler};
pub use load_docs::LoadDocsHandler;
pub use registry::ToolRegistry;
