//! docshelf - Sandboxed Documentation Server for Coding Agents
//!
//! Serves one directory of documentation files to LLM agents through
//! two MCP tools: `load_docs` (browse/read sections) and `grep_docs`
//! (regex content search). Every file operation is confined to the
//! configured docs root; traversal segments and symlink escapes
//! resolve to the same uniform not-found answer as a missing file.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error
//!   - resolver (section resolution, sandbox containment)
//!   - index (live corpus listing)
//!   - loader (section loading with fallbacks)
//!   - searcher (bounded regex search)
//!   - services (unified service container)
//!
//! - **http**: stateless JSON-RPC adapter (depends on core)
//!   - handlers (health, /mcp), middleware (logging, auth)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - protocol, handlers, server (stdio), tools
//!
//! # Key Features
//!
//! - No index, no cache: every call re-reads live filesystem state
//! - Sandbox containment checked against fully resolved paths
//! - Bounded output (100 matches, 200-char lines) for agent use
//! - Same tool set over HTTP (stateless JSON) and stdio

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{DocshelfError, Result};
pub use crate::core::services::Services;
