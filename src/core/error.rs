//! Error types and error handling for the docshelf service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (JSON-RPC error
//! codes) is handled in the MCP adapter module.

use thiserror::Error;

/// Result type alias for docshelf operations
pub type Result<T> = std::result::Result<T, DocshelfError>;

/// Main error type for the docshelf service
#[derive(Error, Debug)]
pub enum DocshelfError {
    /// A resolved document could not be read as text. Raised only on
    /// the targeted-fetch path; the bulk search path skips unreadable
    /// files instead.
    #[error("Failed to read document '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocshelfError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, DocshelfError::ConfigError(_))
    }
}
