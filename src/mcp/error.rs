//! MCP-specific error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::core::error::DocshelfError> for McpError {
    fn from(err: crate::core::error::DocshelfError) -> Self {
        use crate::core::error::DocshelfError;
        match err {
            DocshelfError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            DocshelfError::ReadFailed { .. } => McpError::InternalError(err.to_string()),
            DocshelfError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            DocshelfError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            DocshelfError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
