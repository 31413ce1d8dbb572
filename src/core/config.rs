//! Configuration management for the docshelf service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The environment variables match the deployment contract of the
//! server: `DOCS_DIR`, `MCP_NAME`, `MCP_API_KEY`, `HOST`, `PORT`.

use crate::core::error::{DocshelfError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Documentation corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Root directory all document operations are confined to
    #[serde(default = "default_docs_dir")]
    pub dir: PathBuf,

    /// Documentation file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File returned by `load_docs` when no section is requested
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server name reported in health checks and MCP initialization
    #[serde(default = "default_name")]
    pub name: String,

    /// Bind address for the HTTP binary
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP binary
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared API key; empty disables authentication (dev mode)
    #[serde(default)]
    pub api_key: String,
}

// Default value functions
fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_index_file() -> String {
    "INDEX.md".to_string()
}

fn default_name() -> String {
    "docs".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            extension: default_extension(),
            index_file: default_index_file(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            host: default_host(),
            port: default_port(),
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocshelfError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// A TOML file is only consulted when `DOCSHELF_CONFIG` names one;
    /// the usual deployment carries everything in the environment.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSHELF_CONFIG") {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Docs configuration
        if let Ok(dir) = env::var("DOCS_DIR") {
            self.docs.dir = PathBuf::from(dir);
        }

        // Server configuration
        if let Ok(name) = env::var("MCP_NAME") {
            self.server.name = name;
        }
        if let Ok(api_key) = env::var("MCP_API_KEY") {
            self.server.api_key = api_key;
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.docs.extension.is_empty() || self.docs.extension.starts_with('.') {
            return Err(DocshelfError::ConfigError(
                "Doc extension must be non-empty and carry no leading dot".to_string(),
            ));
        }

        if self.docs.index_file.is_empty() {
            return Err(DocshelfError::ConfigError(
                "Index file name must be non-empty".to_string(),
            ));
        }

        if self.server.name.is_empty() {
            return Err(DocshelfError::ConfigError(
                "Server name must be non-empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(DocshelfError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Default include glob for searches, derived from the extension
    pub fn default_include(&self) -> String {
        format!("*.{}", self.docs.extension)
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Docs dir: {:?}", self.docs.dir);
        tracing::info!("  Doc extension: .{}", self.docs.extension);
        tracing::info!("  Index file: {}", self.docs.index_file);
        tracing::info!("  Server name: {}", self.server.name);
        tracing::info!("  Bind address: {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  Auth: {}",
            if self.server.api_key.is_empty() {
                "disabled (dev mode)"
            } else {
                "enabled"
            }
        );
    }
}
