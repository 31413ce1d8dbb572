//! Grep docs tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GrepDocsHandler {
    services: Arc<Services>,
}

impl GrepDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GrepDocsHandler {
    fn name(&self) -> &str {
        "grep_docs"
    }

    fn schema(&self) -> ToolSchema {
        let default_include = self.services.config.default_include();
        ToolSchema {
            name: "grep_docs".to_string(),
            description: format!(
                "Search documentation content with a case-insensitive regex. \
                 Returns matches as 'file:line: content', sorted by file path, capped at \
                 100 matches with long lines truncated. \
                 Use this to locate which section covers a topic ('error.*handling', \
                 'rate limit'), then load_docs to read the full section. \
                 Narrow the search with include, a glob over relative paths \
                 (default '{default_include}', e.g. 'api/*.md'). \
                 An invalid regex is reported in the result text, never as a protocol error."
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "description": "Regex to search for, matched anywhere in a line. \
                                       Examples: 'error.*handling', \"def\\\\s+\\\\w+\"",
                        "minLength": 1
                    },
                    "include": {
                        "type": "string",
                        "description": format!(
                            "Glob filter over relative file paths (default \"{default_include}\")"
                        ),
                        "default": default_include
                    }
                },
                "required": ["pattern"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct GrepDocsArgs {
            pattern: String,
            include: Option<String>,
        }

        // Parse arguments
        let args: GrepDocsArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let include = args
            .include
            .unwrap_or_else(|| self.services.config.default_include());

        let text = self.services.searcher.search(&args.pattern, &include);

        Ok(text_content(text))
    }
}
