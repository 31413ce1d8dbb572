//! Load docs tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct LoadDocsHandler {
    services: Arc<Services>,
}

impl LoadDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for LoadDocsHandler {
    fn name(&self) -> &str {
        "load_docs"
    }

    fn schema(&self) -> ToolSchema {
        let extension = &self.services.config.docs.extension;
        ToolSchema {
            name: "load_docs".to_string(),
            description: format!(
                "Load a documentation section by name. \
                 Call with no section to get the documentation index (or a listing of every \
                 available section when no index exists) - start there when exploring. \
                 Section names are paths relative to the docs root; the .{extension} suffix \
                 is optional ('guide' and 'guide.{extension}' are equivalent). \
                 An unknown section returns the full listing of valid sections instead of \
                 failing, so one follow-up call always succeeds. \
                 Use grep_docs instead when you know a phrase but not which file holds it."
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "section": {
                        "type": "string",
                        "description": "Section to load, e.g. 'guide' or 'api/endpoints.md'. \
                                       Empty or omitted returns the index.",
                        "default": ""
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct LoadDocsArgs {
            #[serde(default)]
            section: String,
        }

        // Parse arguments
        let args: LoadDocsArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let text = self.services.loader.load(&args.section)?;

        Ok(text_content(text))
    }
}
