//! MCP protocol method handlers
//!
//! `dispatch` is the transport-agnostic router: the stdio loop and
//! the HTTP `/mcp` endpoint both feed requests through it.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{GrepDocsHandler, LoadDocsHandler, ToolRegistry};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
    server_name: String,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        // Register all available tools
        registry.register(Arc::new(LoadDocsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GrepDocsHandler::new(Arc::clone(&services))));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
            server_name: services.config.server.name.clone(),
        }
    }

    /// Route a request to the matching method handler
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => {
                self.handle_initialized(request).await
            }
            "tools/list" => self.handle_tools_list(request).await,
            "tools/call" => self.handle_tools_call(request).await,
            "ping" => self.handle_ping(request).await,
            _ => Ok(self.create_error_response(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let _params: InitializeParams =
            serde_json::from_value(request.params.unwrap_or_else(|| json!({})))?;

        info!("Client initialized");

        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(serde_json::to_value(result)?),
            error: None,
        })
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Initialized is a notification, no response needed
        Ok(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: None,
            result: None,
            error: None,
        })
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        // Get tools from registry
        let tools = self.tool_registry.list();

        Ok(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(json!({ "tools": tools })),
            error: None,
        })
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        // Parse params
        let params_value = match request.params.clone() {
            Some(v) => v,
            None => {
                return Ok(self.create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    "Missing params".to_string(),
                ));
            }
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(self.create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        // Get tool handler from registry
        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(self.create_error_response(
                    request.id,
                    INVALID_REQUEST,
                    format!("Tool not found: {}", params.name),
                ));
            }
        };

        // Execute tool and handle errors
        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id,
                result: Some(serde_json::to_value(result)?),
                error: None,
            }),
            Err(e) => {
                // Map McpError to proper JSON-RPC error code
                let (code, message) = match &e {
                    McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
                    McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
                    McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
                    McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
                    McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
                    McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
                };

                Ok(self.create_error_response(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(json!({})),
            error: None,
        })
    }

    /// Create an error response with proper structure
    pub fn create_error_response(
        &self,
        id: Option<Value>,
        code: i32,
        message: String,
    ) -> JsonRpcResponse {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
        }
    }
}
