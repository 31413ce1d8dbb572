//! End-to-end dispatch tests: JSON-RPC in, JSON-RPC out
//!
//! Drives the transport-agnostic router the way both the stdio and
//! HTTP adapters do.

use crate::common::DocsTree;
use docshelf::mcp::protocol::{JsonRpcRequest, INTERNAL_ERROR, METHOD_NOT_FOUND};
use docshelf::mcp::ProtocolHandlers;
use serde_json::{json, Value};

fn handlers_for(tree: &DocsTree) -> ProtocolHandlers {
    ProtocolHandlers::new(tree.services())
}

async fn dispatch(handlers: &ProtocolHandlers, raw: Value) -> Value {
    let request: JsonRpcRequest = serde_json::from_value(raw).unwrap();
    let response = handlers.dispatch(request).await.unwrap();
    serde_json::to_value(response).unwrap()
}

fn tool_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn test_initialize_then_list_then_call() {
    let tree = DocsTree::sample();
    let handlers = handlers_for(&tree);

    let init = dispatch(
        &handlers,
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    )
    .await;
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");

    let list = dispatch(
        &handlers,
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    )
    .await;
    assert_eq!(list["result"]["tools"].as_array().unwrap().len(), 2);

    let call = dispatch(
        &handlers,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "load_docs", "arguments": {"section": "guide"}}
        }),
    )
    .await;
    assert!(tool_text(&call).starts_with("# Guide"));
}

#[tokio::test]
async fn test_load_docs_empty_section_returns_index() {
    let tree = DocsTree::sample();
    let handlers = handlers_for(&tree);

    let call = dispatch(
        &handlers,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "load_docs", "arguments": {}}
        }),
    )
    .await;
    assert!(tool_text(&call).starts_with("# Documentation"));
}

#[tokio::test]
async fn test_load_docs_traversal_is_uniform_not_found() {
    let tree = DocsTree::sample();
    // Content outside the root that a traversal would reach
    std::fs::write(
        tree.root().parent().unwrap().join("dispatch-escape.md"),
        "outside",
    )
    .unwrap();

    let handlers = handlers_for(&tree);

    let call = dispatch(
        &handlers,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "load_docs", "arguments": {"section": "../dispatch-escape"}}
        }),
    )
    .await;

    let text = tool_text(&call);
    assert!(text.contains("not found"));
    assert!(!text.contains("outside"));

    let _ = std::fs::remove_file(tree.root().parent().unwrap().join("dispatch-escape.md"));
}

#[tokio::test]
async fn test_grep_docs_over_corpus() {
    let tree = DocsTree::sample();
    let handlers = handlers_for(&tree);

    let call = dispatch(
        &handlers,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "grep_docs", "arguments": {"pattern": "error"}}
        }),
    )
    .await;

    let text = tool_text(&call);
    // File-path-ascending order
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("api/errors.md:"));
    assert!(text.contains("guide.md:"));
}

#[tokio::test]
async fn test_grep_docs_invalid_regex_is_not_a_protocol_error() {
    let tree = DocsTree::sample();
    let handlers = handlers_for(&tree);

    let call = dispatch(
        &handlers,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "grep_docs", "arguments": {"pattern": "(unbalanced"}}
        }),
    )
    .await;

    assert!(call.get("error").is_none());
    assert!(tool_text(&call).starts_with("Invalid regex pattern:"));
}

#[tokio::test]
async fn test_load_docs_undecodable_section_is_internal_error() {
    let tree = DocsTree::sample();
    std::fs::write(tree.root().join("binary.md"), [0xffu8, 0xfe, 0x00]).unwrap();
    let handlers = handlers_for(&tree);

    let call = dispatch(
        &handlers,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "load_docs", "arguments": {"section": "binary"}}
        }),
    )
    .await;

    assert_eq!(call["error"]["code"], INTERNAL_ERROR);
}

#[tokio::test]
async fn test_unknown_method_error() {
    let tree = DocsTree::empty();
    let handlers = handlers_for(&tree);

    let response = dispatch(
        &handlers,
        json!({"jsonrpc": "2.0", "id": 1, "method": "prompts/list"}),
    )
    .await;

    assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
}
