// ABOUTME: Integration tests for the MCP protocol layer
// ABOUTME: Covers initialize, ping, tools/list, tools/call dispatch, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan_mcp_server::config::environment::ServerConfig;
use nutriscan_mcp_server::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use nutriscan_mcp_server::mcp::request_processor::McpRequestProcessor;
use nutriscan_mcp_server::mcp::resources::ServerResources;
use serde_json::{json, Value};
use std::sync::Arc;

fn processor() -> McpRequestProcessor {
    let resources = Arc::new(ServerResources::new(ServerConfig::default()));
    McpRequestProcessor::new(resources)
}

async fn call_tool(processor: &McpRequestProcessor, name: &str, arguments: Value) -> JsonRpcResponse {
    let request = JsonRpcRequest::new(
        "tools/call",
        Some(json!({ "name": name, "arguments": arguments })),
    );
    processor
        .handle_request(request)
        .await
        .expect("tools/call must produce a response")
}

fn structured(response: &JsonRpcResponse) -> Value {
    response
        .result
        .as_ref()
        .expect("expected success result")["structuredContent"]
        .clone()
}

// ============================================================================
// Protocol plumbing
// ============================================================================

#[tokio::test]
async fn test_initialize_advertises_tools_capability() {
    let response = processor()
        .handle_request(JsonRpcRequest::new("initialize", None))
        .await
        .unwrap();

    assert!(response.is_success());
    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "nutriscan-mcp-server");
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_ping_returns_empty_object() {
    let response = processor()
        .handle_request(JsonRpcRequest::new("ping", None))
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.result.unwrap(), json!({}));
}

#[tokio::test]
async fn test_tools_list_exposes_all_tools() {
    let response = processor()
        .handle_request(JsonRpcRequest::new("tools/list", None))
        .await
        .unwrap();

    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 6);

    let names: Vec<&str> = tools
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"log_food"));
    assert!(names.contains(&"log_recognized_item"));
    assert!(names.contains(&"get_nutrition_summary"));
    assert!(names.contains(&"clear_session"));
    assert!(names.contains(&"get_smart_watch_data"));
    assert!(names.contains(&"get_session_state"));
}

#[tokio::test]
async fn test_unknown_method_returns_method_not_found() {
    let response = processor()
        .handle_request(JsonRpcRequest::new("resources/list", None))
        .await
        .unwrap();

    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::METHOD_NOT_FOUND
    );
}

#[tokio::test]
async fn test_invalid_jsonrpc_version_is_rejected() {
    let mut request = JsonRpcRequest::new("ping", None);
    request.jsonrpc = "1.0".to_owned();

    let response = processor().handle_request(request).await.unwrap();

    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_REQUEST);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let request = JsonRpcRequest::notification("notifications/initialized", None);

    let response = processor().handle_request(request).await;

    assert!(response.is_none());
}

// ============================================================================
// Tool dispatch
// ============================================================================

#[tokio::test]
async fn test_log_food_appends_and_reports_summary() {
    let processor = processor();

    let response = call_tool(
        &processor,
        "log_food",
        json!({ "name": "Apple", "category": "fruit" }),
    )
    .await;

    assert!(response.is_success());
    let payload = structured(&response);
    assert_eq!(payload["item"]["name"], "Apple");
    assert_eq!(payload["item"]["category"], "fruit");
    assert_eq!(payload["summary"]["item_count"], 1);
    assert_eq!(payload["summary"]["category_breakdown"]["fruit"], 1);
}

#[tokio::test]
async fn test_log_food_rejects_unknown_category() {
    let response = call_tool(
        &processor(),
        "log_food",
        json!({ "name": "Apple", "category": "plasma" }),
    )
    .await;

    assert!(response.is_error());
    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("plasma"));
}

#[tokio::test]
async fn test_log_food_rejects_empty_name() {
    let response = call_tool(
        &processor(),
        "log_food",
        json!({ "name": "   ", "category": "meal" }),
    )
    .await;

    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_log_food_requires_arguments() {
    let response = call_tool(&processor(), "log_food", json!({})).await;

    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_log_recognized_item_with_clean_json() {
    let processor = processor();

    let response = call_tool(
        &processor,
        "log_recognized_item",
        json!({ "raw_text": "{\"name\": \"Banana\", \"category\": \"fruit\"}" }),
    )
    .await;

    assert!(response.is_success());
    let payload = structured(&response);
    assert_eq!(payload["item"]["name"], "Banana");
    assert_eq!(payload["fallback"], false);
    assert_eq!(payload["fallback_reason"], Value::Null);
}

#[tokio::test]
async fn test_log_recognized_item_falls_back_on_garbage() {
    let processor = processor();

    let response = call_tool(
        &processor,
        "log_recognized_item",
        json!({ "raw_text": "I think it's food but no JSON here" }),
    )
    .await;

    // The degrade-gracefully contract: still a success, generic item logged.
    assert!(response.is_success());
    let payload = structured(&response);
    assert_eq!(payload["item"]["name"], "unknown food");
    assert_eq!(payload["item"]["category"], "meal");
    assert_eq!(payload["fallback"], true);
    assert_eq!(payload["fallback_reason"], "no_json_object");
    assert_eq!(payload["summary"]["item_count"], 1);
}

#[tokio::test]
async fn test_clear_session_reports_removed_count() {
    let processor = processor();

    call_tool(
        &processor,
        "log_food",
        json!({ "name": "Apple", "category": "fruit" }),
    )
    .await;
    call_tool(
        &processor,
        "log_food",
        json!({ "name": "Coffee", "category": "beverage" }),
    )
    .await;

    let response = call_tool(&processor, "clear_session", json!({})).await;
    assert_eq!(structured(&response)["removed_count"], 2);

    // Idempotent: a second clear removes nothing.
    let response = call_tool(&processor, "clear_session", json!({})).await;
    assert_eq!(structured(&response)["removed_count"], 0);
}

#[tokio::test]
async fn test_get_smart_watch_data_honors_override() {
    let response = call_tool(
        &processor(),
        "get_smart_watch_data",
        json!({ "override_data": "{\"heart_rate_bpm\": 72}" }),
    )
    .await;

    let payload = structured(&response);
    assert_eq!(payload["heart_rate_bpm"], 72);
    assert!(payload["sleep_score"].is_u64());
}

#[tokio::test]
async fn test_get_session_state_reports_metadata() {
    let processor = processor();

    call_tool(
        &processor,
        "log_food",
        json!({ "name": "Apple", "category": "fruit" }),
    )
    .await;

    let response = call_tool(&processor, "get_session_state", json!({})).await;
    let payload = structured(&response);

    assert_eq!(payload["item_count"], 1);
    assert!(payload["session_id"].is_string());
    assert!(payload["created_at"].is_string());
}

#[tokio::test]
async fn test_unknown_tool_returns_error() {
    let response = call_tool(&processor(), "teleport_food", json!({})).await;

    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::METHOD_NOT_FOUND
    );
}

#[tokio::test]
async fn test_tools_call_without_params_is_invalid() {
    let response = processor()
        .handle_request(JsonRpcRequest::new("tools/call", None))
        .await
        .unwrap();

    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tool_response_carries_text_content() {
    let response = call_tool(&processor(), "get_nutrition_summary", json!({})).await;

    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
    assert!(result["content"][0]["text"].is_string());
}
