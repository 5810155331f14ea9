// ABOUTME: MCP request validation and method routing
// ABOUTME: Routes initialize, ping, tools/list, tools/call, and notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # MCP Request Processor
//!
//! Validates incoming JSON-RPC requests and routes them to the protocol
//! handlers. Notifications are consumed without a response; every other
//! request produces exactly one response, error responses included.

use super::resources::ServerResources;
use super::schema::{get_tools, InitializeResponse};
use super::tool_handlers::ToolHandlers;
use crate::constants::protocol::JSONRPC_VERSION;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP request and return a response
    ///
    /// Returns `None` for notifications, which get no response per the
    /// JSON-RPC specification.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        debug!(method = %request.method, id = ?request.id, "processing MCP request");

        if request.method.starts_with("notifications/") {
            debug!(method = %request.method, "consumed notification");
            return None;
        }

        let response = self.process_request(request).await;
        debug!(duration_ms = start_time.elapsed().as_millis() as u64, "request complete");
        Some(response)
    }

    async fn process_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        if let Err(response) = Self::validate_request(&request) {
            return response;
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(&request),
            "ping" => Self::handle_ping(&request),
            "tools/list" => Self::handle_tools_list(&request),
            "tools/call" => ToolHandlers::handle_tools_call(request, &self.resources).await,
            _ => Self::handle_unknown_method(&request),
        }
    }

    /// Validate MCP request format and required fields
    fn validate_request(request: &JsonRpcRequest) -> Result<(), JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(JsonRpcResponse::error(
                request.id.clone(),
                error_codes::INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{JSONRPC_VERSION}'",
                    request.jsonrpc
                ),
            ));
        }

        if request.method.is_empty() {
            return Err(JsonRpcResponse::error(
                request.id.clone(),
                error_codes::INVALID_REQUEST,
                "Missing method",
            ));
        }

        Ok(())
    }

    /// Handle MCP initialize request
    fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("handling initialize request");

        match serde_json::to_value(InitializeResponse::current()) {
            Ok(result) => JsonRpcResponse::success(request.id.clone(), result),
            Err(err) => JsonRpcResponse::error(
                request.id.clone(),
                error_codes::INTERNAL_ERROR,
                format!("Internal error: {err}"),
            ),
        }
    }

    /// Handle MCP ping request
    fn handle_ping(request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("handling ping request");
        JsonRpcResponse::success(request.id.clone(), json!({}))
    }

    /// Handle tools/list request
    ///
    /// Tool discovery carries no session state and works unconditionally.
    fn handle_tools_list(request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("handling tools/list request");

        match serde_json::to_value(get_tools()) {
            Ok(tools) => JsonRpcResponse::success(request.id.clone(), json!({ "tools": tools })),
            Err(err) => JsonRpcResponse::error(
                request.id.clone(),
                error_codes::INTERNAL_ERROR,
                format!("Internal error: {err}"),
            ),
        }
    }

    /// Handle unknown method request
    fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        warn!(method = %request.method, "unknown MCP method");
        JsonRpcResponse::error(
            request.id.clone(),
            error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
