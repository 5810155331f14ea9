// ABOUTME: HTTP transport for the MCP JSON-RPC surface
// ABOUTME: Exposes POST /mcp on the axum router, mapping notifications to 202
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # MCP HTTP Transport
//!
//! Wires the MCP request processor onto the axum router. A single
//! `POST /mcp` endpoint accepts JSON-RPC 2.0 request bodies; notifications
//! produce `202 Accepted` with no body, everything else a JSON-RPC response.

use super::request_processor::McpRequestProcessor;
use super::resources::ServerResources;
use crate::jsonrpc::JsonRpcRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

/// Build the MCP router (one `POST /mcp` endpoint)
pub fn mcp_routes(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp_request))
        .with_state(resources)
}

/// Process one JSON-RPC request body
async fn handle_mcp_request(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    let processor = McpRequestProcessor::new(resources);
    match processor.handle_request(request).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
