// ABOUTME: Tool execution handlers for MCP tools/call requests
// ABOUTME: Parses arguments, runs the domain operations, and shapes ToolResponse payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Tool Handlers
//!
//! Dispatches `tools/call` requests to the domain operations. Validation
//! failures surface as JSON-RPC invalid-params errors; recognizer-text
//! fallbacks are successes carrying a fallback marker (the degrade-gracefully
//! contract). Tool execution never panics.

use super::resources::ServerResources;
use super::schema::ToolResponse;
use crate::constants::tools::{
    CLEAR_SESSION, GET_NUTRITION_SUMMARY, GET_SESSION_STATE, GET_SMART_WATCH_DATA, LOG_FOOD,
    LOG_RECOGNIZED_ITEM,
};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::{aggregation, classification, vitals};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Tool execution handlers for the MCP protocol
pub struct ToolHandlers;

impl ToolHandlers {
    /// Handle a tools/call request
    pub async fn handle_tools_call(
        request: JsonRpcRequest,
        resources: &Arc<ServerResources>,
    ) -> JsonRpcResponse {
        let request_id = request.id.clone();

        let Some(params) = request.params else {
            return JsonRpcResponse::error(
                request_id,
                error_codes::INVALID_PARAMS,
                "Missing parameters",
            );
        };

        let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                request_id,
                error_codes::INVALID_PARAMS,
                "Missing tool name",
            );
        };

        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
        debug!(tool_name, "dispatching tool call");

        let result = match tool_name {
            LOG_FOOD => Self::log_food(&arguments, resources).await,
            LOG_RECOGNIZED_ITEM => Self::log_recognized_item(&arguments, resources).await,
            GET_NUTRITION_SUMMARY => Self::nutrition_summary(resources).await,
            CLEAR_SESSION => Self::clear_session(resources).await,
            GET_SMART_WATCH_DATA => Self::smart_watch_data(&arguments),
            GET_SESSION_STATE => Self::session_state(resources).await,
            _ => Err(AppError::not_found(format!("Unknown tool: {tool_name}"))),
        };

        match result {
            Ok(structured) => match serde_json::to_value(ToolResponse::success(structured)) {
                Ok(payload) => JsonRpcResponse::success(request_id, payload),
                Err(err) => JsonRpcResponse::error(
                    request_id,
                    error_codes::INTERNAL_ERROR,
                    format!("Internal error: {err}"),
                ),
            },
            Err(err) => {
                JsonRpcResponse::error(request_id, Self::json_rpc_code(&err), err.message)
            }
        }
    }

    /// Map an application error to its JSON-RPC error code
    const fn json_rpc_code(err: &AppError) -> i32 {
        match err.code {
            ErrorCode::InvalidInput
            | ErrorCode::MissingRequiredField
            | ErrorCode::UnknownCategory => error_codes::INVALID_PARAMS,
            ErrorCode::ResourceNotFound => error_codes::METHOD_NOT_FOUND,
            ErrorCode::ConfigError
            | ErrorCode::InternalError
            | ErrorCode::SerializationError => error_codes::INTERNAL_ERROR,
        }
    }

    /// Extract a required string argument
    fn required_str<'a>(arguments: &'a Value, field: &str) -> AppResult<&'a str> {
        arguments
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::missing_field(field))
    }

    /// The summary payload shared by logging tools and the summary tool
    async fn summary_payload(resources: &Arc<ServerResources>) -> AppResult<Value> {
        let items = resources.session.snapshot().await;
        let report = aggregation::compute(&items);
        let mut payload = serde_json::to_value(report)?;
        if let Value::Object(fields) = &mut payload {
            fields.insert("items".to_owned(), serde_json::to_value(items)?);
        }
        Ok(payload)
    }

    /// `log_food`: validate a manual entry, resolve nutrition, append
    async fn log_food(arguments: &Value, resources: &Arc<ServerResources>) -> AppResult<Value> {
        let name = Self::required_str(arguments, "name")?;
        let category = Self::required_str(arguments, "category")?;

        let classification = classification::classify_manual(name, category)?;
        let profile = resources.catalog.resolve(&classification.name);
        let item = resources
            .session
            .append(classification.name, classification.category, profile, Utc::now())
            .await;

        info!(item_id = %item.id, category = %item.category, "logged manual item");
        Ok(json!({
            "item": serde_json::to_value(&item)?,
            "summary": Self::summary_payload(resources).await?,
        }))
    }

    /// `log_recognized_item`: extract from raw recognizer text, append
    ///
    /// Parse failures degrade to the generic fallback item and still succeed.
    async fn log_recognized_item(
        arguments: &Value,
        resources: &Arc<ServerResources>,
    ) -> AppResult<Value> {
        let raw_text = Self::required_str(arguments, "raw_text")?;

        let outcome = classification::classify_recognizer_text(raw_text);
        let fallback_reason = outcome.fallback_reason();
        let classification = outcome.into_classification();

        let profile = resources.catalog.resolve(&classification.name);
        let item = resources
            .session
            .append(classification.name, classification.category, profile, Utc::now())
            .await;

        info!(
            item_id = %item.id,
            fallback = fallback_reason.is_some(),
            "logged recognized item"
        );
        Ok(json!({
            "item": serde_json::to_value(&item)?,
            "fallback": fallback_reason.is_some(),
            "fallback_reason": fallback_reason.map(classification::ParseFallback::reason),
            "summary": Self::summary_payload(resources).await?,
        }))
    }

    /// `get_nutrition_summary`: the aggregate report plus the item list
    async fn nutrition_summary(resources: &Arc<ServerResources>) -> AppResult<Value> {
        Self::summary_payload(resources).await
    }

    /// `clear_session`: bulk-remove every logged item
    async fn clear_session(resources: &Arc<ServerResources>) -> AppResult<Value> {
        let removed = resources.session.clear().await;
        info!(removed, "cleared session via tool call");
        Ok(json!({ "removed_count": removed }))
    }

    /// `get_smart_watch_data`: mock vitals with optional override merge
    fn smart_watch_data(arguments: &Value) -> AppResult<Value> {
        let override_data = arguments.get("override_data").and_then(Value::as_str);
        Ok(vitals::generate_with_override(override_data))
    }

    /// `get_session_state`: session metadata
    async fn session_state(resources: &Arc<ServerResources>) -> AppResult<Value> {
        Ok(json!({
            "session_id": resources.session.id().to_string(),
            "item_count": resources.session.len().await,
            "created_at": resources.session.created_at().to_rfc3339(),
        }))
    }
}
