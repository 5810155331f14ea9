// ABOUTME: Tool name identifiers for the MCP tool surface
// ABOUTME: Single source of truth shared by schema definitions and dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Tool name identifiers.
//!
//! Shared by `mcp::schema` (tool listing) and `mcp::tool_handlers` (dispatch)
//! so the two can never drift apart.

/// Log a manually entered food/supplement item
pub const LOG_FOOD: &str = "log_food";

/// Log an item from raw recognizer output text
pub const LOG_RECOGNIZED_ITEM: &str = "log_recognized_item";

/// Fetch the aggregate nutrition summary and item list
pub const GET_NUTRITION_SUMMARY: &str = "get_nutrition_summary";

/// Clear the current session ledger
pub const CLEAR_SESSION: &str = "clear_session";

/// Fetch a mock smart-watch vitals sample
pub const GET_SMART_WATCH_DATA: &str = "get_smart_watch_data";

/// Fetch session metadata (id, item count, created-at)
pub const GET_SESSION_STATE: &str = "get_session_state";
