// ABOUTME: MCP protocol schema definitions and tool schemas
// ABOUTME: Typed structures for initialize, capabilities, tool listing, and tool responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP protocol messages, capabilities, and tool
//! schemas. Tool definitions live here (next to the schema types) so the
//! `tools/list` payload is never hand-rolled JSON.

use crate::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::constants::tools::{
    CLEAR_SESSION, GET_NUTRITION_SUMMARY, GET_SESSION_STATE, GET_SMART_WATCH_DATA, LOG_FOOD,
    LOG_RECOGNIZED_ITEM,
};
use crate::models::FoodCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name (stable identifier)
    pub name: String,
    /// Human-readable tool description
    pub description: String,
    /// JSON Schema for the tool's arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type (always "object" for tool inputs)
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl JsonSchema {
    /// An object schema with no properties (parameterless tool)
    #[must_use]
    pub fn empty_object() -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: None,
            required: None,
        }
    }

    /// An object schema from `(name, description, required)` triples
    #[must_use]
    pub fn object(properties: &[(&str, &str, bool)]) -> Self {
        let mut props = HashMap::new();
        let mut required = Vec::new();
        for (name, description, is_required) in properties {
            props.insert(
                (*name).to_owned(),
                PropertySchema {
                    property_type: "string".to_owned(),
                    description: Some((*description).to_owned()),
                },
            );
            if *is_required {
                required.push((*name).to_owned());
            }
        }
        Self {
            schema_type: "object".to_owned(),
            properties: Some(props),
            required: if required.is_empty() {
                None
            } else {
                Some(required)
            },
        }
    }
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Property description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Response content blocks
    pub content: Vec<Content>,
    /// Whether the tool execution failed
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// Machine-readable result payload
    #[serde(rename = "structuredContent", skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<serde_json::Value>,
}

impl ToolResponse {
    /// Build a success response carrying both a text rendering and the
    /// structured payload
    #[must_use]
    pub fn success(structured: serde_json::Value) -> Self {
        let text = serde_json::to_string_pretty(&structured)
            .unwrap_or_else(|_| structured.to_string());
        Self {
            content: vec![Content::Text { text }],
            is_error: false,
            structured_content: Some(structured),
        }
    }
}

/// Content types for MCP messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text {
        /// The text body
        text: String,
    },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the server emits tools/list_changed notifications
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Response payload for the `initialize` method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol revision the server speaks
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Advertised capabilities
    pub capabilities: ServerCapabilities,
    /// Server identity
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

impl InitializeResponse {
    /// The initialize response for this server
    #[must_use]
    pub fn current() -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION.to_owned(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_owned(),
                version: SERVER_VERSION.to_owned(),
            },
        }
    }
}

/// All tools exposed over `tools/list`
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    let category_help = format!(
        "Food category, one of: {}",
        FoodCategory::ALL.map(FoodCategory::as_str).join(", ")
    );

    vec![
        ToolSchema {
            name: LOG_FOOD.to_owned(),
            description: "Log a manually entered food or supplement item with its category"
                .to_owned(),
            input_schema: JsonSchema::object(&[
                ("name", "Free-text item name, e.g. 'Apple'", true),
                ("category", category_help.as_str(), true),
            ]),
        },
        ToolSchema {
            name: LOG_RECOGNIZED_ITEM.to_owned(),
            description: "Log an item from raw recognizer output text; falls back to a generic \
                          item when the text contains no usable JSON"
                .to_owned(),
            input_schema: JsonSchema::object(&[(
                "raw_text",
                "Raw text emitted by the image recognizer, expected to contain a JSON object \
                 with 'name' and 'category' fields",
                true,
            )]),
        },
        ToolSchema {
            name: GET_NUTRITION_SUMMARY.to_owned(),
            description: "Get nutrient totals, the per-category breakdown, and the logged item \
                          list for the current session"
                .to_owned(),
            input_schema: JsonSchema::empty_object(),
        },
        ToolSchema {
            name: CLEAR_SESSION.to_owned(),
            description: "Remove every logged item from the current session".to_owned(),
            input_schema: JsonSchema::empty_object(),
        },
        ToolSchema {
            name: GET_SMART_WATCH_DATA.to_owned(),
            description: "Return smart watch health statistics as JSON; pass override_data as a \
                          JSON string to replace specific fields"
                .to_owned(),
            input_schema: JsonSchema::object(&[(
                "override_data",
                "Optional JSON object string merged over the generated sample, e.g. \
                 '{\"heart_rate_bpm\": 72}'",
                false,
            )]),
        },
        ToolSchema {
            name: GET_SESSION_STATE.to_owned(),
            description: "Get session metadata: id, item count, and creation time".to_owned(),
            input_schema: JsonSchema::empty_object(),
        },
    ]
}
