// ABOUTME: Protocol identity constants for the MCP server
// ABOUTME: JSON-RPC version, MCP protocol version, and server naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Protocol identity constants.

/// JSON-RPC 2.0 version string
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision implemented by this server
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name advertised in the `initialize` response
pub const SERVER_NAME: &str = "nutriscan-mcp-server";

/// Server version advertised in the `initialize` response
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
