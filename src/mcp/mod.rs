// ABOUTME: Model Context Protocol server implementation modules
// ABOUTME: Schema, shared resources, request routing, tool dispatch, and HTTP wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Model Context Protocol server implementation.

/// Axum endpoint exposing the MCP JSON-RPC surface over HTTP
pub mod http_setup;

/// Request validation and method routing
pub mod request_processor;

/// Shared server state container (session, catalog, config)
pub mod resources;

/// Typed MCP schema structures and tool definitions
pub mod schema;

/// tools/call dispatch to the domain operations
pub mod tool_handlers;
