// ABOUTME: Application constants organized by domain
// ABOUTME: Protocol strings, JSON-RPC plumbing, and tool identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Application-wide constants organized by domain.

/// MCP protocol version, server identity, and JSON-RPC version strings
pub mod protocol;

/// Tool name identifiers exposed over `tools/list`
pub mod tools;
