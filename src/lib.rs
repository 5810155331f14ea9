// ABOUTME: Main library entry point for the NutriScan demo MCP App server
// ABOUTME: Provides MCP tool endpoints and a REST dashboard surface for nutrition logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

#![deny(unsafe_code)]

//! # NutriScan MCP Server
//!
//! A demo Model Context Protocol (MCP) server for nutrition logging. The
//! server exposes tool endpoints to an AI agent host for logging food and
//! supplement items, keeps an in-memory session ledger, resolves free-text
//! item names against a static nutrition catalog, and serves aggregate
//! dashboard payloads plus mock smart-watch vitals over a small REST surface.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Catalog**: ordered keyword table resolving names to nutrient profiles
//! - **Classification**: manual-entry validation and recognizer-text extraction
//! - **Session**: the append-only (until cleared) ledger of logged items
//! - **Aggregation**: totals and per-category breakdown over a snapshot
//! - **MCP**: JSON-RPC 2.0 protocol layer and tool dispatch
//! - **Routes**: REST endpoints consumed by the dashboard widget
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriscan_mcp_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("NutriScan MCP Server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// Session aggregation: totals and per-category breakdown computation
pub mod aggregation;

/// Static nutrition catalog with ordered keyword resolution
pub mod catalog;

/// Manual-entry validation and recognizer-text classification
pub mod classification;

/// Configuration management (environment-only)
pub mod config;

/// Application constants (protocol strings, tool identifiers)
pub mod constants;

/// Unified JSON-RPC 2.0 foundation for the MCP protocol
pub mod jsonrpc;

/// Production logging and structured output
pub mod logging;

/// Model Context Protocol server implementation
pub mod mcp;

/// `HTTP` routes for the dashboard collaborator
pub mod routes;

/// Session ledger owning the logged-item sequence
pub mod session;

/// Mock smart-watch vitals generator
pub mod vitals;

pub use nutriscan_core::errors;
pub use nutriscan_core::models;
