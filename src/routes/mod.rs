// ABOUTME: HTTP route composition for the dashboard collaborator
// ABOUTME: Merges health, dashboard, session, and MCP routers with CORS and tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # HTTP Routes
//!
//! The REST surface consumed by the dashboard widget, plus the MCP JSON-RPC
//! endpoint. CORS is wide open: the demo dashboard is served from another
//! origin.

use crate::mcp::http_setup::mcp_routes;
use crate::mcp::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Health and readiness endpoints
pub mod health;

/// Dashboard read endpoints (summary, vitals)
pub mod dashboard;

/// Session mutation endpoints (log, recognize, reset)
pub mod session;

/// Build the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(dashboard::DashboardRoutes::routes(resources.clone()))
        .merge(session::SessionRoutes::routes(resources.clone()))
        .merge(mcp_routes(resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
