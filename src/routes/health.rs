// ABOUTME: Health and readiness check routes
// ABOUTME: Unauthenticated liveness endpoints with RFC3339 timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Health check routes.

use crate::constants::protocol::SERVER_NAME;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health check route handlers
pub struct HealthRoutes;

impl HealthRoutes {
    /// Build the health router
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
    }

    async fn health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": SERVER_NAME,
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}
