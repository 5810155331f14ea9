// ABOUTME: Dashboard read routes serving the aggregate summary and mock vitals
// ABOUTME: GET /api/summary and GET /api/smart-watch-data with override merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Dashboard read routes.
//!
//! The summary payload is recomputed from a fresh ledger snapshot on every
//! request; nothing is cached or stored.

use crate::errors::AppResult;
use crate::mcp::resources::ServerResources;
use crate::{aggregation, vitals};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Query parameters for the vitals endpoint
#[derive(Debug, Deserialize)]
pub struct VitalsQuery {
    /// Optional JSON object string merged over the generated sample
    #[serde(rename = "override")]
    pub override_data: Option<String>,
}

/// Dashboard route handlers
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Build the dashboard router
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/summary", get(Self::summary))
            .route("/api/smart-watch-data", get(Self::smart_watch_data))
            .with_state(resources)
    }

    /// Aggregate report plus the raw item list
    async fn summary(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Value>> {
        let items = resources.session.snapshot().await;
        let report = aggregation::compute(&items);

        let mut payload = serde_json::to_value(report)?;
        if let Value::Object(fields) = &mut payload {
            fields.insert("items".to_owned(), serde_json::to_value(items)?);
        }
        Ok(Json(payload))
    }

    /// Mock smart-watch sample, with optional override merge
    async fn smart_watch_data(Query(query): Query<VitalsQuery>) -> Json<Value> {
        Json(vitals::generate_with_override(query.override_data.as_deref()))
    }
}
