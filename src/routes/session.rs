// ABOUTME: Session mutation routes for logging items and resetting the ledger
// ABOUTME: POST /api/log, POST /api/recognize, and POST /api/reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Session mutation routes.
//!
//! `/api/log` validates strictly (400 with a structured error body on bad
//! input); `/api/recognize` always succeeds, degrading to the generic
//! fallback item when the recognizer text is unusable.

use crate::classification::{self, ParseFallback};
use crate::errors::AppResult;
use crate::mcp::resources::ServerResources;
use crate::models::LoggedItem;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Body for `POST /api/log`
#[derive(Debug, Deserialize)]
pub struct LogItemRequest {
    /// Free-text item name
    pub name: String,
    /// Category from the fixed enumeration (wire form)
    pub category: String,
}

/// Body for `POST /api/recognize`
#[derive(Debug, Deserialize)]
pub struct RecognizeRequest {
    /// Raw recognizer output text
    pub raw_text: String,
}

/// Session route handlers
pub struct SessionRoutes;

impl SessionRoutes {
    /// Build the session router
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/log", post(Self::log_item))
            .route("/api/recognize", post(Self::recognize))
            .route("/api/reset", post(Self::reset))
            .with_state(resources)
    }

    async fn append(
        resources: &Arc<ServerResources>,
        classification: classification::Classification,
    ) -> LoggedItem {
        let profile = resources.catalog.resolve(&classification.name);
        resources
            .session
            .append(classification.name, classification.category, profile, Utc::now())
            .await
    }

    /// Manual entry; strict validation
    async fn log_item(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<LogItemRequest>,
    ) -> AppResult<Json<Value>> {
        let classification = classification::classify_manual(&body.name, &body.category)?;
        let item = Self::append(&resources, classification).await;

        info!(item_id = %item.id, "logged manual item via REST");
        Ok(Json(json!({
            "item": serde_json::to_value(item)?,
            "item_count": resources.session.len().await,
        })))
    }

    /// Recognizer text; always succeeds (fallback policy)
    async fn recognize(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<RecognizeRequest>,
    ) -> AppResult<Json<Value>> {
        let outcome = classification::classify_recognizer_text(&body.raw_text);
        let fallback_reason = outcome.fallback_reason();
        let item = Self::append(&resources, outcome.into_classification()).await;

        info!(item_id = %item.id, fallback = fallback_reason.is_some(), "logged recognized item via REST");
        Ok(Json(json!({
            "item": serde_json::to_value(item)?,
            "fallback": fallback_reason.is_some(),
            "fallback_reason": fallback_reason.map(ParseFallback::reason),
            "item_count": resources.session.len().await,
        })))
    }

    /// Clear the ledger; idempotent
    async fn reset(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let removed = resources.session.clear().await;
        info!(removed, "session reset via REST");
        Json(json!({ "removed_count": removed }))
    }
}
