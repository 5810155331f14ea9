// ABOUTME: Session ledger owning the ordered sequence of logged items
// ABOUTME: Append, snapshot, and clear under an async RwLock; no global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Session Ledger
//!
//! Owns the ordered list of [`LoggedItem`] for one session and provides the
//! only mutation points. Insertion order is chronological order is wire
//! order; "most recent first" is a presentation concern of the dashboard.
//!
//! Each [`Session`] is an explicit, independently-lifetimed object so several
//! sessions can coexist in one process without shared globals. The ledger is
//! shared across concurrent tool invocations, so mutations are serialized
//! behind a `tokio::sync::RwLock`: `append` and `clear` are atomic with
//! respect to each other and `snapshot` never observes a torn write.

use crate::models::{FoodCategory, LoggedItem, NutrientProfile};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Interior ledger state guarded by the session lock
#[derive(Debug, Default)]
struct LedgerState {
    items: Vec<LoggedItem>,
    next_id: u64,
}

/// One session's append-only (until cleared) item ledger
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    state: RwLock<LedgerState>,
}

impl Session {
    /// Create an empty session with a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a newly logged item and return the stored copy
    ///
    /// Item ids are a per-session monotonic counter (`item-1`, `item-2`, ...)
    /// that is never reset, so ids stay unique across clears for the
    /// session's whole lifetime. Infallible.
    pub async fn append(
        &self,
        name: impl Into<String>,
        category: FoodCategory,
        profile: NutrientProfile,
        timestamp: DateTime<Utc>,
    ) -> LoggedItem {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let item = LoggedItem {
            id: format!("item-{}", state.next_id),
            name: name.into(),
            category,
            timestamp,
            profile,
        };
        state.items.push(item.clone());
        debug!(session_id = %self.id, item_id = %item.id, "appended ledger item");
        item
    }

    /// An owned copy of the ledger in insertion order
    ///
    /// Never mutates internal state; safe to call concurrently with other
    /// reads.
    pub async fn snapshot(&self) -> Vec<LoggedItem> {
        self.state.read().await.items.clone()
    }

    /// Remove every item and return the removed count
    ///
    /// Idempotent: clearing an empty session returns 0.
    pub async fn clear(&self) -> usize {
        let mut state = self.state.write().await;
        let removed = state.items.len();
        state.items.clear();
        debug!(session_id = %self.id, removed, "cleared session ledger");
        removed
    }

    /// Number of items currently in the ledger
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Whether the ledger is currently empty
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
