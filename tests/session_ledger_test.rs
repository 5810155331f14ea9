// ABOUTME: Tests for the session ledger's append, snapshot, and clear operations
// ABOUTME: Covers insertion order, idempotent clear, id uniqueness, and concurrent appends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use nutriscan_mcp_server::models::{FoodCategory, NutrientProfile};
use nutriscan_mcp_server::session::Session;
use std::collections::HashSet;
use std::sync::Arc;

fn profile() -> NutrientProfile {
    NutrientProfile::new(52.0, 0.3, 14.0, 0.2, 2.4, 10.0)
}

#[tokio::test]
async fn test_append_preserves_insertion_order() {
    let session = Session::new();

    session
        .append("Apple", FoodCategory::Fruit, profile(), Utc::now())
        .await;
    session
        .append("Banana", FoodCategory::Fruit, profile(), Utc::now())
        .await;
    session
        .append("Coffee", FoodCategory::Beverage, profile(), Utc::now())
        .await;

    let items = session.snapshot().await;
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Banana", "Coffee"]);
}

#[tokio::test]
async fn test_append_returns_stored_item() {
    let session = Session::new();

    let item = session
        .append("Apple", FoodCategory::Fruit, profile(), Utc::now())
        .await;

    assert_eq!(item.id, "item-1");
    assert_eq!(item.name, "Apple");
    assert_eq!(item.category, FoodCategory::Fruit);

    let items = session.snapshot().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let session = Session::new();

    session
        .append("Apple", FoodCategory::Fruit, profile(), Utc::now())
        .await;
    session
        .append("Banana", FoodCategory::Fruit, profile(), Utc::now())
        .await;

    assert_eq!(session.clear().await, 2);
    assert!(session.is_empty().await);

    // Second clear finds nothing
    assert_eq!(session.clear().await, 0);
    assert!(session.is_empty().await);
}

#[tokio::test]
async fn test_ids_stay_unique_across_clears() {
    let session = Session::new();

    let first = session
        .append("Apple", FoodCategory::Fruit, profile(), Utc::now())
        .await;
    session.clear().await;
    let second = session
        .append("Banana", FoodCategory::Fruit, profile(), Utc::now())
        .await;

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_snapshot_is_a_copy() {
    let session = Session::new();

    session
        .append("Apple", FoodCategory::Fruit, profile(), Utc::now())
        .await;

    let before = session.snapshot().await;
    session.clear().await;

    // The earlier snapshot is unaffected by the clear.
    assert_eq!(before.len(), 1);
    assert!(session.is_empty().await);
}

#[tokio::test]
async fn test_concurrent_appends_are_serialized() {
    let session = Arc::new(Session::new());
    let mut handles = Vec::new();

    for task in 0..10 {
        let session = Arc::clone(&session);
        handles.push(tokio::spawn(async move {
            for i in 0..10 {
                session
                    .append(
                        format!("item {task}-{i}"),
                        FoodCategory::Meal,
                        NutrientProfile::ZERO,
                        Utc::now(),
                    )
                    .await;
            }
        }));
    }

    for handle in handles {
        handle.await.expect("append task panicked");
    }

    let items = session.snapshot().await;
    assert_eq!(items.len(), 100);

    // Every id was assigned exactly once.
    let ids: HashSet<String> = items.into_iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), 100);
}

#[tokio::test]
async fn test_clear_racing_append_never_tears() {
    let session = Arc::new(Session::new());

    let appender = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            for i in 0..50 {
                session
                    .append(
                        format!("item {i}"),
                        FoodCategory::Meal,
                        NutrientProfile::ZERO,
                        Utc::now(),
                    )
                    .await;
            }
        })
    };

    let clearer = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            let mut removed = 0;
            for _ in 0..10 {
                removed += session.clear().await;
                tokio::task::yield_now().await;
            }
            removed
        })
    };

    appender.await.expect("appender panicked");
    let removed = clearer.await.expect("clearer panicked");
    let remaining = session.len().await;

    // Every append landed exactly once: either cleared or still present.
    assert_eq!(removed + remaining, 50);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let first = Session::new();
    let second = Session::new();

    first
        .append("Apple", FoodCategory::Fruit, profile(), Utc::now())
        .await;

    assert_ne!(first.id(), second.id());
    assert_eq!(first.len().await, 1);
    assert!(second.is_empty().await);
}
