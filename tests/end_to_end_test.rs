// ABOUTME: End-to-end scenario tests across classification, catalog, ledger, and aggregation
// ABOUTME: Exercises the full log-then-summarize pipeline the dashboard depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use nutriscan_mcp_server::catalog::NutritionCatalog;
use nutriscan_mcp_server::classification::{classify_manual, classify_recognizer_text};
use nutriscan_mcp_server::models::FoodCategory;
use nutriscan_mcp_server::session::Session;
use nutriscan_mcp_server::aggregation;

#[tokio::test]
async fn test_apple_and_whey_protein_scenario() {
    let catalog = NutritionCatalog::builtin();
    let session = Session::new();

    for (name, category) in [("Apple", "fruit"), ("Whey Protein", "supplement")] {
        let classification = classify_manual(name, category).unwrap();
        let profile = catalog.resolve(&classification.name);
        session
            .append(classification.name, classification.category, profile, Utc::now())
            .await;
    }

    let snapshot = session.snapshot().await;
    let report = aggregation::compute(&snapshot);

    assert_eq!(report.item_count, 2);
    assert_eq!(report.category_breakdown[&FoodCategory::Fruit], 1);
    assert_eq!(report.category_breakdown[&FoodCategory::Supplement], 1);
    assert!((report.totals.calories - 172.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_recognizer_driven_logging_pipeline() {
    let catalog = NutritionCatalog::builtin();
    let session = Session::new();

    // A clean recognizer hit and a garbage response both produce ledger items.
    for raw in [
        r#"{"name": "Medium Apple", "category": "fruit"}"#,
        "hmm, hard to say",
    ] {
        let classification = classify_recognizer_text(raw).into_classification();
        let profile = catalog.resolve(&classification.name);
        session
            .append(classification.name, classification.category, profile, Utc::now())
            .await;
    }

    let snapshot = session.snapshot().await;
    let report = aggregation::compute(&snapshot);

    assert_eq!(report.item_count, 2);
    assert_eq!(snapshot[0].name, "Medium Apple");
    assert_eq!(snapshot[1].name, "unknown food");
    assert_eq!(snapshot[1].category, FoodCategory::Meal);

    // "Medium Apple" resolved through the catalog; the fallback item got the
    // default profile.
    assert!((snapshot[0].profile.calories - 52.0).abs() < f64::EPSILON);
    assert_eq!(snapshot[1].profile, catalog.default_profile());
}

#[tokio::test]
async fn test_sum_invariant_holds_after_clear_and_relog() {
    let catalog = NutritionCatalog::builtin();
    let session = Session::new();

    for name in ["banana", "oatmeal", "coffee"] {
        let profile = catalog.resolve(name);
        session
            .append(name, FoodCategory::Meal, profile, Utc::now())
            .await;
    }
    session.clear().await;

    let profile = catalog.resolve("egg");
    session
        .append("egg", FoodCategory::Protein, profile, Utc::now())
        .await;

    let snapshot = session.snapshot().await;
    let report = aggregation::compute(&snapshot);

    let expected: f64 = snapshot.iter().map(|item| item.profile.calories).sum();
    assert!((report.totals.calories - expected).abs() < 1e-9);
    assert_eq!(
        report.category_breakdown.values().sum::<usize>(),
        report.item_count
    );
    assert_eq!(report.item_count, snapshot.len());
}
