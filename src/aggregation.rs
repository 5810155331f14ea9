// ABOUTME: Aggregation engine computing dashboard totals from a ledger snapshot
// ABOUTME: Component-wise nutrient sums, per-category counts, and item count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Aggregation Engine
//!
//! Computes the [`AggregateReport`] the dashboard renders. Pure and
//! deterministic: a total function over any well-formed snapshot, including
//! the empty one.

use crate::models::{AggregateReport, LoggedItem, NutrientProfile};
use std::collections::BTreeMap;

/// Compute the aggregate report for a ledger snapshot
///
/// - `totals` is the component-wise sum of every item profile (exactly zero
///   on an empty snapshot)
/// - `category_breakdown` only carries categories actually present; no
///   zero-valued entries
/// - `item_count` equals the snapshot length, which equals the sum of the
///   breakdown values
#[must_use]
pub fn compute(items: &[LoggedItem]) -> AggregateReport {
    let mut totals = NutrientProfile::ZERO;
    let mut category_breakdown = BTreeMap::new();

    for item in items {
        totals = totals.add(&item.profile);
        *category_breakdown.entry(item.category).or_insert(0) += 1;
    }

    AggregateReport {
        totals,
        category_breakdown,
        item_count: items.len(),
    }
}
