// ABOUTME: Core data models for the NutriScan demo MCP App platform
// ABOUTME: Re-exports nutrition and vitals model definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Core data models shared by the server, protocol layer, and tests.

/// Nutrition tracking models (profiles, categories, logged items, reports)
pub mod nutrition;

/// Smart-watch vitals models (mock wearable samples)
pub mod vitals;

pub use nutrition::{AggregateReport, FoodCategory, LoggedItem, NutrientProfile};
pub use vitals::{StressLevel, WatchVitals};
