// ABOUTME: Smart-watch vitals models for the mock wearable data feed
// ABOUTME: WatchVitals sample and StressLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

use serde::{Deserialize, Serialize};

/// Subjective stress bucket reported by the mock wearable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    Moderate,
    /// High stress
    High,
}

/// One mock smart-watch health sample
///
/// Field names and ranges follow the wearable feed consumed by the dashboard;
/// values are generated fresh per request, there is no history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchVitals {
    /// Heart rate in beats per minute
    pub heart_rate_bpm: u32,
    /// Blood oxygen saturation percentage
    pub blood_oxygen_spo2: f64,
    /// Sleep quality score (0-100)
    pub sleep_score: u32,
    /// Step count for the current day
    pub steps_today: u32,
    /// Calories burned today (watch-side estimate, not a ledger aggregate)
    pub calories_burned: u32,
    /// Stress bucket
    pub stress_level: StressLevel,
    /// Body temperature in Fahrenheit
    pub body_temperature_f: f64,
    /// Breaths per minute
    pub respiratory_rate: u32,
    /// Heart rate variability in milliseconds
    pub hrv_ms: u32,
    /// Active minutes today
    pub active_minutes: u32,
}
