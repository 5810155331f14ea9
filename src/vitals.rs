// ABOUTME: Mock smart-watch vitals generator with JSON override merge
// ABOUTME: Produces realistic random samples for animating the dashboard charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Smart-Watch Vitals
//!
//! Generates a realistic fake wearable sample per request. Callers may pass
//! an `override_data` JSON string whose top-level fields shallow-merge over
//! the generated sample (e.g. `{"heart_rate_bpm": 72}`); an unparseable
//! override is silently ignored rather than failing the request.

use crate::models::{StressLevel, WatchVitals};
use rand::Rng;
use serde_json::{json, Map, Value};
use tracing::debug;

/// Round to one decimal place (wire precision of the wearable feed)
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generate one fresh vitals sample
#[must_use]
pub fn generate() -> WatchVitals {
    let mut rng = rand::thread_rng();

    let stress_level = match rng.gen_range(0..3) {
        0 => StressLevel::Low,
        1 => StressLevel::Moderate,
        _ => StressLevel::High,
    };

    WatchVitals {
        heart_rate_bpm: rng.gen_range(58..=102),
        blood_oxygen_spo2: round1(rng.gen_range(95.0..=100.0)),
        sleep_score: rng.gen_range(55..=98),
        steps_today: rng.gen_range(800..=14_000),
        calories_burned: rng.gen_range(120..=2_800),
        stress_level,
        body_temperature_f: round1(rng.gen_range(97.0..=99.2)),
        respiratory_rate: rng.gen_range(12..=20),
        hrv_ms: rng.gen_range(20..=80),
        active_minutes: rng.gen_range(0..=180),
    }
}

/// Generate a sample and shallow-merge an optional JSON override
///
/// Only a top-level JSON object is merged; anything else (invalid JSON, a
/// non-object value) leaves the generated sample untouched.
#[must_use]
pub fn generate_with_override(override_data: Option<&str>) -> Value {
    let vitals = generate();
    let mut value = serde_json::to_value(&vitals).unwrap_or_else(|_| json!({}));

    if let Some(raw) = override_data {
        match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(overrides) => {
                if let Value::Object(fields) = &mut value {
                    for (key, override_value) in overrides {
                        fields.insert(key, override_value);
                    }
                }
            }
            Err(_) => {
                debug!("ignoring unparseable vitals override");
            }
        }
    }

    value
}
