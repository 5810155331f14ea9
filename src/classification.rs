// ABOUTME: Classification of manual entries and raw recognizer output into loggable pairs
// ABOUTME: Validation for manual input, greedy JSON extraction with explicit fallback for recognizer text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Classification Adapter
//!
//! Turns either a manually entered `(name, category)` pair or an external
//! recognizer's raw text into a [`Classification`] suitable for logging.
//!
//! Manual entry is validated strictly: an empty name or a category outside
//! the fixed enumeration is an error surfaced to the caller.
//!
//! Recognizer text is handled forgivingly: the recognizer is prompted to emit
//! only JSON but may wrap it in prose, so extraction takes the greedy
//! `{...}` span (first `{` to last `}`) and parses that. Any failure yields
//! [`RecognizerOutcome::Fallback`] resolving to the generic
//! `unknown food`/`meal` pair — never an error. The fallback is an explicit
//! variant carrying its reason so the degrade-gracefully path is visible in
//! the type and easy to test.
//!
//! This module never calls a vision model; the recognizer is an external
//! collaborator.

use crate::errors::{AppError, AppResult};
use crate::models::FoodCategory;
use serde_json::Value;
use tracing::debug;

/// Item name used when recognizer output cannot be parsed
pub const FALLBACK_NAME: &str = "unknown food";

/// Category used when recognizer output cannot be parsed
pub const FALLBACK_CATEGORY: FoodCategory = FoodCategory::Meal;

/// A validated `(name, category)` pair ready for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Item name as supplied (trimmed)
    pub name: String,
    /// Category from the fixed enumeration
    pub category: FoodCategory,
}

/// Why recognizer text fell back to the generic pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFallback {
    /// No `{...}` span found in the text
    NoJsonObject,
    /// The extracted span is not valid JSON
    InvalidJson,
    /// The JSON object has no usable `name` field
    MissingName,
    /// The JSON object has no usable `category` field
    MissingCategory,
    /// The `category` field is outside the fixed enumeration
    UnknownCategory,
}

impl ParseFallback {
    /// Short machine-readable reason string for logs and payloads
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::NoJsonObject => "no_json_object",
            Self::InvalidJson => "invalid_json",
            Self::MissingName => "missing_name",
            Self::MissingCategory => "missing_category",
            Self::UnknownCategory => "unknown_category",
        }
    }
}

/// Outcome of classifying recognizer text
///
/// Both variants resolve to a usable [`Classification`]; the operation is
/// infallible for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerOutcome {
    /// The text contained a well-formed `{name, category}` object
    Parsed(Classification),
    /// Extraction failed; callers get the generic pair
    Fallback(ParseFallback),
}

impl RecognizerOutcome {
    /// Whether this outcome is the fallback path
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// The fallback reason, if any
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<ParseFallback> {
        match self {
            Self::Parsed(_) => None,
            Self::Fallback(reason) => Some(*reason),
        }
    }

    /// Resolve to the classification to log
    #[must_use]
    pub fn into_classification(self) -> Classification {
        match self {
            Self::Parsed(classification) => classification,
            Self::Fallback(_) => Classification {
                name: FALLBACK_NAME.to_owned(),
                category: FALLBACK_CATEGORY,
            },
        }
    }
}

/// Validate a manual entry
///
/// The name must be non-empty after trimming and the category string must be
/// a member of the fixed enumeration. No semantic validation is performed:
/// `("Apple", beverage)` passes.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty/whitespace-only name and
/// `UnknownCategory` for a category outside the enumeration.
pub fn classify_manual(name: &str, category: &str) -> AppResult<Classification> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(
            "Item name must not be empty or whitespace-only",
        ));
    }

    let category = FoodCategory::parse(category).ok_or_else(|| AppError::unknown_category(category))?;

    Ok(Classification {
        name: trimmed.to_owned(),
        category,
    })
}

/// Classify raw recognizer output text
///
/// Extracts the greedy `{...}` span, parses it as JSON, and reads the `name`
/// and `category` fields. Every failure mode degrades to
/// [`RecognizerOutcome::Fallback`]; this function never errors.
#[must_use]
pub fn classify_recognizer_text(raw_text: &str) -> RecognizerOutcome {
    let Some(span) = extract_json_span(raw_text) else {
        debug!("recognizer text contains no JSON object span");
        return RecognizerOutcome::Fallback(ParseFallback::NoJsonObject);
    };

    let Ok(value) = serde_json::from_str::<Value>(span) else {
        debug!("recognizer JSON span failed to parse");
        return RecognizerOutcome::Fallback(ParseFallback::InvalidJson);
    };

    let name = match value.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ => return RecognizerOutcome::Fallback(ParseFallback::MissingName),
    };

    let Some(category_str) = value.get("category").and_then(Value::as_str) else {
        return RecognizerOutcome::Fallback(ParseFallback::MissingCategory);
    };

    let Some(category) = FoodCategory::parse(category_str) else {
        debug!("recognizer category '{category_str}' is outside the enumeration");
        return RecognizerOutcome::Fallback(ParseFallback::UnknownCategory);
    };

    RecognizerOutcome::Parsed(Classification { name, category })
}

/// The greedy `{...}` span: first `{` to last `}` in the text
fn extract_json_span(raw_text: &str) -> Option<&str> {
    let start = raw_text.find('{')?;
    let end = raw_text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw_text[start..=end])
}
