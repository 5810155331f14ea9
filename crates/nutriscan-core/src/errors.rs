// ABOUTME: Unified error handling for the NutriScan server
// ABOUTME: Defines ErrorCode taxonomy, AppError, and HTTP response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Unified Error Handling System
//!
//! Centralized error handling for the NutriScan MCP server. Defines the
//! standard error codes, the `AppError` type carried through all fallible
//! operations, and the JSON response shape surfaced over HTTP.
//!
//! The taxonomy is deliberately small: manual-entry validation failures and
//! unknown categories surface to callers; everything else in the logging core
//! is a total function and cannot fail. Recognizer-text parse failures are
//! **not** errors (see the classification module in the server crate).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The provided input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is missing from the request
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// The supplied category is not in the fixed enumeration
    #[serde(rename = "UNKNOWN_CATEGORY")]
    UnknownCategory = 3002,

    // Resource Management (4000-4999)
    /// The requested resource was not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Server configuration is invalid or missing
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Payload could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput | Self::MissingRequiredField | Self::UnknownCategory => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 500 Internal Server Error
            Self::ConfigError | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::UnknownCategory => "The category is not one of the supported food categories",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigError => "Server configuration error",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Failed to serialize the response payload",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "INVALID_INPUT"),
            Self::MissingRequiredField => write!(f, "MISSING_REQUIRED_FIELD"),
            Self::UnknownCategory => write!(f, "UNKNOWN_CATEGORY"),
            Self::ResourceNotFound => write!(f, "RESOURCE_NOT_FOUND"),
            Self::ConfigError => write!(f, "CONFIG_ERROR"),
            Self::InternalError => write!(f, "INTERNAL_ERROR"),
            Self::SerializationError => write!(f, "SERIALIZATION_ERROR"),
        }
    }
}

/// Application error carrying a standard code and a human-readable message
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Convenience result alias for fallible application operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an "invalid input" validation error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a "missing required field" error for the named field
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing or invalid required parameter: {field}"),
        )
    }

    /// Create an "unknown category" error for the supplied category string
    #[must_use]
    pub fn unknown_category(category: &str) -> Self {
        Self::new(
            ErrorCode::UnknownCategory,
            format!("Unknown food category: '{category}'"),
        )
    }

    /// Create a "resource not found" error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string())
    }
}

/// JSON body returned to HTTP callers for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code string
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// HTTP status the error maps to
    pub http_status: u16,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self {
            http_status: err.http_status(),
            code: err.code,
            message: err.message,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::UnknownCategory.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_error_response_serialization() {
        let err = AppError::unknown_category("plasma");
        let response = ErrorResponse::from(err);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNKNOWN_CATEGORY"));
        assert!(json.contains("plasma"));
    }

    #[test]
    fn test_missing_field_message() {
        let err = AppError::missing_field("raw_text");
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert!(err.message.contains("raw_text"));
    }
}
