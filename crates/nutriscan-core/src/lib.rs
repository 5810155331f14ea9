// ABOUTME: Core types for the NutriScan demo MCP App platform
// ABOUTME: Foundation crate with data models and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

#![deny(unsafe_code)]

//! # NutriScan Core
//!
//! Foundation crate providing shared types for the NutriScan demo MCP App
//! server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **models**: Core data models (`NutrientProfile`, `LoggedItem`, `AggregateReport`, vitals)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (nutrient profiles, logged items, aggregate reports, vitals)
pub mod models;
