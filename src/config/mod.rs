// ABOUTME: Configuration management modules
// ABOUTME: Environment-only server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Configuration management. Environment-only: there are no config files.

/// Environment-based server configuration
pub mod environment;
