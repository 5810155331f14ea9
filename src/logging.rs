// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels, formatters, and the global tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Production-ready logging configuration with structured output.

use crate::constants::protocol::{SERVER_NAME, SERVER_VERSION};
use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: SERVER_NAME.into(),
            service_version: SERVER_VERSION.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `RUST_LOG` sets the filter directive; `LOG_FORMAT` picks json,
    /// compact, or pretty (default).
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            ..Self::default()
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// Noise-reduction directives for the HTTP stack are applied on top of
    /// whatever `RUST_LOG` requests.
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::new(&self.level)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "tower_http=info"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true);

        match self.format {
            LogFormat::Json => builder
                .json()
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to init json logging: {e}"))?,
            LogFormat::Compact => builder
                .compact()
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to init compact logging: {e}"))?,
            LogFormat::Pretty => builder
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to init pretty logging: {e}"))?,
        }

        info!(
            service = %self.service_name,
            version = %self.service_version,
            "logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging straight from the environment
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
