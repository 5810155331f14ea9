// ABOUTME: Shared server state container for dependency injection
// ABOUTME: Holds the session ledger, nutrition catalog, and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! Shared server resources.
//!
//! One `Arc<ServerResources>` is created at startup and handed to every
//! protocol handler and route, replacing process-global state. The session
//! uses interior locking, so all resource methods take `&self`.

use crate::catalog::NutritionCatalog;
use crate::config::environment::ServerConfig;
use crate::session::Session;

/// Container for all shared server state
#[derive(Debug)]
pub struct ServerResources {
    /// Server configuration loaded at startup
    pub config: ServerConfig,
    /// Static nutrition catalog
    pub catalog: NutritionCatalog,
    /// The process's session ledger
    pub session: Session,
}

impl ServerResources {
    /// Create resources with the built-in catalog and a fresh session
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            catalog: NutritionCatalog::builtin(),
            session: Session::new(),
        }
    }
}
