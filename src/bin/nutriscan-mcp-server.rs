// ABOUTME: Server binary for the NutriScan demo MCP App
// ABOUTME: Loads env configuration, initializes logging, and serves REST + MCP over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # NutriScan MCP Server Binary
//!
//! Starts the HTTP server exposing the MCP tool endpoint (`POST /mcp`) and
//! the REST dashboard surface.

use anyhow::{Context, Result};
use clap::Parser;
use nutriscan_mcp_server::{
    config::environment::ServerConfig, logging, mcp::resources::ServerResources, routes,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutriscan-mcp-server")]
#[command(about = "NutriScan - demo MCP App server for nutrition logging dashboards")]
struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args {
                host: None,
                http_port: None,
            }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply CLI overrides
    if let Some(host) = args.host {
        config.http_host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting NutriScan MCP Server");
    info!("{}", config.summary());

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let resources = Arc::new(ServerResources::new(config));
    info!(session_id = %resources.session.id(), "session created");

    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr} (MCP endpoint: POST /mcp)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install ctrl-c handler; shutting down immediately");
    }
}
