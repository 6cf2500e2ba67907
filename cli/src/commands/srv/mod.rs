//! # VetChat HTTP Endpoint
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module exposes the responder over HTTP so that a web front-end (or
//! any other client) can chat with VetChat. It provides:
//! - A one-shot `/respond` endpoint
//! - A `/chat` endpoint that extends a client-held conversation
//! - Port binding with automatic fallback if the port is in use
//! - Optional permissive CORS
//!
//! ## Architecture
//!
//! - `config.rs`: Argument parsing and merging with the `[server]` config section
//! - `handlers.rs`: Request and response types plus the endpoint handlers
//! - `server_logic.rs`: Router construction and the server loop
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default 127.0.0.1:8000
//! vetchat srv
//!
//! # Bind all interfaces on port 9000 without CORS headers
//! vetchat srv --host 0.0.0.0 --port 9000 --no-cors
//!
//! # Ask a question
//! curl -s localhost:8000/respond -H 'content-type: application/json' \
//!      -d '{"message": "how often should I deworm?"}'
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use std::sync::Arc;
use tracing::info;

pub use config::SrvArgs;

/// Argument parsing and effective server settings.
pub mod config;

/// Endpoint handlers and their JSON bodies.
pub mod handlers;

/// Router construction and the Axum server loop.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// The entry point for `vetchat srv`:
/// 1. Resolves host, port and CORS from `args` and the `[server]` config section.
/// 2. Builds the responder once; all requests share it read-only.
/// 3. Runs the server until shutdown.
pub async fn handle_srv(args: SrvArgs, cfg: &Config) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let server_config = config::ServerConfig::resolve(&args, &cfg.server);
    info!("Effective server config: {:?}", server_config);

    let responder = Arc::new(cfg.build_responder()?);
    server_logic::run_server(server_config, responder).await?;

    Ok(())
}
