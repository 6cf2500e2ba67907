//! # VetChat HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module resolves the effective settings for `vetchat srv`. Each value
//! comes from:
//! 1. Command-line arguments (highest priority)
//! 2. The `[server]` section of the loaded VetChat config
//! 3. Default values (lowest priority)
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! enable_cors = false
//! ```
//!
//! ```rust
//! let server_config = ServerConfig::resolve(&args, &cfg.server);
//! println!("Listening on: {}:{}", server_config.host, server_config.port);
//! ```
//!
use crate::core::config::ServerDefaults;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 8000;

/// # Server Command Arguments (`SrvArgs`)
///
/// Defines the command-line arguments accepted by the `vetchat srv` command.
/// Unset options fall back to the `[server]` config section, then to defaults.
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Network port to listen on. Defaults to `8000`. If the port is busy, the
    /// next free port is used.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// IP address to bind. `0.0.0.0` binds all interfaces; the default
    /// `127.0.0.1` only accepts local connections.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    /// By default, permissive CORS headers are sent.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// # Resolve Configuration (`resolve`)
    ///
    /// Merges `args` over `file` over the defaults. `--no-cors` always wins;
    /// without it, `enable_cors` from the config file applies.
    pub fn resolve(args: &SrvArgs, file: &ServerDefaults) -> Self {
        let defaults = Self::default();
        Self {
            host: args.host.or(file.host).unwrap_or(defaults.host),
            port: args.port.or(file.port).unwrap_or(defaults.port),
            enable_cors: if args.no_cors {
                false
            } else {
                file.enable_cors.unwrap_or(defaults.enable_cors)
            },
        }
    }
}
