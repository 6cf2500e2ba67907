//! # VetChat Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the VetChat CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once for the selected command
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`ask`, `chat`, etc.) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! vetchat --help
//!
//! # Ask a single question
//! vetchat ask "How often should I deworm?"
//!
//! # Chat with a custom phrase table and more logging
//! vetchat -vv --config ./farm.toml chat
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (explicit file, or user + project files)
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command front-ends (ask, chat, phrases, srv)
mod core; // Core infrastructure (errors, config)
mod responder; // Phrase table, intent matching, conversation store

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "vetchat",
    about = "🐄 VetChat 💬: Rule-based livestock care chatbot",
    long_about = "Answer livestock care questions from a fixed phrase table.\n\
                  Ask once, chat interactively, inspect the table, or serve it over HTTP.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration only from this TOML file.
    #[arg(long, global = true, env = "VETCHAT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Answer a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the phrase table or check it for unreachable phrases.
    #[command(alias = "p")]
    Phrases(commands::phrases::PhrasesArgs),
    /// Serve the chatbot as a JSON HTTP endpoint.
    Srv(commands::srv::SrvArgs),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = core::config::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, &config).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
        Commands::Phrases(args) => commands::phrases::handle_phrases(args, &config).await,
        Commands::Srv(args) => commands::srv::handle_srv(args, &config).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_global_config_after_subcommand() {
        let cli = Cli::parse_from(["vetchat", "ask", "hello", "--config", "/tmp/x.toml", "-vv"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Ask(_)));
    }
}
