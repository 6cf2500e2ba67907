//! # VetChat Phrases Command
//!
//! File: cli/src/commands/phrases.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `vetchat phrases` prints the active phrase table in match order, followed
//! by the fallback reply. With `--check` it instead reports phrases that can
//! never be returned because an earlier phrase is contained in them, and
//! exits with an error if any exist. This is meant for people editing
//! `[[phrases]]` in a config file.
//!
//! ## Examples
//!
//! ```bash
//! vetchat phrases
//! vetchat --config ./farm.toml phrases --check
//! ```
//!
use crate::core::config::Config;
use crate::core::error::{Result, VetchatError};
use crate::responder::{Responder, Shadowed};
use anyhow::anyhow;
use clap::Parser;
use tracing::info;

/// # Phrases Command Arguments (`PhrasesArgs`)
#[derive(Parser, Debug)]
pub struct PhrasesArgs {
    /// Report unreachable (shadowed) phrases instead of listing the table.
    /// Fails if any are found.
    #[arg(long)]
    pub check: bool,
}

/// # Handle Phrases Command (`handle_phrases`)
pub async fn handle_phrases(args: PhrasesArgs, config: &Config) -> Result<()> {
    info!("Handling phrases command with args: {:?}", args);
    let responder = config.build_responder()?;

    if !args.check {
        for line in render_table(&responder) {
            println!("{}", line);
        }
        return Ok(());
    }

    let shadowed = responder.table().shadowed();
    for line in render_shadow_report(&shadowed) {
        println!("{}", line);
    }
    if shadowed.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(VetchatError::Config(format!(
            "{} phrase(s) can never match; reorder or remove them.",
            shadowed.len()
        ))))
    }
}

fn render_table(responder: &Responder) -> Vec<String> {
    let table = responder.table();
    let mut lines = Vec::with_capacity(table.len() + 2);
    lines.push(format!(
        "Phrase table ({} entries, first match wins):",
        table.len()
    ));
    for (index, entry) in table.iter().enumerate() {
        lines.push(format!(
            "{:>4}. \"{}\" -> {}",
            index + 1,
            entry.phrase,
            entry.response
        ));
    }
    lines.push(format!("Fallback: {}", responder.fallback()));
    lines
}

fn render_shadow_report(shadowed: &[Shadowed]) -> Vec<String> {
    if shadowed.is_empty() {
        return vec!["No shadowed phrases.".to_string()];
    }
    let mut lines = vec!["Shadowed phrases (never matched):".to_string()];
    lines.extend(shadowed.iter().map(|s| {
        format!(
            "  #{} \"{}\" is shadowed by #{} \"{}\"",
            s.position, s.phrase, s.shadowed_by_position, s.shadowed_by
        )
    }));
    lines
}
