//! # VetChat Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `vetchat ask` answers a single question and exits. It is the smallest
//! front-end over the responder: no conversation history is kept.
//!
//! ## Examples
//!
//! ```bash
//! # Words are joined with single spaces
//! vetchat ask how often should I deworm my cattle
//!
//! # Show which phrase produced the reply
//! vetchat ask --explain "Is my goat coughing?"
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::responder::Responder;
use clap::Parser;
use tracing::{debug, info};

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Multiple words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Also print which trigger phrase produced the reply.
    #[arg(long)]
    pub explain: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Builds the responder from `config`, answers the joined message and prints
/// the reply on stdout.
pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let responder = config.build_responder()?;
    let message = args.message.join(" ");
    debug!("Joined message: {:?}", message);

    for line in answer_lines(&responder, &message, args.explain) {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed for one question: the reply, plus an explanation line when requested.
fn answer_lines(responder: &Responder, message: &str, explain: bool) -> Vec<String> {
    let mut lines = vec![responder.respond(message).to_string()];
    if explain {
        lines.push(match responder.find_match(message) {
            Some(entry) => format!("(matched phrase: \"{}\")", entry.phrase),
            None => "(no phrase matched; fallback reply)".to_string(),
        });
    }
    lines
}
