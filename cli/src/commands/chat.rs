//! # VetChat Interactive Chat Session
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `vetchat chat` runs a line-based conversation with the responder on the
//! terminal. The session owns its `ConversationStore`; every submitted line
//! and its reply are appended to it, and the store can be exported as a JSON
//! transcript when the session ends.
//!
//! ## Session Rules
//!
//! - Each input line is one submission. Only the line terminator is removed;
//!   the rest is passed to the responder untouched.
//! - Blank lines are ignored and not recorded.
//! - A line that is not valid UTF-8 is skipped with a notice. A read error
//!   ends the session like end-of-input, so the history so far is kept.
//! - `/history` prints the conversation so far.
//! - `/quit`, `/exit` or end-of-input end the session.
//! - With a typing delay configured, a `"<bot>: typing..."` line is shown and
//!   the reply is held back for that long.
//!
//! ## Examples
//!
//! ```bash
//! vetchat chat
//! vetchat chat --typing-delay-ms 1500 --save ~/vetchat-session.json
//! ```
//!
use crate::core::config::{self, Config};
use crate::core::error::{Result, VetchatError};
use crate::responder::{ConversationStore, Responder};
use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Pause before each reply, in milliseconds. Overrides `[bot] typing_delay_ms`.
    #[arg(long)]
    pub typing_delay_ms: Option<u64>,

    /// Write the conversation as a JSON transcript to this path when the session ends.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

/// Presentation settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub user_label: String,
    pub bot_label: String,
    pub typing_delay: Duration,
}

impl SessionSettings {
    fn from_config(config: &Config, typing_delay_override: Option<u64>) -> Self {
        Self {
            user_label: config.bot.user_label.clone(),
            bot_label: config.bot.name.clone(),
            typing_delay: Duration::from_millis(
                typing_delay_override.unwrap_or(config.bot.typing_delay_ms),
            ),
        }
    }
}

/// JSON export of a finished session.
#[derive(Serialize, Debug)]
pub struct Transcript<'a> {
    pub bot_name: &'a str,
    pub saved_at: DateTime<Utc>,
    pub entries: &'a ConversationStore,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the interactive session on stdin/stdout. The blocking read loop is
/// moved onto tokio's blocking pool.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let responder = config.build_responder()?;
    let settings = SessionSettings::from_config(config, args.typing_delay_ms);
    let bot_name = settings.bot_label.clone();

    let conversation = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(&responder, &settings, stdin.lock(), &mut stdout)
    })
    .await
    .context("Chat session task failed")??;

    info!(
        "Chat session ended with {} message(s).",
        conversation.len()
    );

    if let Some(path) = args.save {
        let path = config::expand_path(&path);
        save_transcript(&path, &bot_name, &conversation)?;
        println!("Transcript saved to {}", path.display());
    }
    Ok(())
}

/// # Run Chat Session (`run_session`)
///
/// Reads submissions from `input` until `/quit`, `/exit`, end-of-input or a
/// read error, writing prompts and replies to `output`. Returns the session's
/// history. Only failures to write `output` are returned as errors.
pub fn run_session<R: BufRead, W: Write>(
    responder: &Responder,
    settings: &SessionSettings,
    mut input: R,
    output: &mut W,
) -> Result<ConversationStore> {
    let mut conversation = ConversationStore::new();
    writeln!(
        output,
        "Chat with {}! Type /history to review the conversation, /quit to leave.",
        settings.bot_label
    )?;

    loop {
        write!(output, "{}: ", settings.user_label)?;
        output.flush().context("Failed to flush output")?;

        let mut raw = Vec::new();
        let read = match input.read_until(b'\n', &mut raw) {
            Ok(read) => read,
            Err(e) => {
                warn!("Failed to read chat input, closing chat session: {}", e);
                writeln!(output)?;
                break;
            }
        };
        if read == 0 {
            writeln!(output)?;
            debug!("End of input, closing chat session.");
            break;
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(_) => {
                warn!("Skipping chat input line that is not valid UTF-8.");
                writeln!(output, "(skipped a line that is not valid UTF-8 text)")?;
                continue;
            }
        };
        let submission = line
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(line.as_str());

        match submission.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/history" => {
                if conversation.is_empty() {
                    writeln!(output, "(no messages yet)")?;
                }
                for rendered in conversation.render(&settings.user_label, &settings.bot_label) {
                    writeln!(output, "{}", rendered)?;
                }
                continue;
            }
            _ => {}
        }

        if !settings.typing_delay.is_zero() {
            writeln!(output, "{}: typing...", settings.bot_label)?;
            output.flush().context("Failed to flush output")?;
            std::thread::sleep(settings.typing_delay);
        }

        let (updated, reply) = conversation.exchange(responder, submission);
        conversation = updated;
        writeln!(output, "{}: {}", settings.bot_label, reply)?;
    }

    Ok(conversation)
}

/// # Save Transcript (`save_transcript`)
///
/// Writes the conversation as pretty-printed JSON.
///
/// ## Errors
///
/// Fails if `path` is a directory or the file cannot be written.
pub fn save_transcript(path: &Path, bot_name: &str, conversation: &ConversationStore) -> Result<()> {
    if path.is_dir() {
        return Err(anyhow!(VetchatError::Transcript(format!(
            "'{}' is a directory.",
            path.display()
        ))));
    }
    let transcript = Transcript {
        bot_name,
        saved_at: Utc::now(),
        entries: conversation,
    };
    let json = serde_json::to_string_pretty(&transcript).context("Failed to encode transcript")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
    info!("Transcript written to {}", path.display());
    Ok(())
}
