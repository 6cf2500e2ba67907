//! # VetChat Conversation Store
//!
//! File: cli/src/responder/conversation.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! An ordered, append-only record of the messages exchanged in one session.
//! The store is owned by whichever front-end runs the session (the `chat`
//! command loop, or the HTTP client that sends it to `srv` and gets it back).
//! There is no process-wide history.
//!
//! Entries can be appended but never edited or removed.
//!
use super::intent::Responder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who said a message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Bot => write!(f, "bot"),
        }
    }
}

/// One message in the conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Append-only message log for a single session.
///
/// Serializes as a plain JSON array of entries.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConversationStore {
    entries: Vec<ConversationEntry>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(ConversationEntry {
            speaker,
            text: text.into(),
        });
    }

    /// # Run One Exchange (`exchange`)
    ///
    /// Takes the store, asks `responder` for a reply to `input`, appends
    /// `(User, input)` then `(Bot, reply)` and hands the store back together
    /// with the reply.
    pub fn exchange(mut self, responder: &Responder, input: &str) -> (Self, String) {
        let reply = responder.respond(input).to_string();
        self.append(Speaker::User, input);
        self.append(Speaker::Bot, reply.clone());
        (self, reply)
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the history as `"<label>: <text>"` lines, oldest first.
    pub fn render(&self, user_label: &str, bot_label: &str) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                let label = match entry.speaker {
                    Speaker::User => user_label,
                    Speaker::Bot => bot_label,
                };
                format!("{}: {}", label, entry.text)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ConversationStore {
    type Item = &'a ConversationEntry;
    type IntoIter = std::slice::Iter<'a, ConversationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
