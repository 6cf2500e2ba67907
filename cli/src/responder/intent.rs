//! # VetChat Intent Responder
//!
//! File: cli/src/responder/intent.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps free-text input to a canned reply:
//! 1. Lower-case the whole input (no trimming, tokenizing or stemming).
//! 2. Walk the phrase table in order.
//! 3. Return the response of the first phrase that occurs anywhere in the
//!    lower-cased input, or the fallback when none does.
//!
//! `respond` is total: it never fails and never returns an empty string,
//! because both table responses and the fallback are checked to be non-empty
//! when the `Responder` is built. It also has no side effects; recording the
//! exchange is the caller's job (see `ConversationStore::exchange`).
//!
//! ## Examples
//!
//! ```rust
//! let responder = Responder::builtin();
//! assert_eq!(
//!     responder.respond("HELLO there"),
//!     "Hi there! How can I assist you with your livestock today?"
//! );
//! ```
//!
use super::defaults::DEFAULT_FALLBACK;
use super::phrase_table::{PhraseEntry, PhraseTable};
use crate::core::error::VetchatError;
use tracing::trace;

/// The rule-based responder: a phrase table plus a fallback reply.
#[derive(Debug, Clone)]
pub struct Responder {
    table: PhraseTable,
    fallback: String,
}

impl Responder {
    /// # Create Responder (`new`)
    ///
    /// ## Errors
    ///
    /// Returns `VetchatError::EmptyFallback` if `fallback` is empty.
    pub fn new(table: PhraseTable, fallback: impl Into<String>) -> Result<Self, VetchatError> {
        let fallback = fallback.into();
        if fallback.is_empty() {
            return Err(VetchatError::EmptyFallback);
        }
        Ok(Self { table, fallback })
    }

    /// Built-in phrase table with the default fallback.
    pub fn builtin() -> Self {
        Self {
            table: PhraseTable::builtin(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    pub fn table(&self) -> &PhraseTable {
        &self.table
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// # Find Matching Entry (`find_match`)
    ///
    /// Returns the first table entry whose phrase is a substring of the
    /// lower-cased `input`, or `None` when nothing matches.
    pub fn find_match(&self, input: &str) -> Option<&PhraseEntry> {
        let lowered = input.to_lowercase();
        let hit = self
            .table
            .iter()
            .find(|entry| lowered.contains(entry.phrase.as_str()));
        trace!(
            "Input {:?} matched {:?}",
            input,
            hit.map(|entry| entry.phrase.as_str())
        );
        hit
    }

    /// # Respond to Input (`respond`)
    ///
    /// The reply for `input`: the first matching entry's response, otherwise
    /// the fallback.
    pub fn respond(&self, input: &str) -> &str {
        self.find_match(input)
            .map(|entry| entry.response.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}
