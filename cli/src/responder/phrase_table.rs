//! # VetChat Phrase Table
//!
//! File: cli/src/responder/phrase_table.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The phrase table is the ordered list of `(trigger phrase, canned response)`
//! pairs that backs the responder. It is built once at startup (from the
//! built-in defaults or from `[[phrases]]` in a config file) and never
//! changes afterwards.
//!
//! ## Invariants
//!
//! - Entries keep their insertion order. The responder scans them front to
//!   back and the first hit wins, so order *is* the tie-break rule.
//! - Every phrase is stored lower-cased and contains at least one
//!   non-whitespace character.
//! - Every response is non-empty.
//!
//! ## Shadowing
//!
//! Because matching is by substring, an entry whose phrase contains an
//! earlier phrase can never be returned: any input containing the later
//! phrase also contains the earlier one. `PhraseTable::shadowed` reports
//! these entries so a table author can reorder them. They are not errors.
//!
use super::defaults::BUILTIN_PHRASES;
use crate::core::error::VetchatError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single trigger phrase and the reply it produces.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PhraseEntry {
    /// Substring looked for in the lower-cased input.
    pub phrase: String,
    /// Reply returned when `phrase` is the first match.
    pub response: String,
}

impl PhraseEntry {
    pub fn new(phrase: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            response: response.into(),
        }
    }
}

/// An entry that can never be selected because an earlier phrase always matches first.
///
/// Positions are 1-based table positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub position: usize,
    pub phrase: String,
    pub shadowed_by_position: usize,
    pub shadowed_by: String,
}

/// Ordered, immutable phrase-to-response table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
}

impl PhraseTable {
    /// # Build a Phrase Table (`new`)
    ///
    /// Validates and normalizes `entries`, keeping their order.
    ///
    /// Phrases are lower-cased so that matching only needs to lower-case the
    /// input. Surrounding whitespace in a phrase is kept: `" hi "` and `"hi"`
    /// are different triggers.
    ///
    /// ## Errors
    ///
    /// - `VetchatError::EmptyPhrase` if a phrase is empty or whitespace-only.
    /// - `VetchatError::EmptyResponse` if a response is empty.
    pub fn new(entries: Vec<PhraseEntry>) -> Result<Self, VetchatError> {
        let mut normalized = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.phrase.trim().is_empty() {
                return Err(VetchatError::EmptyPhrase {
                    position: index + 1,
                });
            }
            if entry.response.is_empty() {
                return Err(VetchatError::EmptyResponse {
                    phrase: entry.phrase,
                });
            }
            let phrase = entry.phrase.to_lowercase();
            if phrase != entry.phrase {
                debug!("Lower-cased phrase '{}' to '{}'", entry.phrase, phrase);
            }
            normalized.push(PhraseEntry {
                phrase,
                response: entry.response,
            });
        }
        Ok(Self {
            entries: normalized,
        })
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PHRASES
                .iter()
                .map(|(phrase, response)| PhraseEntry::new(*phrase, *response))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhraseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Find Shadowed Entries (`shadowed`)
    ///
    /// Returns every entry whose phrase contains an earlier phrase, paired
    /// with the earliest such phrase. Duplicate phrases are reported too,
    /// since a phrase always contains itself.
    pub fn shadowed(&self) -> Vec<Shadowed> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                self.entries[..index]
                    .iter()
                    .position(|earlier| entry.phrase.contains(earlier.phrase.as_str()))
                    .map(|earlier_index| Shadowed {
                        position: index + 1,
                        phrase: entry.phrase.clone(),
                        shadowed_by_position: earlier_index + 1,
                        shadowed_by: self.entries[earlier_index].phrase.clone(),
                    })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a PhraseTable {
    type Item = &'a PhraseEntry;
    type IntoIter = std::slice::Iter<'a, PhraseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
