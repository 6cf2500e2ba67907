//! # VetChat Responder
//!
//! File: cli/src/responder/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The rule-based chatbot at the heart of VetChat. Given free text, it looks
//! for known trigger phrases and answers with a canned reply.
//!
//! ## Architecture
//!
//! - `defaults`: The built-in phrase table and fallback wording
//! - `phrase_table`: `PhraseTable`, the ordered, validated phrase list
//! - `intent`: `Responder`, first-match-wins lookup over a phrase table
//! - `conversation`: `ConversationStore`, the append-only session history
//!
//! The responder is pure and stateless. Front-ends (`commands::ask`,
//! `commands::chat`, `commands::srv`) own any conversation history and record
//! each exchange themselves.
//!
//! ## Usage
//!
//! ```rust
//! use crate::responder::{ConversationStore, Responder};
//!
//! let responder = Responder::builtin();
//! let (history, reply) = ConversationStore::new().exchange(&responder, "hello");
//! assert_eq!(history.len(), 2);
//! println!("{}", reply);
//! ```
//!
pub mod conversation;
pub mod defaults;
pub mod intent;
pub mod phrase_table;

pub use conversation::{ConversationEntry, ConversationStore, Speaker};
pub use intent::Responder;
pub use phrase_table::{PhraseEntry, PhraseTable, Shadowed};
