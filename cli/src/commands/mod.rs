//! # VetChat Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the VetChat CLI. Each
//! command is a front-end over the same responder; none of them keeps state
//! beyond its own run.
//!
//! ## Commands
//!
//! - `ask`: Answer one question and exit
//! - `chat`: Interactive session with history and transcript export
//! - `phrases`: List or check the active phrase table
//! - `srv`: JSON HTTP endpoint
//!
//! Each command defines its own arguments structure and an async handler
//! taking those arguments plus the loaded `Config`.
//!

/// One-shot question. Prints the reply (and optionally the matched phrase).
pub mod ask;
/// Interactive line-based chat session.
pub mod chat;
/// Phrase table listing and shadowed-phrase check.
pub mod phrases;
/// HTTP endpoint (`/respond`, `/chat`, `/phrases`, `/health`).
pub mod srv;
