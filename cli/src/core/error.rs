//! # VetChat Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the VetChat application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `VetchatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors (unreadable or invalid config files)
//! - Phrase table construction errors (blank phrases, empty responses)
//! - Responder construction errors (empty fallback)
//! - Transcript export errors
//!
//! Note that answering a message is never an error. Once a `Responder` exists,
//! every input produces a reply; the variants below only surface while the
//! responder and its surroundings are being set up.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if fallback.is_empty() {
//!     return Err(VetchatError::EmptyFallback);
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the VetChat application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VetchatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// Positions are 1-based, matching the order entries appear in the config file.
    #[error("Phrase #{position} is empty or whitespace-only.")]
    EmptyPhrase { position: usize },

    #[error("Phrase '{phrase}' has an empty response.")]
    EmptyResponse { phrase: String },

    #[error("The fallback reply must not be empty.")]
    EmptyFallback,

    #[error("Transcript error: {0}")]
    Transcript(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
