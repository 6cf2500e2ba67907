//! # VetChat CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and is compiled as its own test crate against the
//! `vetchat` binary.
//!
//! Every command loads configuration, so tests pin it with `--config` to
//! keep the user's own `config.toml` or a stray `.vetchat.toml` out of the
//! results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// # Get VetChat Command (`vetchat_cmd`)
///
/// An `assert_cmd::Command` for the compiled `vetchat` binary, with
/// `VETCHAT_CONFIG` and `RUST_LOG` cleared from the environment.
///
/// ## Panics
/// Panics if the `vetchat` binary cannot be found via `Command::cargo_bin`.
pub fn vetchat_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vetchat").expect("Failed to find vetchat binary for testing");
    cmd.env_remove("VETCHAT_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to `vetchat.toml` inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("vetchat.toml");
    std::fs::write(&path, contents).expect("Failed to write test config");
    (dir, path)
}

/// A config with no overrides, so the built-in table and labels apply.
pub fn default_config() -> (TempDir, PathBuf) {
    write_config("")
}

/// A small table without shadowed phrases and a recognisable fallback.
pub const FARM_CONFIG: &str = r#"
[bot]
name = "Doc"
user_label = "Farmer"
fallback = "Ask me about hooves or hay."

[[phrases]]
phrase = "Hoof"
response = "Trim hooves every 6 to 8 weeks."

[[phrases]]
phrase = "hay"
response = "Offer good quality hay daily."
"#;
