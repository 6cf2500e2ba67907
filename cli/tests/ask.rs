//! # VetChat CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `vetchat ask`.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_builtin_match_is_case_insensitive() {
    let (_dir, path) = default_config();
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .args(["ask", "HELLO", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi there!"));
}

#[test]
fn test_ask_falls_back_when_nothing_matches() {
    let (_dir, path) = default_config();
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .args(["ask", "quantum", "mechanics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm not sure how to help with that."));
}

#[test]
fn test_ask_explain_names_matched_phrase() {
    let (_dir, path) = write_config(FARM_CONFIG);
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .args(["ask", "--explain", "My cow's HOOF is cracked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trim hooves every 6 to 8 weeks."))
        .stdout(predicate::str::contains("(matched phrase: \"hoof\")"));
}

#[test]
fn test_ask_explain_reports_fallback() {
    let (_dir, path) = write_config(FARM_CONFIG);
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .args(["a", "--explain", "milk yield"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ask me about hooves or hay."))
        .stdout(predicate::str::contains("no phrase matched"));
}

#[test]
fn test_ask_first_phrase_wins() {
    let (_dir, path) = write_config(FARM_CONFIG);
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .args(["ask", "hay for a sore hoof"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trim hooves"))
        .stdout(predicate::str::contains("Offer good quality hay").not());
}

#[test]
fn test_ask_requires_a_message() {
    let (_dir, path) = default_config();
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .arg("ask")
        .assert()
        .failure();
}
