//! # VetChat CLI Srv Integration Tests
//!
//! File: cli/tests/srv.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `vetchat srv` argument handling. The endpoints
//! themselves are tested in-process in `server_logic.rs`, since a running
//! server blocks until it is signalled.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_srv_help() {
    vetchat_cmd()
        .args(["srv", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--no-cors"));
}

#[test]
fn test_srv_rejects_invalid_host() {
    let (_dir, path) = default_config();
    vetchat_cmd()
        .arg("--config")
        .arg(&path)
        .args(["srv", "--host", "not-an-ip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_srv_rejects_out_of_range_port() {
    vetchat_cmd()
        .args(["srv", "--port", "70000"])
        .assert()
        .failure();
}
