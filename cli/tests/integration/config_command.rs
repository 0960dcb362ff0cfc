//! Integration tests for `lab config`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{Sandbox, stdout_json};

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    Sandbox::new()
        .lab()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    Sandbox::new()
        .lab()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mydrive/files"))
        .stdout(predicate::str::contains("crownlabs_ssh"));
}

#[test]
fn test_config_set_persists_value() {
    let sandbox = Sandbox::new();
    sandbox
        .lab()
        .args(["config", "set", "file_manager.path", "/drive/browse/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file_manager.path"));

    let output = sandbox
        .lab()
        .args(["config", "show", "--json"])
        .output()
        .expect("run lab");
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["config"]["file_manager"]["path"],
        "drive/browse"
    );
}

#[test]
fn test_config_set_unknown_key_fails() {
    Sandbox::new()
        .lab()
        .args(["config", "set", "nope.nothing", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_config_set_rejects_non_http_guide_url() {
    let sandbox = Sandbox::new();
    sandbox
        .lab()
        .args(["config", "set", "ssh.guide_url", "ftp://example.org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http"));
    assert!(!sandbox.config_path().exists());
}
