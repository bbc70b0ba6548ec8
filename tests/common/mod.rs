#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a node attributes document into a fresh temp directory
pub fn setup_attributes_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("attributes.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// The `ark` binary with an isolated, empty config directory
pub fn ark_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ark").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Common assertion helper for error messages
pub fn assert_error_contains(error_string: &str, expected_messages: &[&str]) {
    for msg in expected_messages {
        assert!(
            error_string.contains(msg),
            "Expected error to contain '{msg}', but got: {error_string}"
        );
    }
}
