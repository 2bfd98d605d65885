//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the hueforge binary
pub fn hueforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_hueforge")
}

/// Creates an empty config directory so tests never read the user's config.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(hueforge_bin());
    cmd.env("HUEFORGE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `hueforge` with `args` against a fresh config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = temp_config_dir();
    run_in(args, config_dir.path())
}

/// Runs `hueforge` with `args` against `config_dir`.
pub fn run_in(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, panicking with stderr on failure.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Collects a JSON array of strings.
pub fn string_array(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("Expected JSON array")
        .iter()
        .map(|v| v.as_str().expect("Expected string").to_string())
        .collect()
}

/// Whether `s` is a lowercase `#rrggbb` string.
pub fn is_canonical_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
