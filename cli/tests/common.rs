//! # assetpack Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `assetpack` binary inside its own temporary directory, with
//! the user config directory pointed into that directory so no real user or
//! project configuration leaks into the run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// # Get assetpack Command (`assetpack_cmd`)
///
/// Builds a command for the `assetpack` binary that runs in `workdir` with an
/// isolated config environment.
///
/// ## Panics
/// Panics if the `assetpack` binary cannot be found via `Command::cargo_bin`.
pub fn assetpack_cmd(workdir: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("assetpack").expect("Failed to find assetpack binary for testing");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("ASSETPACK_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a workspace with `.git` (stopping config discovery) and an
/// `assets/` tree: `a.png` (3 bytes), `b.txt` (5 bytes), `sub/c.jpg` (2 bytes).
pub fn example_workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path();
    fs::create_dir(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("assets/sub")).unwrap();
    fs::write(root.join("assets/a.png"), [1u8, 2, 3]).unwrap();
    fs::write(root.join("assets/b.txt"), b"hello").unwrap();
    fs::write(root.join("assets/sub/c.jpg"), [9u8, 9]).unwrap();
    dir
}

/// Expected archive bytes for a list of `(key, value)` pairs already in key order.
pub fn expected_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut bytes = b"APAK".to_vec();
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    for (key, value) in entries {
        bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
        bytes.extend_from_slice(key.as_bytes());
        bytes.extend_from_slice(&(value.len() as u64).to_le_bytes());
        bytes.extend_from_slice(value);
    }
    bytes
}
