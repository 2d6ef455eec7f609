//! Test helpers for behavioral specifications.
//!
//! Provides a thin DSL for driving the pacer binary against a
//! temporary project directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::process::Command;

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use tempfile::TempDir;

/// Returns a Command configured to run the pacer binary.
///
/// Host PACER_* variables are stripped so specs only see what they
/// set themselves.
pub fn pacer_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pacer"));
    cmd.env_remove("PACER_CONFIG")
        .env_remove("PACER_WORKER")
        .env_remove("PACER_WORKERS")
        .env_remove("PACER_LOG");
    cmd
}

/// Creates a temp project with a pacer.toml for `workers` processes.
///
/// The `.git` marker keeps config discovery from escaping the temp
/// directory.
pub fn temp_project(workers: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".git")).unwrap();
    std::fs::write(
        dir.path().join("pacer.toml"),
        format!("version = 1\nworkers = {workers}\n\n[barrier]\npoll_ms = 5\n"),
    )
    .unwrap();
    dir
}

/// Reads the project's runtime log, or empty if it was never written.
pub fn read_log(root: &Path) -> String {
    std::fs::read_to_string(root.join(".pacer/runtime_log")).unwrap_or_default()
}
