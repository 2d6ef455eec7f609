// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared runtime log file.
//!
//! Every worker appends observation lines to one file; after the
//! barrier, the leader reads it whole and rewrites it in canonical
//! order. Appends rely on the platform's append-mode atomicity for a
//! single small write, so concurrent appenders never need a lock. The
//! rewrite only happens once all workers have signaled completion, so
//! it never races an append.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Append-then-overwrite text file shared by all workers.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file (and its parent directory)
    /// on first use. The trailing newline is added here; `line` should
    /// not carry one.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        // One write call per line keeps the append atomic.
        file.write_all(format!("{line}\n").as_bytes())
    }

    /// Read the full accumulated contents.
    ///
    /// A missing file reads as empty: a run that observed nothing
    /// still finishes cleanly.
    pub fn read_all(&self) -> io::Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    /// Replace the entire contents. Leader-only, after the barrier.
    pub fn write_all(&self, text: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
