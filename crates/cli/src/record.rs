// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One observed test runtime.
//!
//! Workers write observations to the shared log as `path:time` lines,
//! e.g. `spec/foo/bar_spec:0.12345`. The path is matched greedily and
//! may itself contain colons; the time is the trailing float token.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::bucket::bucket;

/// Regex pattern string for one log line: greedy path, trailing time.
const LINE_PATTERN: &str = r"^(.+):([0-9.]+)$";

/// Pre-compiled regex for log line parsing.
#[allow(clippy::expect_used)]
static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("valid regex pattern"));

/// One `(path, time)` observation from the runtime log.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    /// Test identifier, opaque to pacer. Round-trips byte-for-byte.
    pub path: String,
    /// Observed duration in seconds.
    pub time: f64,
}

impl TimingRecord {
    pub fn new(path: impl Into<String>, time: f64) -> Self {
        Self { path: path.into(), time }
    }

    /// Parse one log line.
    ///
    /// Returns `None` when the line has no `path:time` shape at all.
    /// A line that matches but whose time is not a valid float (for
    /// example `foo:1.2.3`) is kept with a zero duration, which lands
    /// in the floor bucket downstream.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = LINE_REGEX.captures(line.trim_end_matches(['\r', '\n']))?;
        let path = caps[1].to_string();
        let time = caps[2].parse().unwrap_or(0.0);
        Some(Self { path, time })
    }

    /// The canonical bucket for this record's time.
    pub fn bucket(&self) -> f64 {
        bucket(self.time)
    }
}

/// Serializes as a log line with the *bucketed* time, e.g.
/// `spec/foo/bar_spec:0.1`. Raw precision is dropped by design.
impl fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.bucket())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
