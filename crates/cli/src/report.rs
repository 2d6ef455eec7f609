// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report formatting for ordered timing data.
//!
//! Renders the log's contents slowest-first without touching the file,
//! in text or JSON form.

use std::io::{self, Write};

use serde::Serialize;

use crate::record::TimingRecord;

/// One row of a report: a test path with its bucketed time.
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub path: String,
    pub time: f64,
}

/// Build report rows from ordered records, capped at `limit` (0 = all).
pub fn entries(records: &[TimingRecord], limit: usize) -> Vec<ReportEntry> {
    let cap = if limit == 0 { records.len() } else { limit };
    records
        .iter()
        .take(cap)
        .map(|r| ReportEntry {
            path: r.path.clone(),
            time: r.bucket(),
        })
        .collect()
}

/// Write the text report: one right-aligned bucket per row, then a
/// summary line.
pub fn write_text<W: Write>(w: &mut W, entries: &[ReportEntry], total: usize) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(w, "no timing data recorded")?;
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|e| e.time.to_string().len())
        .max()
        .unwrap_or(0);

    for entry in entries {
        writeln!(w, "{:>width$}  {}", entry.time, entry.path)?;
    }

    writeln!(w)?;
    if entries.len() < total {
        writeln!(w, "{} of {} tests, slowest bucket {}", entries.len(), total, entries[0].time)?;
    } else {
        writeln!(w, "{} tests, slowest bucket {}", total, entries[0].time)?;
    }
    Ok(())
}

/// Write the JSON report (no trailing newline; the caller adds one for
/// terminal output).
pub fn write_json<W: Write>(w: &mut W, entries: &[ReportEntry]) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Report<'a> {
        count: usize,
        tests: &'a [ReportEntry],
    }

    serde_json::to_writer_pretty(w, &Report { count: entries.len(), tests: entries })?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
