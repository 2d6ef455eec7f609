// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use anyhow::Context;

use pacer::cli::{Cli, OutputFormat, ReportArgs};
use pacer::config;
use pacer::order;
use pacer::report;
use pacer::store::LogStore;

/// Run the report command: show ordered timing data, leaving the log
/// untouched.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, root) = config::discover(cli.config.as_deref(), &cwd)?;

    let log_path = args.log.clone().unwrap_or_else(|| root.join(&config.log.path));
    let store = LogStore::new(log_path);
    let text = store
        .read_all()
        .with_context(|| format!("failed to read {}", store.path().display()))?;

    let records = order::collect(&text);
    let entries = report::entries(&records, args.limit);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => report::write_text(&mut handle, &entries, records.len())?,
        OutputFormat::Json => {
            report::write_json(&mut handle, &entries)?;
            // Trailing newline for terminal output
            writeln!(handle)?;
        }
    }

    Ok(())
}
