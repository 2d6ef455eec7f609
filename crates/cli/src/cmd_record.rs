// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record command implementation.

use anyhow::Context;

use pacer::cli::{Cli, RecordArgs};
use pacer::config;
use pacer::store::LogStore;

/// Run the record command: append one `path:time` observation.
pub fn run(cli: &Cli, args: &RecordArgs) -> anyhow::Result<()> {
    if args.path.is_empty() {
        anyhow::bail!("test path must not be empty");
    }
    if !args.time.is_finite() || args.time < 0.0 {
        anyhow::bail!("time must be a non-negative number of seconds, got {}", args.time);
    }

    let cwd = std::env::current_dir()?;
    let (config, root) = config::discover(cli.config.as_deref(), &cwd)?;

    let log_path = args.log.clone().unwrap_or_else(|| root.join(&config.log.path));
    let store = LogStore::new(log_path);
    store
        .append_line(&format!("{}:{}", args.path, args.time))
        .with_context(|| format!("failed to append to {}", store.path().display()))?;

    Ok(())
}
