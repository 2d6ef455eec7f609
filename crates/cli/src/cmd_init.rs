// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use anyhow::Context;

use pacer::cli::{Cli, InitArgs};

/// Starter pacer.toml written by `pacer init`.
const STARTER_CONFIG: &str = r#"version = 1

# Total parallel worker processes for this project.
workers = 1

[log]
# Shared runtime log, relative to the project root.
path = ".pacer/runtime_log"

[barrier]
# Completion markers live here, one per worker.
dir = ".pacer/barrier"
# Leader poll interval while waiting on peers, in milliseconds.
poll_ms = 50
"#;

/// Run the init command: write a starter pacer.toml.
pub fn run(_cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let path = std::env::current_dir()?.join("pacer.toml");

    if path.exists() && !args.force {
        anyhow::bail!("pacer.toml already exists (use --force to overwrite)");
    }

    std::fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());

    Ok(())
}
