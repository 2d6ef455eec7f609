// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finish command implementation.
//!
//! Every worker marks itself done; the leader then waits for the rest
//! and performs the merge-and-rewrite.

use std::time::Duration;

use anyhow::Context;

use pacer::cli::{Cli, FinishArgs};
use pacer::config;
use pacer::coordinator::Coordinator;
use pacer::order;
use pacer::store::LogStore;

/// Run the finish command.
pub fn run(cli: &Cli, args: &FinishArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, root) = config::discover(cli.config.as_deref(), &cwd)?;

    // An unset index means the only (or first) process: the leader.
    let worker = args.worker.unwrap_or(1);
    let workers = args.workers.unwrap_or(config.workers);
    if worker == 0 {
        anyhow::bail!("worker indexes are 1-based, got 0");
    }
    if worker > workers {
        anyhow::bail!("worker index {worker} exceeds worker count {workers}");
    }

    let barrier_dir = args.barrier.clone().unwrap_or_else(|| root.join(&config.barrier.dir));
    let coordinator = Coordinator::new(worker, workers, barrier_dir)
        .with_poll_interval(Duration::from_millis(config.barrier.poll_ms));

    coordinator
        .mark_finished()
        .context("failed to write completion marker")?;

    if !coordinator.is_leader() {
        return Ok(());
    }

    tracing::debug!("worker {} is the leader, waiting for {} workers", worker, workers);
    coordinator
        .await_peers()
        .context("failed while waiting for peers")?;

    let log_path = args.log.clone().unwrap_or_else(|| root.join(&config.log.path));
    let store = LogStore::new(log_path);
    let text = store
        .read_all()
        .with_context(|| format!("failed to read {}", store.path().display()))?;
    let merged = order::merge(&text);
    store
        .write_all(&merged)
        .with_context(|| format!("failed to rewrite {}", store.path().display()))?;

    Ok(())
}
