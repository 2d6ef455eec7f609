// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-process completion barrier.
//!
//! Workers coordinate only through the filesystem: when a worker's
//! slice of the suite completes it drops a marker file into the
//! barrier directory, and the leader (worker 1) polls until every
//! marker exists before merging the log. There is deliberately no
//! timeout: merging without a missing worker's records would quietly
//! skew every future run's schedule, so a hung peer hangs the leader.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Default poll interval while the leader waits on peers.
pub const DEFAULT_POLL: Duration = Duration::from_millis(50);

/// Filesystem barrier over a known number of worker processes.
///
/// Worker indexes are 1-based; worker 1 is the leader.
#[derive(Debug, Clone)]
pub struct Coordinator {
    worker: usize,
    workers: usize,
    barrier_dir: PathBuf,
    poll: Duration,
}

impl Coordinator {
    pub fn new(worker: usize, workers: usize, barrier_dir: impl Into<PathBuf>) -> Self {
        Self {
            worker,
            workers,
            barrier_dir: barrier_dir.into(),
            poll: DEFAULT_POLL,
        }
    }

    /// Override the poll interval (tests use a short one).
    pub fn with_poll_interval(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    /// True for exactly one worker per run.
    pub fn is_leader(&self) -> bool {
        self.worker == 1
    }

    fn marker(&self, worker: usize) -> PathBuf {
        self.barrier_dir.join(format!("worker-{worker}.done"))
    }

    /// Signal that this worker's run is complete.
    ///
    /// Every worker calls this, leader included, before any waiting.
    pub fn mark_finished(&self) -> io::Result<()> {
        fs::create_dir_all(&self.barrier_dir)?;
        fs::write(self.marker(self.worker), b"")
    }

    /// Block until every worker has signaled completion.
    ///
    /// Polls the barrier directory; never times out. A peer that
    /// crashed without signaling hangs the caller forever, which is
    /// preferred over merging a partial log.
    pub fn await_peers(&self) -> io::Result<()> {
        loop {
            let missing = (1..=self.workers)
                .filter(|w| !self.marker(*w).exists())
                .count();
            if missing == 0 {
                return Ok(());
            }
            tracing::debug!("waiting for {} of {} workers to finish", missing, self.workers);
            thread::sleep(self.poll);
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
