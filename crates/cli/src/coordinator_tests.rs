// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the completion barrier.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::{Duration, Instant};

use tempfile::TempDir;

use crate::order;
use crate::store::LogStore;

use super::*;

fn fast_coordinator(worker: usize, workers: usize, dir: &TempDir) -> Coordinator {
    Coordinator::new(worker, workers, dir.path().join("barrier"))
        .with_poll_interval(Duration::from_millis(5))
}

#[test]
fn worker_one_is_the_leader() {
    let dir = TempDir::new().unwrap();
    assert!(fast_coordinator(1, 4, &dir).is_leader());
    assert!(!fast_coordinator(2, 4, &dir).is_leader());
    assert!(!fast_coordinator(4, 4, &dir).is_leader());
}

#[test]
fn mark_finished_writes_a_marker() {
    let dir = TempDir::new().unwrap();
    fast_coordinator(3, 4, &dir).mark_finished().unwrap();

    assert!(dir.path().join("barrier/worker-3.done").exists());
}

#[test]
fn marking_twice_is_harmless() {
    let dir = TempDir::new().unwrap();
    let coordinator = fast_coordinator(1, 1, &dir);
    coordinator.mark_finished().unwrap();
    coordinator.mark_finished().unwrap();

    coordinator.await_peers().unwrap();
}

#[test]
fn await_returns_once_all_markers_exist() {
    let dir = TempDir::new().unwrap();
    for worker in 1..=3 {
        fast_coordinator(worker, 3, &dir).mark_finished().unwrap();
    }

    fast_coordinator(1, 3, &dir).await_peers().unwrap();
}

#[test]
fn await_blocks_until_the_last_marker_appears() {
    let dir = TempDir::new().unwrap();
    let delay = Duration::from_millis(60);

    fast_coordinator(1, 2, &dir).mark_finished().unwrap();

    std::thread::scope(|scope| {
        let straggler = fast_coordinator(2, 2, &dir);
        scope.spawn(move || {
            std::thread::sleep(delay);
            straggler.mark_finished().unwrap();
        });

        let started = Instant::now();
        fast_coordinator(1, 2, &dir).await_peers().unwrap();
        assert!(started.elapsed() >= delay, "leader returned before the straggler signaled");
    });
}

#[test]
fn two_workers_append_then_leader_merges() {
    // The full cross-process flow, with threads standing in for
    // processes: both workers append through their own handle, signal
    // completion, the leader waits and rewrites the sorted union.
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("runtime_log");

    std::thread::scope(|scope| {
        let worker_log = LogStore::new(&log_path);
        let worker = fast_coordinator(2, 2, &dir);
        scope.spawn(move || {
            worker_log.append_line("spec/slow_spec:12").unwrap();
            worker_log.append_line("spec/fast_spec:0.05").unwrap();
            worker.mark_finished().unwrap();
        });

        let leader_log = LogStore::new(&log_path);
        let leader = fast_coordinator(1, 2, &dir);
        leader_log.append_line("spec/medium_spec:0.9").unwrap();
        leader.mark_finished().unwrap();

        assert!(leader.is_leader());
        leader.await_peers().unwrap();

        let merged = order::merge(&leader_log.read_all().unwrap());
        leader_log.write_all(&merged).unwrap();
    });

    let text = LogStore::new(&log_path).read_all().unwrap();
    assert_eq!(text, "spec/slow_spec:100\nspec/medium_spec:1\nspec/fast_spec:0.1\n");
}
