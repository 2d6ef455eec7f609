// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for duration bucketing.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use yare::parameterized;

use super::*;

#[parameterized(
    twentieth = { 0.05, 0.1 },
    eighth_of_a_second = { 0.12, 1.0 },
    just_under_one = { 0.9, 1.0 },
    one_exactly = { 1.0, 1.0 },
    just_over_one = { 1.1, 10.0 },
    five = { 5.0, 10.0 },
    twelve = { 12.0, 100.0 },
    ninety = { 90.0, 100.0 },
    hundred_exactly = { 100.0, 100.0 },
    two_millis = { 0.002, 0.01 },
    tenth_exactly = { 0.1, 0.1 },
)]
fn bucket_rounds_up_to_power_of_ten(time: f64, expected: f64) {
    assert_eq!(bucket(time), expected);
}

#[parameterized(
    zero = { 0.0 },
    negative = { -1.0 },
    one_nanosecond = { 1e-9 },
    floor_exactly = { 1e-3 },
)]
fn degenerate_times_land_in_floor_bucket(time: f64) {
    assert_eq!(bucket(time), MIN_BUCKET);
}

#[test]
fn nan_lands_in_floor_bucket() {
    assert_eq!(bucket(f64::NAN), MIN_BUCKET);
}

#[test]
fn infinity_lands_in_floor_bucket() {
    assert_eq!(bucket(f64::INFINITY), MIN_BUCKET);
}

#[test]
fn floor_bucket_is_its_own_bucket() {
    assert_eq!(bucket(MIN_BUCKET), MIN_BUCKET);
}

proptest! {
    #[test]
    fn bucket_is_idempotent(t in 1e-6f64..1e6) {
        let b = bucket(t);
        prop_assert_eq!(bucket(b), b);
    }

    #[test]
    fn bucket_is_monotonic(a in 1e-6f64..1e6, b in 1e-6f64..1e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bucket(lo) <= bucket(hi));
    }

    #[test]
    fn bucket_covers_its_input(t in 1e-6f64..1e6) {
        prop_assert!(bucket(t) >= t);
    }
}
