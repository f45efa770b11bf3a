// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fixed_backoff_is_constant() {
    let b = FixedBackoff::default();
    assert_eq!(b.delay_for(1), Duration::from_secs(10));
    assert_eq!(b.delay_for(3), Duration::from_secs(10));
}

#[test]
fn exponential_backoff_doubles_and_caps() {
    let b = ExponentialBackoff::default();
    assert_eq!(b.delay_for(1), Duration::from_secs(10));
    assert_eq!(b.delay_for(2), Duration::from_secs(20));
    assert_eq!(b.delay_for(3), Duration::from_secs(40));
    // 10 * 2^10 would blow past the 10 minute cap.
    assert_eq!(b.delay_for(11), Duration::from_secs(600));
}

#[test]
fn retry_bound_matches_max_retries_table() {
    assert!(!retries_exhausted(0, 3));
    assert!(!retries_exhausted(1, 3));
    assert!(!retries_exhausted(2, 3));
    assert!(retries_exhausted(3, 3));
}
