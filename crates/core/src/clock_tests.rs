// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_clock_advances() {
    let clock = FakeClock::new();
    let t0 = clock.now();
    clock.advance(chrono::Duration::seconds(10));
    assert_eq!(clock.now(), t0 + chrono::Duration::seconds(10));
}

#[test]
fn system_clock_moves_forward() {
    let clock = SystemClock;
    let t0 = clock.now();
    let t1 = clock.now();
    assert!(t1 >= t0);
}
