// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn round_trips_through_display_and_from_str() {
    for phase in [
        Phase::Pending,
        Phase::Validating,
        Phase::Scheduling,
        Phase::Running,
        Phase::Completed,
        Phase::Failed,
        Phase::Cancelled,
        Phase::Retrying,
    ] {
        assert_eq!(Phase::from_str(&phase.to_string()).unwrap(), phase);
    }
}

#[test]
fn unseen_status_is_pending() {
    assert_eq!(Phase::parse_or_self_heal(None), Phase::Pending);
}

#[test]
fn unknown_phase_self_heals_to_pending() {
    assert_eq!(Phase::parse_or_self_heal(Some("Bogus")), Phase::Pending);
}

#[test]
fn terminal_phases() {
    assert!(Phase::Completed.is_terminal());
    assert!(Phase::Failed.is_terminal());
    assert!(Phase::Cancelled.is_terminal());
    assert!(!Phase::Retrying.is_terminal());
    assert!(!Phase::Running.is_terminal());
}
