// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn cond(status: ConditionStatus, at: DateTime<Utc>) -> Condition {
    Condition::new("Validated", status, "reason", "message", at)
}

#[test]
fn upsert_inserts_new_type() {
    let mut conditions = Vec::new();
    upsert(&mut conditions, cond(ConditionStatus::True, DateTime::UNIX_EPOCH));
    assert_eq!(conditions.len(), 1);
}

#[test]
fn upsert_replaces_transition_time_only_on_status_change() {
    let mut conditions = Vec::new();
    let t0 = DateTime::UNIX_EPOCH;
    let t1 = t0 + chrono::Duration::seconds(5);
    upsert(&mut conditions, cond(ConditionStatus::False, t0));
    upsert(&mut conditions, cond(ConditionStatus::False, t1));
    assert_eq!(conditions[0].last_transition_time, t0, "same status keeps old transition time");

    upsert(&mut conditions, cond(ConditionStatus::True, t1));
    assert_eq!(conditions[0].last_transition_time, t1, "status change bumps transition time");
    assert_eq!(conditions.len(), 1);
}
