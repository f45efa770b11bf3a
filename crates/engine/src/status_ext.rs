// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Small helpers shared by every phase handler for building the next
//! `QiskitJobStatus` without repeating the same clone-and-patch dance.

use chrono::{DateTime, Utc};
use quantum_core::condition::{self, ConditionStatus};
use quantum_core::{Condition, Phase};
use quantum_schema::QiskitJobStatus;

/// Move `status` to `phase`, updating `message` and the `Progressing`
/// condition. Does not touch any of the other status fields — callers set
/// those themselves before or after calling this. `now` always comes from
/// the engine's injected [`quantum_core::Clock`], never `Utc::now()`
/// directly, so phase transitions stay deterministic under test.
pub fn transition(
    status: &QiskitJobStatus,
    phase: Phase,
    message: Option<String>,
    now: DateTime<Utc>,
) -> QiskitJobStatus {
    let mut next = status.clone();
    next.phase = Some(phase.to_string());
    next.message = message;

    let condition_status = if phase.is_terminal() && phase != Phase::Completed {
        ConditionStatus::False
    } else {
        ConditionStatus::True
    };
    condition::upsert(
        &mut next.conditions,
        Condition::new("Progressing", condition_status, phase.to_string(), next.message.clone().unwrap_or_default(), now),
    );
    next
}
