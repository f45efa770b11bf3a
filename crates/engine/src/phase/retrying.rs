// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use quantum_core::Phase;
use quantum_schema::QiskitJobStatus;

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;
use crate::status_ext::transition;

/// Wait until `nextRetryAt`, then move back to Pending (§4.1 Retrying row).
pub fn handle(status: &QiskitJobStatus, ctx: &EngineContext) -> Result<Outcome, ReconcileError> {
    let now = ctx.clock.now();

    let Some(next_retry_at) = status.next_retry_at else {
        // Shouldn't happen — Failed always sets it — but self-heal rather
        // than wedge the job.
        let next = transition(status, Phase::Pending, Some("retrying".to_string()), now);
        return Ok(Outcome::requeue_now(next));
    };

    if now < next_retry_at {
        let remaining = (next_retry_at - now).to_std().unwrap_or_default();
        return Ok(Outcome::requeue_after(status.clone(), remaining));
    }

    let next = transition(status, Phase::Pending, Some("retrying".to_string()), now);
    Ok(Outcome::requeue_now(next))
}
