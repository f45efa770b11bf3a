// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use quantum_core::{Backoff, Phase};
use quantum_schema::QiskitJobStatus;

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;
use crate::status_ext::transition;

/// (I4) `retryCount < maxRetries` → bump the count, schedule
/// `nextRetryAt`, move to Retrying. Otherwise Failed is terminal.
pub fn handle(status: &QiskitJobStatus, ctx: &EngineContext) -> Result<Outcome, ReconcileError> {
    let now = ctx.clock.now();

    if quantum_core::retries_exhausted(status.retry_count, ctx.config.max_retries) {
        return Ok(Outcome::new(status.clone()));
    }

    let retry_count = status.retry_count + 1;
    let delay = ctx.config.backoff.delay_for(retry_count);
    let next_retry_at = now + chrono::Duration::from_std(delay).unwrap_or_default();

    let mut next = transition(
        status,
        Phase::Retrying,
        Some(format!("retry {retry_count}/{} scheduled", ctx.config.max_retries)),
        now,
    );
    next.retry_count = retry_count;
    next.next_retry_at = Some(next_retry_at);
    Ok(Outcome::requeue_after(next, delay))
}
