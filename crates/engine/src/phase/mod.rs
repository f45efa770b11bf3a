// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One handler per `Phase`, dispatched from [`reconcile`]. Each handler is
//! `async` (it calls out to the adapters in [`EngineContext`]) but takes
//! plain data in and returns plain data out — no `kube::Api<QiskitJob>` in
//! sight — so it is testable against [`quantum_adapters`]'s fakes without a
//! live cluster.

mod failed;
mod pending;
mod retrying;
mod running;
mod scheduling;
mod validating;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use quantum_core::{JobRef, Phase};
use quantum_schema::{QiskitJobSpec, QiskitJobStatus};
use std::str::FromStr;

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;

/// Converge `job`'s observed state toward the contract of its current
/// phase (§4.1). Deletion handling runs before this in the caller (the
/// Finalizer Coordinator, §4.7) — by the time `reconcile` runs, the Job is
/// known to not be in its teardown path.
pub async fn reconcile(
    job: &JobRef,
    owner: &OwnerReference,
    spec: &QiskitJobSpec,
    status: &QiskitJobStatus,
    ctx: &EngineContext,
) -> Result<Outcome, ReconcileError> {
    let raw = status.phase.as_deref();
    if matches!(raw, Some(r) if Phase::from_str(r).is_err()) {
        // Unknown phase string (written by an older engine version, most
        // likely): self-heal by resetting to Pending without running any
        // phase action this pass (§4.1 "Unknown phase policy").
        let mut healed = status.clone();
        healed.phase = Some(Phase::Pending.to_string());
        return Ok(Outcome::requeue_now(healed));
    }
    let phase = Phase::parse_or_self_heal(raw);

    match phase {
        Phase::Pending => pending::handle(job, spec, status, ctx),
        Phase::Validating => validating::handle(job, spec, status, ctx).await,
        Phase::Scheduling => scheduling::handle(job, spec, status, ctx),
        Phase::Running => running::handle(job, owner, spec, status, ctx).await,
        Phase::Completed => Ok(Outcome::new(status.clone())),
        Phase::Failed => failed::handle(status, ctx),
        Phase::Retrying => retrying::handle(status, ctx),
        Phase::Cancelled => Ok(Outcome::new(status.clone())),
    }
}
