// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Finalizer Coordinator (§4.7): tears down the child workload before the
//! delete guard is released. Kept separate from the phase table because it
//! runs *instead of* phase dispatch whenever a deletion timestamp is set
//! (teardown pre-empts phase logic, it is not itself a phase).

pub const GUARD: &str = "quantum.io/finalizer";

use quantum_core::JobRef;

use crate::context::EngineContext;
use crate::error::ReconcileError;

/// Delete the child pod and its circuit ConfigMap. Idempotent — deleting
/// an absent object is a no-op (§4.7 "tolerate repeated invocation").
/// `kube::runtime::finalizer::finalizer` calls this inside its
/// `Event::Cleanup` arm and only removes the guard once it returns `Ok`.
pub async fn teardown(job: &JobRef, ctx: &EngineContext) -> Result<(), ReconcileError> {
    ctx.workload.teardown(job).await?;
    Ok(())
}
