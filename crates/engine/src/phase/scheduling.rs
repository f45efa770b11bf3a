// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use quantum_adapters::AdapterError;
use quantum_core::{JobRef, Phase};
use quantum_schema::{QiskitJobSpec, QiskitJobStatus};

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;
use crate::status_ext::transition;

/// `estimatedCost = "$0.00"` for `local_simulator` (§4.1 tie-break); no
/// other backend can be priced without a live remote adapter, which is out
/// of scope.
fn estimated_cost(simulator: bool) -> String {
    if simulator {
        "$0.00".to_string()
    } else {
        "unknown".to_string()
    }
}

pub fn handle(
    _job: &JobRef,
    spec: &QiskitJobSpec,
    status: &QiskitJobStatus,
    ctx: &EngineContext,
) -> Result<Outcome, ReconcileError> {
    let now = ctx.clock.now();

    let selected = match ctx.backend_selector.select(&spec.backend, spec.backend_selection.as_ref()) {
        Ok(selected) => selected,
        Err(AdapterError::NoBackendAvailable) => {
            let message = format!(
                "backend {} is not supported; only local_simulator is available",
                spec.backend.type_
            );
            let failed = transition(status, Phase::Failed, Some(message), now);
            return Ok(Outcome::requeue_now(failed));
        }
        Err(e) => return Err(e.into()),
    };

    let mut next = transition(status, Phase::Running, Some("execution workload pending".to_string()), now);
    next.selected_backend = Some(selected.name.clone());
    next.estimated_cost = Some(estimated_cost(selected.simulator));
    next.fallback_used = selected.fallback_used;
    if selected.fallback_used {
        next.original_backend = Some(spec.backend.type_.to_string());
    }
    Ok(Outcome::requeue_now(next))
}
