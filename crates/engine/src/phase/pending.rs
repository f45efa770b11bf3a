// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use quantum_core::{JobRef, Phase};
use quantum_schema::{CircuitSource, QiskitJobSpec, QiskitJobStatus};

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;
use crate::status_ext::transition;

/// Structural spec validation: backend.type, circuit.source,
/// inline-requires-code (§4.1 Pending row; §7 taxonomy #1).
pub fn handle(
    _job: &JobRef,
    spec: &QiskitJobSpec,
    status: &QiskitJobStatus,
    ctx: &EngineContext,
) -> Result<Outcome, ReconcileError> {
    let now = ctx.clock.now();
    if let Err(reason) = validate(spec) {
        let failed = transition(status, Phase::Failed, Some(reason), now);
        return Ok(Outcome::requeue_now(failed));
    }

    let next =
        transition(status, Phase::Validating, Some("circuit validation in progress".to_string()), now);
    Ok(Outcome::requeue_now(next))
}

fn validate(spec: &QiskitJobSpec) -> Result<(), String> {
    match spec.circuit.source {
        CircuitSource::Inline => {
            if spec.circuit.code.as_deref().map(str::trim).unwrap_or("").is_empty() {
                return Err("circuit.source=inline requires non-empty circuit.code".to_string());
            }
        }
        CircuitSource::Configmap => {
            if spec.circuit.config_map_ref.is_none() {
                return Err("circuit.source=configmap requires circuit.configMapRef".to_string());
            }
        }
        CircuitSource::Url => {
            if spec.circuit.url.is_none() {
                return Err("circuit.source=url requires circuit.url".to_string());
            }
        }
        CircuitSource::Git => {
            if spec.circuit.git_ref.is_none() {
                return Err("circuit.source=git requires circuit.gitRef".to_string());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod tests;
