// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use quantum_adapters::{PodObservedPhase, WorkloadRequest};
use quantum_core::{JobRef, Phase};
use quantum_schema::{JobResults, QiskitJobSpec, QiskitJobStatus, SinkKind};

use crate::context::EngineContext;
use crate::error::ReconcileError;
use crate::outcome::Outcome;
use crate::status_ext::transition;

/// Ensure the child workload exists, then map its observed phase onto the
/// Job's phase (§4.2 "Pod-status → Job-phase mapping").
pub async fn handle(
    job: &JobRef,
    owner: &OwnerReference,
    spec: &QiskitJobSpec,
    status: &QiskitJobStatus,
    ctx: &EngineContext,
) -> Result<Outcome, ReconcileError> {
    let now = ctx.clock.now();
    let resolved = quantum_circuit::resolve(&spec.circuit, &ctx.circuit_configmaps, &ctx.http).await?;

    let env = vec![
        ("SHOTS".to_string(), spec.execution.effective_shots().to_string()),
        ("OPTIMIZATION_LEVEL".to_string(), spec.execution.optimization_level.to_string()),
    ];

    ctx.workload
        .ensure_workload(WorkloadRequest {
            job,
            owner: owner.clone(),
            executor_image: &ctx.config.executor_image,
            backend_type: &spec.backend.type_.to_string(),
            circuit: &resolved.resolved,
            env,
        })
        .await?;

    match ctx.workload.observe(job).await? {
        None | Some(PodObservedPhase::Pending) => Ok(Outcome::requeue_after(
            transition(status, Phase::Running, Some("execution workload pending".to_string()), now),
            ctx.config.running_poll_interval,
        )),
        Some(PodObservedPhase::Running) => Ok(Outcome::requeue_after(
            transition(status, Phase::Running, Some("circuit executing".to_string()), now),
            ctx.config.running_poll_interval,
        )),
        Some(PodObservedPhase::Unknown) => Ok(Outcome::requeue_after(
            transition(status, Phase::Running, Some("execution workload status unknown".to_string()), now),
            ctx.config.running_poll_interval,
        )),
        Some(PodObservedPhase::Failed) => {
            let failed = transition(status, Phase::Failed, Some("execution workload failed".to_string()), now);
            Ok(Outcome::requeue_now(failed))
        }
        Some(PodObservedPhase::Succeeded) => collect_results(job, owner, spec, status, ctx, now).await,
    }
}

async fn collect_results(
    job: &JobRef,
    owner: &OwnerReference,
    spec: &QiskitJobSpec,
    status: &QiskitJobStatus,
    ctx: &EngineContext,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<Outcome, ReconcileError> {
    let document = ctx.workload.fetch_logs(job).await?;

    let mut next = transition(status, Phase::Completed, Some("execution complete".to_string()), now);
    next.completion_time = Some(now);
    next.actual_cost = next.estimated_cost.clone();

    if let Some(output) = &spec.output {
        let location = quantum_adapters::persist_by_kind(
            output.type_,
            &*ctx.result_sink,
            job,
            owner,
            &output.location,
            &document,
        )
        .await;

        match (output.type_, location) {
            (_, Ok(location)) => {
                next.results = Some(JobResults {
                    location,
                    shots: spec.execution.effective_shots(),
                    submission_time: status.start_time,
                    completion_time: Some(now),
                    success_rate: None,
                });
            }
            (SinkKind::Configmap, Err(e)) => return Err(e.into()),
            // pvc/s3/gcs are admitted by the interface but unimplemented;
            // completing without a persisted document is acceptable per I3
            // ("or the final state is otherwise observable").
            (_, Err(_)) => {}
        }
    }

    Ok(Outcome::requeue_now(next))
}
