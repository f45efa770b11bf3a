// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `kube::runtime::Controller` wiring for `QiskitJob`. Bridges the
//! watch/reconcile loop to `quantum_engine::phase::reconcile` and
//! `quantum_engine::finalizer::teardown` — this is the only place in the
//! workspace that knows about `kube::runtime`.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::api::{Patch, PatchParams};
use kube::runtime::controller::Action;
use kube::runtime::finalizer::{finalizer, Event as FinalizerEvent};
use kube::runtime::{watcher, Controller};
use kube::{Api, Client, Resource, ResourceExt};
use quantum_core::{JobRef, Phase};
use quantum_engine::{EngineContext, ReconcileError};
use quantum_schema::{QiskitJob, QiskitJobStatus};
use thiserror::Error;
use tracing::{error, info, warn};

/// Context handed to every reconcile/error_policy invocation by
/// `kube::runtime::Controller` (cloned per call, hence `Arc` throughout).
pub struct Context {
    pub client: Client,
    pub engine: EngineContext,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Kube(#[from] kube::Error),
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
    #[error("QiskitJob missing namespace")]
    NoNamespace,
    #[error("finalizer bookkeeping failed: {0}")]
    Finalizer(String),
}

/// Run the watch/reconcile loop until the process is told to stop. Returns
/// once the underlying stream ends (on a fatal client error) — the caller
/// decides whether that is a reason to exit or restart.
pub async fn run(client: Client, ctx: Arc<Context>, namespace: Option<&str>) {
    let jobs: Api<QiskitJob> = match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    };

    info!("starting QiskitJob controller");
    Controller::new(jobs, watcher::Config::default())
        .shutdown_on_signal()
        .concurrency(crate::config::worker_count())
        .run(reconcile, error_policy, ctx)
        .for_each(|result| async move {
            match result {
                Ok((obj_ref, _action)) => {
                    tracing::debug!(job = %obj_ref.name, "reconciled");
                }
                Err(e) => warn!(error = %e, "reconcile failed"),
            }
        })
        .await;
    info!("controller stream ended");
}

#[tracing::instrument(skip_all, fields(job = %job.name_any(), namespace = job.namespace().unwrap_or_default()))]
async fn reconcile(job: Arc<QiskitJob>, ctx: Arc<Context>) -> Result<Action, Error> {
    let namespace = job.namespace().ok_or(Error::NoNamespace)?;
    let api: Api<QiskitJob> = Api::namespaced(ctx.client.clone(), &namespace);

    finalizer(&api, quantum_engine::finalizer::GUARD, job, |event| async {
        match event {
            FinalizerEvent::Apply(job) => apply(job, &ctx).await,
            FinalizerEvent::Cleanup(job) => cleanup(job, &ctx).await,
        }
    })
    .await
    .map_err(|e| match e {
        kube::runtime::finalizer::Error::ApplyFailed(e)
        | kube::runtime::finalizer::Error::CleanupFailed(e) => e,
        other => Error::Finalizer(other.to_string()),
    })
}

async fn apply(job: Arc<QiskitJob>, ctx: &Context) -> Result<Action, Error> {
    let namespace = job.namespace().ok_or(Error::NoNamespace)?;
    let name = job.name_any();
    let job_ref = JobRef::new(namespace.clone(), name.clone());
    let owner = owner_reference(&job);
    let status = job.status.clone().unwrap_or_default();

    let outcome = match quantum_engine::reconcile(&job_ref, &owner, &job.spec, &status, &ctx.engine).await {
        Ok(outcome) => outcome,
        Err(e) if !e.is_transient() => {
            error!(error = %e, job = %name, "non-transient reconcile error; failing job");
            let now = ctx.engine.clock.now();
            let failed = quantum_engine::transition(&status, Phase::Failed, Some(e.to_string()), now);
            patch_status(&ctx.client, &namespace, &name, &failed).await?;
            return Ok(Action::await_change());
        }
        Err(e) => return Err(Error::from(e)),
    };

    let requeue = outcome.requeue_after;
    patch_status(&ctx.client, &namespace, &name, &outcome.status).await?;

    Ok(match requeue {
        Some(after) if after.is_zero() => Action::requeue(Duration::from_millis(250)),
        Some(after) => Action::requeue(after),
        None => Action::await_change(),
    })
}

async fn cleanup(job: Arc<QiskitJob>, ctx: &Context) -> Result<Action, Error> {
    let namespace = job.namespace().ok_or(Error::NoNamespace)?;
    let job_ref = JobRef::new(namespace, job.name_any());
    quantum_engine::finalizer::teardown(&job_ref, &ctx.engine).await?;
    Ok(Action::await_change())
}

async fn patch_status(
    client: &Client,
    namespace: &str,
    name: &str,
    status: &QiskitJobStatus,
) -> Result<(), kube::Error> {
    let api: Api<QiskitJob> = Api::namespaced(client.clone(), namespace);
    let patch = serde_json::json!({ "status": status });
    let params = PatchParams::default();
    // Retry once on a write conflict (concurrent status writer, e.g. a
    // second replica briefly overlapping during a leadership handoff).
    match api.patch_status(name, &params, &Patch::Merge(&patch)).await {
        Ok(_) => Ok(()),
        Err(kube::Error::Api(e)) if e.code == 409 => {
            api.patch_status(name, &params, &Patch::Merge(&patch)).await.map(|_| ())
        }
        Err(e) => Err(e),
    }
}

fn owner_reference(job: &QiskitJob) -> OwnerReference {
    job.controller_owner_ref(&()).unwrap_or_else(|| OwnerReference {
        api_version: <QiskitJob as Resource>::api_version(&()).to_string(),
        kind: <QiskitJob as Resource>::kind(&()).to_string(),
        name: job.name_any(),
        uid: job.uid().unwrap_or_default(),
        controller: Some(true),
        block_owner_deletion: Some(true),
    })
}

/// `ReconcileError`s that are not transient are already turned into a
/// `Failed` status patch inside `apply` and never reach here. What does
/// reach here (plain `kube::Error`, missing-namespace, finalizer
/// bookkeeping failures) is operator-level trouble, not a job-level
/// verdict, so it only ever earns a requeue — just a longer one when the
/// underlying cause looks unlikely to clear on the next tick.
fn error_policy(_job: Arc<QiskitJob>, err: &Error, _ctx: Arc<Context>) -> Action {
    let transient = matches!(err, Error::Reconcile(e) if e.is_transient()) || matches!(err, Error::Kube(_));
    if transient {
        warn!(error = %err, "transient reconcile error");
        Action::requeue(Duration::from_secs(10))
    } else {
        error!(error = %err, "non-transient operator error");
        Action::requeue(Duration::from_secs(60))
    }
}
