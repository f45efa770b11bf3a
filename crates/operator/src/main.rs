// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qjobd`: the QiskitJob operator binary. Wires real adapters into
//! `quantum_engine::EngineContext` and runs the `kube::runtime::Controller`
//! loop, optionally gated behind leader election for multi-replica
//! deployments (§9 "single active reconciler").

use std::sync::Arc;
use std::time::Duration;

use kube::Client;
use kube_leader_election::{LeaseLock, LeaseLockParams, LeaseLockResult};
use quantum_adapters::{ConfigMapResultSink, KubeWorkloadManager, LocalSimulatorOnly, ReqwestValidationClient};
use quantum_core::SystemClock;
use quantum_engine::EngineConfig;
use quantum_operator::config;
use quantum_operator::controller::{self, Context};
use quantum_operator::error::OperatorError;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), OperatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = Client::try_default().await.map_err(OperatorError::ClientSetup)?;
    let ctx = Arc::new(build_context(client.clone()));
    let namespace = config::watch_namespace();

    let shutdown = CancellationToken::new();
    let shutdown_signal = shutdown.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        shutdown_signal.cancel();
    });

    match config::lease_name() {
        None => {
            info!("QJOB_LEASE_NAME unset; running without leader election");
            controller::run(client, ctx, namespace.as_deref()).await;
        }
        Some(lease_name) => run_with_leader_election(client, ctx, namespace, lease_name, shutdown).await?,
    }

    Ok(())
}

fn build_context(client: Client) -> Context {
    let http = reqwest::Client::builder()
        .timeout(config::rpc_timeout())
        .build()
        .unwrap_or_default();

    let circuit_configmaps = kube::Api::all(client.clone());
    let engine_config = EngineConfig {
        executor_image: config::executor_image(),
        max_retries: config::max_retries(),
        running_poll_interval: config::running_poll_interval(),
        backoff: config::backoff(),
    };

    let engine = quantum_engine::EngineContext {
        validation: Arc::new(ReqwestValidationClient::new(config::validation_url(), config::rpc_timeout())),
        backend_selector: Arc::new(LocalSimulatorOnly),
        workload: Arc::new(KubeWorkloadManager::new(client.clone())),
        result_sink: Arc::new(ConfigMapResultSink::new(client.clone())),
        clock: Arc::new(SystemClock),
        circuit_configmaps,
        http,
        config: Arc::new(engine_config),
    };

    Context { client, engine }
}

/// Standby-until-leader loop, grounded on the pack's Lease-based HA
/// pattern: renew on a short tick, run the controller as a background
/// task only while holding the lease, abort it immediately on loss.
async fn run_with_leader_election(
    client: Client,
    ctx: Arc<Context>,
    namespace: Option<String>,
    lease_name: String,
    shutdown: CancellationToken,
) -> Result<(), OperatorError> {
    let lease_namespace = namespace.clone().unwrap_or_else(|| "default".to_string());
    let holder_id = config::pod_name()?;
    let leadership = LeaseLock::new(
        client.clone(),
        &lease_namespace,
        LeaseLockParams { holder_id, lease_name, lease_ttl: Duration::from_secs(15) },
    );

    let mut controller_task: Option<tokio::task::JoinHandle<()>> = None;
    let mut tick = tokio::time::interval(Duration::from_secs(5));

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                if let Some(task) = controller_task.take() {
                    task.abort();
                    let _ = task.await;
                }
                return Ok(());
            }
            _ = tick.tick() => {}
        }

        let lease = match leadership.try_acquire_or_renew().await {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "leader election renew/acquire failed");
                if let Some(task) = controller_task.take() {
                    task.abort();
                }
                continue;
            }
        };

        if matches!(lease, LeaseLockResult::Acquired(_)) {
            if controller_task.is_none() {
                info!("acquired leadership; starting controller");
                let client = client.clone();
                let ctx = ctx.clone();
                let ns = namespace.clone();
                controller_task = Some(tokio::spawn(async move {
                    controller::run(client, ctx, ns.as_deref()).await;
                }));
            }
        } else if let Some(task) = controller_task.take() {
            error!("lost leadership; stopping controller");
            task.abort();
        }
    }
}
