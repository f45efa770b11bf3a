// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the operator binary.
//! Grounded on the teacher's `env` module convention: one free function per
//! setting, each documenting its own default, read once at startup and
//! handed down as plain values (§9 "avoid module-level mutable state").

use std::time::Duration;

use crate::error::OperatorError;

pub const DEFAULT_VALIDATION_URL: &str = "http://validation-service:8000";
pub const DEFAULT_EXECUTOR_IMAGE: &str = "quantum-executor:latest";

/// Circuit-validation microservice base URL.
pub fn validation_url() -> String {
    std::env::var("QJOB_VALIDATION_URL").unwrap_or_else(|_| DEFAULT_VALIDATION_URL.to_string())
}

/// Reconciler concurrency (`Controller::concurrency`).
pub fn worker_count() -> u16 {
    std::env::var("QJOB_WORKER_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(1)
}

/// Bounded retry cap (I4).
pub fn max_retries() -> u32 {
    std::env::var("QJOB_MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(3)
}

/// Defensive poll interval while a Job sits in Running with no new events.
pub fn running_poll_interval() -> Duration {
    std::env::var("QJOB_RUNNING_POLL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(5))
}

/// Fixed retry backoff baseline (MVP policy; `ExponentialBackoff` is also
/// wired and selectable, see [`backoff`]).
pub fn retry_backoff_secs() -> u64 {
    std::env::var("QJOB_RETRY_BACKOFF_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(10)
}

/// Whether to use the exponential backoff policy instead of the fixed
/// baseline. Both implement the same `Backoff` trait (§4.1).
pub fn use_exponential_backoff() -> bool {
    std::env::var("QJOB_EXPONENTIAL_BACKOFF")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn backoff() -> std::sync::Arc<dyn quantum_core::Backoff> {
    if use_exponential_backoff() {
        std::sync::Arc::new(quantum_core::ExponentialBackoff::default())
    } else {
        std::sync::Arc::new(quantum_core::FixedBackoff {
            baseline: Duration::from_secs(retry_backoff_secs()),
        })
    }
}

/// Container image for the in-pod quantum executor.
pub fn executor_image() -> String {
    std::env::var("QJOB_EXECUTOR_IMAGE").unwrap_or_else(|_| DEFAULT_EXECUTOR_IMAGE.to_string())
}

/// Per-RPC deadline (validation HTTP, pod/configmap create-or-get).
pub fn rpc_timeout() -> Duration {
    std::env::var("QJOB_RPC_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(30))
}

/// Lease name gating leader election. Unset (the default) runs without
/// election — correct for single-replica deployments.
pub fn lease_name() -> Option<String> {
    std::env::var("QJOB_LEASE_NAME").ok().filter(|s| !s.is_empty())
}

/// Namespace the controller watches. Empty means all namespaces.
pub fn watch_namespace() -> Option<String> {
    std::env::var("QJOB_NAMESPACE").ok().filter(|s| !s.is_empty())
}

/// Identity this replica uses when claiming the lease (defaults to the pod
/// name, which Kubernetes sets via the downward API).
pub fn pod_name() -> Result<String, OperatorError> {
    std::env::var("POD_NAME")
        .or_else(|_| std::env::var("HOSTNAME"))
        .map_err(|_| OperatorError::MissingPodIdentity)
}
