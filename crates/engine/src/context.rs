// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use k8s_openapi::api::core::v1::ConfigMap;
use kube::Api;
use quantum_adapters::{BackendSelector, ResultSink, ValidationClient, WorkloadManager};
use quantum_core::Clock;
use std::sync::Arc;

use crate::config::EngineConfig;

/// Everything a phase handler needs beyond the Job itself. Cloned cheaply
/// (every field is an `Arc` or a `kube::Api` handle, itself `Arc`-backed)
/// so the controller can hand one copy to every worker.
#[derive(Clone)]
pub struct EngineContext {
    pub validation: Arc<dyn ValidationClient>,
    pub backend_selector: Arc<dyn BackendSelector>,
    pub workload: Arc<dyn WorkloadManager>,
    pub result_sink: Arc<dyn ResultSink>,
    pub clock: Arc<dyn Clock>,
    pub circuit_configmaps: Api<ConfigMap>,
    pub http: reqwest::Client,
    pub config: Arc<EngineConfig>,
}
