// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-owned half of the resource: `QiskitJob.spec`. Treated as immutable
//! by the engine (I6) — nothing in this crate or `quantum-engine` ever
//! writes through a `&mut QiskitJobSpec`.

use crate::status::QiskitJobStatus;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The `QiskitJob` custom resource: `quantum.quantum.io/v1`.
///
/// `kube::CustomResource` generates the `QiskitJob` struct (`metadata`,
/// `spec: QiskitJobSpec`, `status: Option<QiskitJobStatus>`) from this
/// annotated spec type.
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "quantum.quantum.io",
    version = "v1",
    kind = "QiskitJob",
    namespaced,
    status = "QiskitJobStatus",
    shortname = "qjob",
    printcolumn = r#"{"name":"Phase", "type":"string", "jsonPath":".status.phase"}"#,
    printcolumn = r#"{"name":"Backend", "type":"string", "jsonPath":".status.selectedBackend"}"#,
    printcolumn = r#"{"name":"Cost", "type":"string", "jsonPath":".status.actualCost"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct QiskitJobSpec {
    pub backend: BackendSpec,
    pub circuit: CircuitSpec,
    #[serde(default)]
    pub execution: ExecutionSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_selection: Option<BackendSelectionSpec>,
    /// Opaque passthrough fields the engine does not yet interpret but must
    /// round-trip unchanged (I6), e.g. future session/budget/credentials
    /// accounting. Modeled as raw JSON rather than typed structs because
    /// this spec does not define their shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    LocalSimulator,
    IbmQuantum,
    IbmSimulator,
    AwsBraket,
}

quantum_core::simple_display! {
    BackendKind {
        LocalSimulator => "local_simulator",
        IbmQuantum => "ibm_quantum",
        IbmSimulator => "ibm_simulator",
        AwsBraket => "aws_braket",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendSpec {
    #[serde(rename = "type")]
    pub type_: BackendKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CircuitSource {
    Inline,
    Configmap,
    Url,
    Git,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CircuitSpec {
    pub source: CircuitSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<GitRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitRef {
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Default shots (§4.1: "Shots defaults to 1024 when unspecified or ≤ 0").
pub const DEFAULT_SHOTS: u32 = 1024;
/// Default optimization level.
pub const DEFAULT_OPTIMIZATION_LEVEL: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSpec {
    #[serde(default = "default_shots")]
    pub shots: u32,
    #[serde(default = "default_optimization_level")]
    pub optimization_level: u8,
    #[serde(default)]
    pub resilience_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_execution_time: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub disable_fallback: bool,
}

fn default_shots() -> u32 {
    DEFAULT_SHOTS
}

fn default_optimization_level() -> u8 {
    DEFAULT_OPTIMIZATION_LEVEL
}

impl Default for ExecutionSpec {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            optimization_level: DEFAULT_OPTIMIZATION_LEVEL,
            resilience_level: 0,
            max_execution_time: None,
            priority: Priority::default(),
            disable_fallback: false,
        }
    }
}

impl ExecutionSpec {
    /// Effective shots count after applying the §4.1 default-on-nonpositive
    /// rule (serde's `#[serde(default)]` only covers the field being
    /// *absent*; an explicit `shots: 0` must still be normalized).
    pub fn effective_shots(&self) -> u32 {
        if self.shots == 0 {
            DEFAULT_SHOTS
        } else {
            self.shots
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Configmap,
    Pvc,
    S3,
    Gcs,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    #[serde(rename = "type")]
    pub type_: SinkKind,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendSelectionWeights {
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub queue_time: f64,
    #[serde(default)]
    pub capability: f64,
    #[serde(default)]
    pub availability: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendSelectionSpec {
    #[serde(default)]
    pub preference: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub weights: BackendSelectionWeights,
    #[serde(default)]
    pub fallback_to_simulator: bool,
    /// Extra per-provider hints the engine does not interpret (I6-style
    /// forward compatibility), e.g. region or cost-center tags.
    #[serde(default)]
    pub hints: HashMap<String, String>,
}
