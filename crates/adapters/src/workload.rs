// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child Workload Manager — creates, observes and tears down the pod that
//! runs the in-pod quantum executor for a job. Pod construction is
//! grounded directly in the teacher's `pod::build_pod` (volumes, init
//! containers, env injection); the object model (owner references, labels,
//! `kube::Api<Pod>` lifecycle calls) follows the teacher's k8s adapter
//! `mod.rs`.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{
    Capabilities, ConfigMap, ConfigMapVolumeSource, Container, EnvVar, Pod, PodSpec,
    ResourceRequirements, SecurityContext, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::api::{DeleteParams, ListParams, LogParams, PostParams};
use kube::{Api, Client};
use quantum_circuit::{GitClonePlan, Resolved};
use quantum_core::JobRef;
use std::collections::BTreeMap;

use crate::error::AdapterError;

pub const CIRCUIT_CONFIGMAP_KEY: &str = "circuit.py";
pub const CIRCUIT_MOUNT_PATH: &str = "/circuits/circuit.py";
pub const WORKSPACE_MOUNT_PATH: &str = "/workspace";
const APP_LABEL: &str = "operator";

/// What the engine needs to observe back from the child pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodObservedPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

#[async_trait]
pub trait WorkloadManager: Send + Sync {
    /// Create the job's pod (and, for inline/configmap/url circuits, the
    /// backing ConfigMap) if it does not already exist. Idempotent.
    async fn ensure_workload(&self, request: WorkloadRequest<'_>) -> Result<(), AdapterError>;

    async fn observe(&self, job: &JobRef) -> Result<Option<PodObservedPhase>, AdapterError>;

    /// Stdout of a Succeeded job's container — expected to contain the
    /// executor's JSON Result Document (§6 "Child workload container
    /// contract").
    async fn fetch_logs(&self, job: &JobRef) -> Result<String, AdapterError>;

    /// Delete the pod (and its circuit ConfigMap, but never the result
    /// ConfigMap — that is the caller's call per I3/I7).
    async fn teardown(&self, job: &JobRef) -> Result<(), AdapterError>;
}

pub struct WorkloadRequest<'a> {
    pub job: &'a JobRef,
    pub owner: OwnerReference,
    pub executor_image: &'a str,
    pub backend_type: &'a str,
    pub circuit: &'a Resolved,
    pub env: Vec<(String, String)>,
}

pub struct KubeWorkloadManager {
    client: Client,
}

impl KubeWorkloadManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn config_maps(&self, namespace: &str) -> Api<ConfigMap> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

fn labels(job: &JobRef, backend_type: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("app".to_string(), APP_LABEL.to_string());
    labels.insert("job".to_string(), job.name.clone());
    labels.insert("backend-type".to_string(), backend_type.to_string());
    labels
}

fn build_circuit_configmap(
    job: &JobRef,
    owner: &OwnerReference,
    backend_type: &str,
    content: &str,
) -> ConfigMap {
    let mut data = BTreeMap::new();
    data.insert(CIRCUIT_CONFIGMAP_KEY.to_string(), content.to_string());
    ConfigMap {
        metadata: k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
            name: Some(circuit_configmap_name(job)),
            namespace: Some(job.namespace.clone()),
            owner_references: Some(vec![owner.clone()]),
            labels: Some(labels(job, backend_type)),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    }
}

fn circuit_configmap_name(job: &JobRef) -> String {
    format!("{}-circuit", job.workload_name())
}

fn build_pod(request: &WorkloadRequest<'_>) -> Pod {
    let job = request.job;
    let mut volumes = Vec::new();
    let mut volume_mounts = Vec::new();
    let mut init_containers = Vec::new();
    let mut command = vec!["quantum-executor".to_string()];

    match request.circuit {
        Resolved::Content(content) => {
            volumes.push(Volume {
                name: "circuit".to_string(),
                config_map: Some(ConfigMapVolumeSource {
                    name: circuit_configmap_name(job),
                    ..Default::default()
                }),
                ..Default::default()
            });
            volume_mounts.push(VolumeMount {
                name: "circuit".to_string(),
                mount_path: "/circuits".to_string(),
                read_only: Some(true),
                ..Default::default()
            });
            command.extend(["--circuit-file".to_string(), CIRCUIT_MOUNT_PATH.to_string()]);
            let _ = content; // content lives in the ConfigMap created alongside the pod.
        }
        Resolved::Clone(GitClonePlan { command: clone_cmd, .. }) => {
            volumes.push(Volume { name: "workspace".to_string(), ..Default::default() });
            let mount = VolumeMount {
                name: "workspace".to_string(),
                mount_path: WORKSPACE_MOUNT_PATH.to_string(),
                ..Default::default()
            };
            volume_mounts.push(mount.clone());
            init_containers.push(Container {
                name: "clone".to_string(),
                image: Some(request.executor_image.to_string()),
                command: Some(clone_cmd.clone()),
                volume_mounts: Some(vec![mount]),
                ..Default::default()
            });
            command.extend(["--circuit-file".to_string(), format!("{WORKSPACE_MOUNT_PATH}/circuit.py")]);
        }
    }

    let env: Vec<EnvVar> = request
        .env
        .iter()
        .map(|(name, value)| EnvVar { name: name.clone(), value: Some(value.clone()), ..Default::default() })
        .collect();

    Pod {
        metadata: k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
            name: Some(job.workload_name()),
            namespace: Some(job.namespace.clone()),
            owner_references: Some(vec![request.owner.clone()]),
            labels: Some(labels(job, request.backend_type)),
            ..Default::default()
        },
        spec: Some(PodSpec {
            init_containers: (!init_containers.is_empty()).then_some(init_containers),
            containers: vec![Container {
                name: "executor".to_string(),
                image: Some(request.executor_image.to_string()),
                command: Some(command),
                env: (!env.is_empty()).then_some(env),
                volume_mounts: (!volume_mounts.is_empty()).then_some(volume_mounts),
                resources: Some(default_resources()),
                security_context: Some(default_security_context()),
                ..Default::default()
            }],
            volumes: (!volumes.is_empty()).then_some(volumes),
            restart_policy: Some("Never".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn default_resources() -> ResourceRequirements {
    let mut requests = BTreeMap::new();
    requests.insert("cpu".to_string(), Quantity("500m".to_string()));
    requests.insert("memory".to_string(), Quantity("1Gi".to_string()));
    let mut limits = BTreeMap::new();
    limits.insert("cpu".to_string(), Quantity("2".to_string()));
    limits.insert("memory".to_string(), Quantity("4Gi".to_string()));
    ResourceRequirements { requests: Some(requests), limits: Some(limits), ..Default::default() }
}

fn default_security_context() -> SecurityContext {
    SecurityContext {
        run_as_non_root: Some(true),
        run_as_user: Some(1000),
        allow_privilege_escalation: Some(false),
        capabilities: Some(Capabilities { drop: Some(vec!["ALL".to_string()]), ..Default::default() }),
        ..Default::default()
    }
}

#[async_trait]
impl WorkloadManager for KubeWorkloadManager {
    async fn ensure_workload(&self, request: WorkloadRequest<'_>) -> Result<(), AdapterError> {
        let job = request.job;
        let pods = self.pods(&job.namespace);

        if let Resolved::Content(content) = request.circuit {
            let config_maps = self.config_maps(&job.namespace);
            let cm = build_circuit_configmap(job, &request.owner, request.backend_type, content);
            match config_maps.create(&PostParams::default(), &cm).await {
                Ok(_) => {}
                Err(kube::Error::Api(err)) if err.code == 409 => {}
                Err(e) => return Err(AdapterError::Kube(e)),
            }
        }

        let pod = build_pod(&request);
        match pods.create(&PostParams::default(), &pod).await {
            Ok(_) => {
                tracing::info!(%job, "created job pod");
                Ok(())
            }
            Err(kube::Error::Api(err)) if err.code == 409 => Ok(()),
            Err(e) => Err(AdapterError::Kube(e)),
        }
    }

    async fn observe(&self, job: &JobRef) -> Result<Option<PodObservedPhase>, AdapterError> {
        let pods = self.pods(&job.namespace);
        match pods.get(&job.workload_name()).await {
            Ok(pod) => {
                let phase = pod
                    .status
                    .as_ref()
                    .and_then(|s| s.phase.as_deref())
                    .map(|phase| match phase {
                        "Pending" => PodObservedPhase::Pending,
                        "Running" => PodObservedPhase::Running,
                        "Succeeded" => PodObservedPhase::Succeeded,
                        "Failed" => PodObservedPhase::Failed,
                        _ => PodObservedPhase::Unknown,
                    })
                    .unwrap_or(PodObservedPhase::Unknown);
                Ok(Some(phase))
            }
            Err(kube::Error::Api(err)) if err.code == 404 => Ok(None),
            Err(e) => Err(AdapterError::Kube(e)),
        }
    }

    async fn fetch_logs(&self, job: &JobRef) -> Result<String, AdapterError> {
        let pods = self.pods(&job.namespace);
        let logs = pods
            .logs(&job.workload_name(), &LogParams { container: Some("executor".to_string()), ..Default::default() })
            .await?;
        Ok(logs)
    }

    async fn teardown(&self, job: &JobRef) -> Result<(), AdapterError> {
        let pods = self.pods(&job.namespace);
        match pods.delete(&job.workload_name(), &DeleteParams::default()).await {
            Ok(_) => {}
            Err(kube::Error::Api(err)) if err.code == 404 => {}
            Err(e) => return Err(AdapterError::Kube(e)),
        }

        let config_maps = self.config_maps(&job.namespace);
        match config_maps.delete(&circuit_configmap_name(job), &DeleteParams::default()).await {
            Ok(_) => {}
            Err(kube::Error::Api(err)) if err.code == 404 => {}
            Err(e) => return Err(AdapterError::Kube(e)),
        }
        Ok(())
    }
}

/// Used by cleanup sweeps and tests; not part of the `WorkloadManager`
/// contract since the controller's owner-reference watch already drives
/// per-job reconciliation.
pub async fn list_job_pods(client: &Client, namespace: &str) -> Result<Vec<Pod>, AdapterError> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let lp = ListParams::default().labels(&format!("app={APP_LABEL}"));
    let list = pods.list(&lp).await?;
    Ok(list.items)
}
