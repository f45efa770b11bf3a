// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result Persister — writes the executor's result document to the
//! destination named by `spec.output`. Only `configmap` is implemented;
//! `pvc`/`s3`/`gcs` are modeled so the interface doesn't need to change
//! later, but each call returns `AdapterError::SinkUnimplemented`.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use kube::api::PostParams;
use kube::{Api, Client};
use quantum_core::JobRef;
use quantum_schema::SinkKind;
use std::collections::BTreeMap;

use crate::error::AdapterError;

pub const RESULT_CONFIGMAP_KEY: &str = "results.json";

#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn persist(
        &self,
        job: &JobRef,
        owner: &OwnerReference,
        location: &str,
        document: &str,
    ) -> Result<String, AdapterError>;
}

pub struct ConfigMapResultSink {
    client: Client,
}

impl ConfigMapResultSink {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResultSink for ConfigMapResultSink {
    async fn persist(
        &self,
        job: &JobRef,
        owner: &OwnerReference,
        location: &str,
        document: &str,
    ) -> Result<String, AdapterError> {
        let configmaps: Api<ConfigMap> = Api::namespaced(self.client.clone(), &job.namespace);
        let name = location.to_string();

        let mut data = BTreeMap::new();
        data.insert(RESULT_CONFIGMAP_KEY.to_string(), document.to_string());

        let cm = ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.clone()),
                namespace: Some(job.namespace.clone()),
                owner_references: Some(vec![owner.clone()]),
                ..Default::default()
            },
            data: Some(data),
            ..Default::default()
        };

        match configmaps.create(&PostParams::default(), &cm).await {
            Ok(_) => {}
            Err(kube::Error::Api(err)) if err.code == 409 => {
                configmaps.replace(&name, &PostParams::default(), &cm).await?;
            }
            Err(e) => return Err(AdapterError::Kube(e)),
        }

        Ok(format!("configmap://{}/{}", job.namespace, name))
    }
}

/// Dispatches on `SinkKind`, returning `SinkUnimplemented` for the three
/// sinks the spec admits but does not require ("defined by the interface
/// but unimplemented").
pub async fn persist_by_kind(
    kind: SinkKind,
    configmap_sink: &dyn ResultSink,
    job: &JobRef,
    owner: &OwnerReference,
    location: &str,
    document: &str,
) -> Result<String, AdapterError> {
    match kind {
        SinkKind::Configmap => configmap_sink.persist(job, owner, location, document).await,
        SinkKind::Pvc => Err(AdapterError::SinkUnimplemented { sink: "pvc" }),
        SinkKind::S3 => Err(AdapterError::SinkUnimplemented { sink: "s3" }),
        SinkKind::Gcs => Err(AdapterError::SinkUnimplemented { sink: "gcs" }),
    }
}
