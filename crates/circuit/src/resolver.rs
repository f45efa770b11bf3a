// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves a `CircuitSpec` into something a workload can run: source code
//! to mount as a file (`inline`, `configmap`, `url`) or an init-container
//! plan that fetches it at pod start (`git`).

use crate::error::CircuitError;
use crate::git::{self, GitClonePlan};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::Api;
use quantum_schema::{CircuitSource, CircuitSpec};
use std::time::Duration;

/// Circuits fetched over HTTP are capped well above any realistic Qiskit
/// circuit serialization (QASM or a JSON `QuantumCircuit` dump) while still
/// bounding memory use against a misbehaving or malicious URL.
pub const MAX_CIRCUIT_BYTES: usize = 4 * 1024 * 1024;
pub const URL_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// The key a circuit is expected to live under in a `configmap`-sourced
/// `CircuitSpec`.
pub const CIRCUIT_CONFIGMAP_KEY: &str = "circuit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Circuit source text, ready to be written into a mounted ConfigMap.
    Content(String),
    /// A `git clone` init container plan; the content itself is fetched
    /// inside the workload's pod, not by the reconciler.
    Clone(GitClonePlan),
}

/// A resolved circuit alongside the source it came from, useful for
/// `status.circuitMetadata` bookkeeping upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitPayload {
    pub source: CircuitSource,
    pub resolved: Resolved,
}

pub async fn resolve(
    spec: &CircuitSpec,
    configmaps: &Api<ConfigMap>,
    http: &reqwest::Client,
) -> Result<CircuitPayload, CircuitError> {
    let resolved = match spec.source {
        CircuitSource::Inline => Resolved::Content(resolve_inline(spec)?),
        CircuitSource::Configmap => Resolved::Content(resolve_configmap(spec, configmaps).await?),
        CircuitSource::Url => Resolved::Content(resolve_url(spec, http).await?),
        CircuitSource::Git => Resolved::Clone(resolve_git(spec)?),
    };
    Ok(CircuitPayload { source: spec.source, resolved })
}

fn resolve_inline(spec: &CircuitSpec) -> Result<String, CircuitError> {
    spec.code.clone().ok_or(CircuitError::MissingField("code"))
}

async fn resolve_configmap(
    spec: &CircuitSpec,
    configmaps: &Api<ConfigMap>,
) -> Result<String, CircuitError> {
    let name = spec
        .config_map_ref
        .as_deref()
        .ok_or(CircuitError::MissingField("configMapRef"))?;

    let cm = configmaps
        .get(name)
        .await
        .map_err(|source| CircuitError::ConfigMapFetch { name: name.to_string(), source })?;

    cm.data
        .as_ref()
        .and_then(|data| data.get(CIRCUIT_CONFIGMAP_KEY))
        .cloned()
        .ok_or_else(|| CircuitError::ConfigMapKeyMissing {
            name: name.to_string(),
            key: CIRCUIT_CONFIGMAP_KEY.to_string(),
        })
}

async fn resolve_url(spec: &CircuitSpec, http: &reqwest::Client) -> Result<String, CircuitError> {
    let url = spec.url.as_deref().ok_or(CircuitError::MissingField("url"))?;

    let fetch = async {
        let response =
            http.get(url).send().await.map_err(|source| CircuitError::UrlFetch {
                url: url.to_string(),
                source,
            })?;

        if let Some(len) = response.content_length() {
            if len as usize > MAX_CIRCUIT_BYTES {
                return Err(CircuitError::ResponseTooLarge { url: url.to_string(), limit: MAX_CIRCUIT_BYTES });
            }
        }

        let bytes = response.bytes().await.map_err(|source| CircuitError::UrlFetch {
            url: url.to_string(),
            source,
        })?;
        if bytes.len() > MAX_CIRCUIT_BYTES {
            return Err(CircuitError::ResponseTooLarge { url: url.to_string(), limit: MAX_CIRCUIT_BYTES });
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    };

    tokio::time::timeout(URL_FETCH_TIMEOUT, fetch).await.map_err(|_| CircuitError::Timeout {
        url: url.to_string(),
        timeout_secs: URL_FETCH_TIMEOUT.as_secs(),
    })?
}

fn resolve_git(spec: &CircuitSpec) -> Result<GitClonePlan, CircuitError> {
    let git_ref = spec.git_ref.as_ref().ok_or(CircuitError::MissingField("gitRef"))?;
    git::plan_clone(git_ref)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
