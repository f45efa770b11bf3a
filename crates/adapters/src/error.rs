// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("http error calling {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("validation service rejected the circuit: {0}")]
    ValidationRejected(String),

    #[error("{sink} result sink is not implemented")]
    SinkUnimplemented { sink: &'static str },

    #[error("no backend satisfies the selection constraints")]
    NoBackendAvailable,

    #[error("circuit resolution failed: {0}")]
    Circuit(#[from] quantum_circuit::CircuitError),
}

impl AdapterError {
    /// Whether the caller should treat this as transient (safe to requeue)
    /// rather than a terminal failure of the job itself.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AdapterError::Kube(_) | AdapterError::Http { .. } | AdapterError::Timeout { .. }
        )
    }
}
