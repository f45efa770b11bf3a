// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation Client — synchronous analyze call to the external
//! circuit-validation microservice. Grounded on the teacher's
//! `test-support`-gated `Fake*` adapter convention (`oj-adapters`'s
//! `FakeAdapter`) for the deterministic test double.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::AdapterError;

pub const DEFAULT_VALIDATION_URL: &str = "http://validation-service:8000";
pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(any(test, feature = "test-support"), derive(PartialEq))]
pub struct ValidationRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_name: Option<String>,
    pub optimization_level: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub circuit_hash: String,
    pub depth: u32,
    pub qubits: u32,
    pub gates: u32,
    #[serde(default)]
    pub gate_types: HashMap<String, u32>,
    pub estimated_execution_time: f64,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[async_trait]
pub trait ValidationClient: Send + Sync {
    async fn analyze(&self, request: ValidationRequest) -> Result<ValidationResponse, AdapterError>;
}

/// Real implementation: `POST {base_url}/validate`.
pub struct ReqwestValidationClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ReqwestValidationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into(), timeout }
    }
}

#[async_trait]
impl ValidationClient for ReqwestValidationClient {
    async fn analyze(&self, request: ValidationRequest) -> Result<ValidationResponse, AdapterError> {
        let url = format!("{}/validate", self.base_url.trim_end_matches('/'));

        let send = self.client.post(&url).json(&request).send();
        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| AdapterError::Timeout { url: url.clone(), timeout_secs: self.timeout.as_secs() })?
            .map_err(|source| AdapterError::Http { url: url.clone(), source })?;

        let body: ValidationResponse = response
            .json()
            .await
            .map_err(|source| AdapterError::Http { url: url.clone(), source })?;
        Ok(body)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    use super::*;
    use parking_lot::Mutex;

    /// Deterministic stand-in for tests: returns a fixed response (or error)
    /// regardless of the request, and records every request it saw.
    pub struct FakeValidationClient {
        response: Mutex<Result<ValidationResponse, String>>,
        requests: Mutex<Vec<ValidationRequest>>,
    }

    impl FakeValidationClient {
        pub fn valid(response: ValidationResponse) -> Self {
            Self { response: Mutex::new(Ok(response)), requests: Mutex::new(Vec::new()) }
        }

        pub fn rejecting(reason: impl Into<String>) -> Self {
            Self { response: Mutex::new(Err(reason.into())), requests: Mutex::new(Vec::new()) }
        }

        pub fn requests_seen(&self) -> Vec<ValidationRequest> {
            self.requests.lock().clone()
        }
    }

    #[async_trait]
    impl ValidationClient for FakeValidationClient {
        async fn analyze(
            &self,
            request: ValidationRequest,
        ) -> Result<ValidationResponse, AdapterError> {
            self.requests.lock().push(request);
            match &*self.response.lock() {
                Ok(resp) => Ok(resp.clone()),
                Err(reason) => Err(AdapterError::ValidationRejected(reason.clone())),
            }
        }
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
