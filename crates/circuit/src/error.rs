// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("circuit spec is missing required field `{0}` for its source")]
    MissingField(&'static str),

    #[error("failed to read ConfigMap `{name}`: {source}")]
    ConfigMapFetch {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("ConfigMap `{name}` has no key `{key}`")]
    ConfigMapKeyMissing { name: String, key: String },

    #[error("failed to fetch circuit from `{url}`: {source}")]
    UrlFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("circuit response from `{url}` exceeded the {limit}-byte cap")]
    ResponseTooLarge { url: String, limit: usize },

    #[error("fetching circuit from `{url}` timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("git ref is invalid: {0}")]
    InvalidGitRef(String),
}

impl CircuitError {
    /// Missing fields and an invalid git ref are spec errors the user must
    /// fix; everything else (fetch failures, timeouts, oversized
    /// responses) is worth a retry.
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            CircuitError::MissingField(_)
                | CircuitError::InvalidGitRef(_)
                | CircuitError::ConfigMapKeyMissing { .. }
        )
    }
}
