// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine-construction configuration. Values here are resolved once at
//! startup (by the operator binary's `config` module) and handed to the
//! engine as a plain value — no module-level mutable state (§9 redesign
//! note on global configuration).

use quantum_core::Backoff;
use std::sync::Arc;
use std::time::Duration;

pub struct EngineConfig {
    pub executor_image: String,
    pub max_retries: u32,
    /// Requeue interval while a phase's action is otherwise idle
    /// (Running's defensive poll; §4.1).
    pub running_poll_interval: Duration,
    pub backoff: Arc<dyn Backoff>,
}

impl EngineConfig {
    pub fn new(executor_image: impl Into<String>, backoff: Arc<dyn Backoff>) -> Self {
        Self {
            executor_image: executor_image.into(),
            max_retries: 3,
            running_poll_interval: Duration::from_secs(5),
            backoff,
        }
    }
}
