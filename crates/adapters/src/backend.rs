// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend Selector — picks the backend a validated circuit runs against.
//!
//! The full scoring policy (cost/queue-time/capability/availability
//! weights from `BackendSelectionSpec`) has nothing to score against until
//! remote-backend adapters exist, which is out of scope here. `Scored` and
//! the weight fields on the spec type are carried so a future
//! implementation slots in without a schema change; this module only ships
//! the MVP policy the spec actually requires.

use crate::error::AdapterError;
use quantum_schema::{BackendKind, BackendSelectionSpec, BackendSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedBackend {
    pub name: String,
    pub provider: Option<String>,
    pub simulator: bool,
    pub fallback_used: bool,
}

pub trait BackendSelector: Send + Sync {
    fn select(
        &self,
        requested: &BackendSpec,
        selection: Option<&BackendSelectionSpec>,
    ) -> Result<SelectedBackend, AdapterError>;
}

/// MVP policy: only `local_simulator` is ever selectable. Any other
/// requested kind falls back to the simulator when the spec allows it
/// (`fallbackToSimulator`), otherwise the job fails scheduling.
///
/// Full scoring formula (not implemented, no remote backends to score):
/// `score = w.cost * cost_term + w.queue_time * queue_term
///          + w.capability * capability_term + w.availability * availability_term`
/// evaluated per candidate backend and sorted descending.
pub struct LocalSimulatorOnly;

impl BackendSelector for LocalSimulatorOnly {
    fn select(
        &self,
        requested: &BackendSpec,
        selection: Option<&BackendSelectionSpec>,
    ) -> Result<SelectedBackend, AdapterError> {
        if requested.type_ == BackendKind::LocalSimulator {
            return Ok(SelectedBackend {
                name: requested.name.clone().unwrap_or_else(|| "local_simulator".to_string()),
                provider: None,
                simulator: true,
                fallback_used: false,
            });
        }

        let fallback_allowed = selection.map(|s| s.fallback_to_simulator).unwrap_or(false);
        if fallback_allowed {
            return Ok(SelectedBackend {
                name: "local_simulator".to_string(),
                provider: None,
                simulator: true,
                fallback_used: true,
            });
        }

        Err(AdapterError::NoBackendAvailable)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
