// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn backend(kind: BackendKind) -> BackendSpec {
    BackendSpec { type_: kind, name: None, instance: None, hub: None, group: None, project: None }
}

#[test]
fn selects_local_simulator_directly() {
    let selected = LocalSimulatorOnly.select(&backend(BackendKind::LocalSimulator), None).unwrap();
    assert!(selected.simulator);
    assert!(!selected.fallback_used);
}

#[test]
fn falls_back_to_simulator_when_allowed() {
    let selection =
        quantum_schema::BackendSelectionSpec { fallback_to_simulator: true, ..Default::default() };
    let selected =
        LocalSimulatorOnly.select(&backend(BackendKind::IbmQuantum), Some(&selection)).unwrap();
    assert!(selected.fallback_used);
}

#[test]
fn rejects_remote_backend_without_fallback() {
    let result = LocalSimulatorOnly.select(&backend(BackendKind::IbmQuantum), None);
    assert!(matches!(result, Err(AdapterError::NoBackendAvailable)));
}
