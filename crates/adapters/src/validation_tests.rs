// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::fake::FakeValidationClient;
use super::*;

fn sample_response() -> ValidationResponse {
    ValidationResponse {
        valid: true,
        circuit_hash: "abc123".to_string(),
        depth: 4,
        qubits: 2,
        gates: 6,
        gate_types: HashMap::new(),
        estimated_execution_time: 0.5,
        errors: Vec::new(),
        warnings: Vec::new(),
    }
}

#[tokio::test]
async fn fake_client_returns_configured_response() {
    let client = FakeValidationClient::valid(sample_response());
    let response = client
        .analyze(ValidationRequest {
            code: "OPENQASM 2.0;".to_string(),
            backend_name: None,
            optimization_level: 1,
        })
        .await
        .unwrap();
    assert!(response.valid);
    assert_eq!(client.requests_seen().len(), 1);
}

#[tokio::test]
async fn fake_client_surfaces_rejection_as_error() {
    let client = FakeValidationClient::rejecting("unsupported gate: foo");
    let result = client
        .analyze(ValidationRequest {
            code: "bad".to_string(),
            backend_name: None,
            optimization_level: 1,
        })
        .await;
    assert!(matches!(result, Err(AdapterError::ValidationRejected(_))));
}
