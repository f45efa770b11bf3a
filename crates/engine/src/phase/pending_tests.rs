// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use quantum_schema::{BackendKind, BackendSpec, CircuitSpec, ExecutionSpec};
use yare::parameterized;

fn spec_with(source: CircuitSource, code: Option<&str>) -> QiskitJobSpec {
    QiskitJobSpec {
        backend: BackendSpec {
            type_: BackendKind::LocalSimulator,
            name: None,
            instance: None,
            hub: None,
            group: None,
            project: None,
        },
        circuit: CircuitSpec {
            source,
            code: code.map(str::to_string),
            config_map_ref: None,
            url: None,
            git_ref: None,
        },
        execution: ExecutionSpec::default(),
        output: None,
        backend_selection: None,
        session: None,
        resources: None,
        budget: None,
        credentials: None,
    }
}

#[parameterized(
    inline_missing_code = { CircuitSource::Inline, None, false },
    inline_with_code = { CircuitSource::Inline, Some("qasm"), true },
    configmap_missing_ref = { CircuitSource::Configmap, None, false },
)]
fn validate_structural_rules(source: CircuitSource, code: Option<&str>, expect_ok: bool) {
    let spec = spec_with(source, code);
    assert_eq!(validate(&spec).is_ok(), expect_ok);
}
