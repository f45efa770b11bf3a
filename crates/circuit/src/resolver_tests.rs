// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn inline_requires_code() {
    let spec = CircuitSpec {
        source: CircuitSource::Inline,
        code: None,
        config_map_ref: None,
        url: None,
        git_ref: None,
    };
    assert!(matches!(resolve_inline(&spec), Err(CircuitError::MissingField("code"))));
}

#[test]
fn inline_returns_code_verbatim() {
    let spec = CircuitSpec {
        source: CircuitSource::Inline,
        code: Some("OPENQASM 2.0;".to_string()),
        config_map_ref: None,
        url: None,
        git_ref: None,
    };
    assert_eq!(resolve_inline(&spec).unwrap(), "OPENQASM 2.0;");
}

#[test]
fn git_requires_git_ref() {
    let spec = CircuitSpec {
        source: CircuitSource::Git,
        code: None,
        config_map_ref: None,
        url: None,
        git_ref: None,
    };
    assert!(matches!(resolve_git(&spec), Err(CircuitError::MissingField("gitRef"))));
}
