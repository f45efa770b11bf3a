// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn crd_yaml_contains_expected_group_and_kind() {
    let yaml = crd_yaml().unwrap();
    assert!(yaml.contains("quantum.quantum.io"));
    assert!(yaml.contains("QiskitJob"));
    assert!(yaml.contains("qjob"));
}
