// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn workload_name_is_prefixed() {
    let job = JobRef::new("default", "bell-state");
    assert_eq!(job.workload_name(), "qiskit-job-bell-state");
}

#[test]
fn display_is_namespace_slash_name() {
    let job = JobRef::new("default", "bell-state");
    assert_eq!(job.to_string(), "default/bell-state");
}
