// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn plan_clone_includes_branch_when_set() {
    let git_ref = GitRef {
        repo: "https://example.com/circuits.git".to_string(),
        branch: Some("main".to_string()),
        path: None,
    };
    let plan = plan_clone(&git_ref).unwrap();
    assert!(plan.command.contains(&"--branch".to_string()));
    assert!(plan.command.contains(&"main".to_string()));
    assert_eq!(plan.command.last().unwrap(), WORKSPACE_MOUNT);
}

#[test]
fn plan_clone_omits_branch_flag_when_unset() {
    let git_ref =
        GitRef { repo: "https://example.com/circuits.git".to_string(), branch: None, path: None };
    let plan = plan_clone(&git_ref).unwrap();
    assert!(!plan.command.contains(&"--branch".to_string()));
}

#[test]
fn plan_clone_rejects_empty_repo() {
    let git_ref = GitRef { repo: "  ".to_string(), branch: None, path: None };
    assert!(plan_clone(&git_ref).is_err());
}
