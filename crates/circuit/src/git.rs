// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Git-sourced circuits are never cloned by the engine itself — the plan
//! built here becomes an init container's command, and Kubernetes does the
//! fetching inside the workload's own pod. Grounded on the teacher's
//! `pod::git_clone_command` init-container pattern.

use crate::error::CircuitError;
use quantum_schema::GitRef;

/// Command line for a `git clone` init container that deposits the repo at
/// `/workspace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitClonePlan {
    pub command: Vec<String>,
    pub repo: String,
    pub workspace_mount: &'static str,
}

pub const WORKSPACE_MOUNT: &str = "/workspace";

/// Validate the ref and build the clone command. Does not touch the
/// network — there is nothing to fetch from the reconciler's side, the repo
/// URL is only checked for an obviously-bogus (empty) value.
pub fn plan_clone(git_ref: &GitRef) -> Result<GitClonePlan, CircuitError> {
    if git_ref.repo.trim().is_empty() {
        return Err(CircuitError::InvalidGitRef("repo must not be empty".into()));
    }

    let mut command = vec!["git".to_string(), "clone".to_string()];
    if let Some(branch) = git_ref.branch.as_deref().filter(|b| !b.is_empty()) {
        command.extend_from_slice(&["--branch".to_string(), branch.to_string()]);
    }
    command.extend_from_slice(&[
        "--single-branch".to_string(),
        "--depth".to_string(),
        "1".to_string(),
        git_ref.repo.clone(),
        WORKSPACE_MOUNT.to_string(),
    ]);

    Ok(GitClonePlan { command, repo: git_ref.repo.clone(), workspace_mount: WORKSPACE_MOUNT })
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
