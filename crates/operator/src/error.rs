// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Top-level error type for the `qjobd` binary: everything that can fail
/// outside the Phase Engine itself (client construction, status writes,
/// leader election, process wiring).
#[derive(Debug, Error)]
pub enum OperatorError {
    #[error("neither POD_NAME nor HOSTNAME is set; cannot establish lease identity")]
    MissingPodIdentity,

    #[error("failed to build kube client: {0}")]
    ClientSetup(#[source] kube::Error),
}
