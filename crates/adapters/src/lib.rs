// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quantum-adapters: the external-collaborator clients the Phase Engine
//! calls out to — circuit validation, backend selection, child-pod
//! lifecycle, and result persistence. Each is a small trait with one real
//! `kube`/`reqwest`-backed implementation, so `quantum-engine`'s handlers
//! stay testable against fakes without a live cluster.

pub mod backend;
pub mod error;
pub mod result_sink;
pub mod validation;
pub mod workload;

pub use backend::{BackendSelector, LocalSimulatorOnly, SelectedBackend};
pub use error::AdapterError;
pub use result_sink::{persist_by_kind, ConfigMapResultSink, ResultSink};
pub use validation::{ReqwestValidationClient, ValidationClient, ValidationRequest, ValidationResponse};
pub use workload::{KubeWorkloadManager, PodObservedPhase, WorkloadManager, WorkloadRequest};

#[cfg(any(test, feature = "test-support"))]
pub use validation::fake::FakeValidationClient;
