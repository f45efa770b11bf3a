// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CRD manifest generation.
//!
//! Registering the CRD with the API server is explicitly out of scope
//! (§1 Non-goals: "the resource-schema registration machinery itself"). This
//! module only turns the Rust schema into the YAML an operator would feed to
//! `kubectl apply -f -`; it is exposed so a one-off bootstrap script or `helm`
//! chart can call it, not wired into the operator binary's startup path.

use crate::QiskitJob;
use kube::CustomResourceExt;

/// Render the `QiskitJob` CRD as a YAML manifest.
pub fn crd_yaml() -> Result<String, serde_yaml_like::Error> {
    let crd = QiskitJob::crd();
    serde_yaml_like::to_string(&crd)
}

/// Minimal YAML serialization shim. The workspace does not otherwise depend
/// on a YAML crate, and pulling one in purely to print a bootstrap manifest
/// string is not worth widening the dependency surface — the CRD value is a
/// plain `serde_json::Value` tree, which round-trips through YAML's JSON
/// compatibility subset. Real YAML emission (anchors, comments, multi-doc)
/// is unnecessary for a single `apiextensions.k8s.io/v1.CustomResourceDefinition`
/// document.
pub mod serde_yaml_like {
    use serde::Serialize;
    use std::fmt;

    #[derive(Debug)]
    pub struct Error(String);

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "manifest serialization error: {}", self.0)
        }
    }
    impl std::error::Error for Error {}

    /// Serialize to JSON — a valid YAML document, since JSON is a subset of
    /// YAML 1.2's flow style.
    pub fn to_string<T: Serialize>(value: &T) -> Result<String, Error> {
        serde_json::to_string_pretty(value).map_err(|e| Error(e.to_string()))
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
