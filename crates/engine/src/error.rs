// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use quantum_adapters::AdapterError;
use thiserror::Error;

/// Taxonomy from the error-handling design: structural spec errors and
/// circuit-validation rejections are handled inline by the `pending`/
/// `validating` phase handlers, which write `status.phase = Failed`
/// directly rather than propagating an error (there is no caller above
/// them that could do anything but the same thing). What does propagate
/// here is everything a phase handler cannot resolve itself: adapter/
/// circuit-resolution failures and backend-selection dead ends.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("no backend available: {0}")]
    UnsupportedBackend(String),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Circuit(#[from] quantum_circuit::CircuitError),
}

impl ReconcileError {
    /// Everything but an exhausted backend search is worth retrying;
    /// adapter/circuit errors each know their own transience.
    pub fn is_transient(&self) -> bool {
        match self {
            ReconcileError::UnsupportedBackend(_) => false,
            ReconcileError::Adapter(e) => e.is_transient(),
            ReconcileError::Circuit(e) => e.is_transient(),
        }
    }
}
