// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Job's position in its lifecycle state machine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Phase of a `QiskitJob`, exactly the closed set from the resource
/// contract. Comparisons are exact string equality on the wire, which
/// `Display`/`FromStr` preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    Validating,
    Scheduling,
    Running,
    Completed,
    Failed,
    Cancelled,
    Retrying,
}

crate::simple_display! {
    Phase {
        Pending => "Pending",
        Validating => "Validating",
        Scheduling => "Scheduling",
        Running => "Running",
        Completed => "Completed",
        Failed => "Failed",
        Cancelled => "Cancelled",
        Retrying => "Retrying",
    }
}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Phase::Pending),
            "Validating" => Ok(Phase::Validating),
            "Scheduling" => Ok(Phase::Scheduling),
            "Running" => Ok(Phase::Running),
            "Completed" => Ok(Phase::Completed),
            "Failed" => Ok(Phase::Failed),
            "Cancelled" => Ok(Phase::Cancelled),
            "Retrying" => Ok(Phase::Retrying),
            other => Err(UnknownPhase(other.to_string())),
        }
    }
}

/// An unrecognized phase string (e.g. written by an older engine version).
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown phase: {0}")]
pub struct UnknownPhase(pub String);

impl Phase {
    /// Parse a status phase string, or an empty status (`None`), into a
    /// `Phase`. Unknown strings self-heal to `Pending` rather than erroring
    /// (§4.1 unknown-phase policy); `None` is the "unseen" phase, also
    /// `Pending`.
    pub fn parse_or_self_heal(raw: Option<&str>) -> Phase {
        match raw {
            None => Phase::Pending,
            Some(s) => Phase::from_str(s).unwrap_or(Phase::Pending),
        }
    }

    /// Terminal phases never leave except via deletion (I8). `Retrying` is
    /// deliberately not terminal — it always advances back to `Pending`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Completed | Phase::Failed | Phase::Cancelled)
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
