// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where a vessel is in its scheduling lifecycle during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VesselState {
    /// Validated and waiting for its turn.
    #[default]
    Pending,
    /// A dock and a candidate plan have been chosen.
    DockSelected,
    /// Dock, cranes and staff are committed in the ledger.
    ResourcesReserved,
    /// The operation is part of the schedule. Terminal.
    Scheduled,
    /// No dock produced a plan that could be reserved. Terminal.
    Unschedulable,
}

impl VesselState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::DockSelected => "DockSelected",
            Self::ResourcesReserved => "ResourcesReserved",
            Self::Scheduled => "Scheduled",
            Self::Unschedulable => "Unschedulable",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → `DockSelected`
    /// - `DockSelected` → `DockSelected` (next candidate after a conflict)
    /// - `DockSelected` → `ResourcesReserved`
    /// - `ResourcesReserved` → Scheduled
    /// - Pending → Unschedulable
    /// - `DockSelected` → Unschedulable
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::DockSelected | Self::Unschedulable)
                | (
                    Self::DockSelected,
                    Self::DockSelected | Self::ResourcesReserved | Self::Unschedulable
                )
                | (Self::ResourcesReserved, Self::Scheduled)
        )
    }

    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Unschedulable)
    }

    /// Moves to `target` if the transition is valid.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidStateTransition` if the state machine does
    /// not allow the transition.
    pub fn transition(&mut self, vessel_id: &str, target: Self) -> Result<(), CoreError> {
        if !self.can_transition_to(target) {
            return Err(CoreError::InvalidStateTransition {
                vessel_id: vessel_id.to_string(),
                from: *self,
                to: target,
            });
        }
        tracing::debug!(vessel_id, from = %self, to = %target, "Vessel state transition");
        *self = target;
        Ok(())
    }
}

impl std::fmt::Display for VesselState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VesselState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "DockSelected" => Ok(Self::DockSelected),
            "ResourcesReserved" => Ok(Self::ResourcesReserved),
            "Scheduled" => Ok(Self::Scheduled),
            "Unschedulable" => Ok(Self::Unschedulable),
            _ => Err(format!("Unknown vessel state '{s}'")),
        }
    }
}
