// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::VesselState;
use portops_domain::DomainError;

/// Errors that abort a scheduling call.
///
/// Per-record validation failures and unschedulable vessels are not errors;
/// they are reported as warnings in the `ScheduleResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested strategy name is not known.
    UnknownStrategy {
        /// The name that was requested.
        name: String,
    },
    /// The scheduler policy is not usable.
    InvalidPolicy {
        /// Description of the problem.
        reason: String,
    },
    /// A vessel state transition that the state machine does not allow.
    InvalidStateTransition {
        /// The vessel being scheduled.
        vessel_id: String,
        /// The current state.
        from: VesselState,
        /// The requested state.
        to: VesselState,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl CoreError {
    /// Returns whether this error stems from caller configuration.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownStrategy { .. } | Self::InvalidPolicy { .. })
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { name } => {
                write!(f, "Configuration error: unknown scheduling strategy '{name}'")
            }
            Self::InvalidPolicy { reason } => {
                write!(f, "Configuration error: invalid scheduler policy: {reason}")
            }
            Self::InvalidStateTransition {
                vessel_id,
                from,
                to,
            } => {
                write!(
                    f,
                    "Vessel '{vessel_id}' cannot move from state {from} to state {to}"
                )
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
