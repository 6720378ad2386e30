// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::parse::RequestParseError;
use portops::CoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The requested strategy or scheduler policy is not usable.
    Configuration {
        /// A human-readable description of the problem.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns a short machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::Configuration { .. } => "configuration",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Configuration { message } => {
                write!(f, "Configuration error: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RequestParseError> for ApiError {
    fn from(err: RequestParseError) -> Self {
        match err.field() {
            Some(field) => Self::InvalidInput {
                field: field.to_string(),
                message: err.to_string(),
            },
            None => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
/// Per-record validation failures never reach this point: the scheduler turns
/// them into warnings. A `DomainViolation` surfacing here means a computed
/// time could not be represented, which is an internal failure.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::UnknownStrategy { .. } | CoreError::InvalidPolicy { .. } => {
            ApiError::Configuration {
                message: err.to_string(),
            }
        }
        CoreError::InvalidStateTransition { .. } | CoreError::DomainViolation(_) => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}
