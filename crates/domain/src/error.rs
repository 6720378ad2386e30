// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::time_window::Minutes;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time window whose end does not lie after its start.
    InvalidTimeWindow {
        /// Window start (minutes from midnight of the scheduling date).
        start: Minutes,
        /// Window end (minutes from midnight of the scheduling date).
        end: Minutes,
    },
    /// A record identifier is empty.
    EmptyIdentifier {
        /// The kind of record ("vessel", "crane", ...).
        kind: &'static str,
    },
    /// The same identifier appears more than once in one input list.
    DuplicateIdentifier {
        /// The kind of record.
        kind: &'static str,
        /// The duplicated identifier.
        id: String,
    },
    /// A vessel arrives after it departs.
    ArrivalAfterDeparture {
        /// The vessel identifier.
        vessel_id: String,
        /// Arrival offset in minutes.
        arrival: Minutes,
        /// Departure offset in minutes.
        departure: Minutes,
    },
    /// A vessel time offset falls outside the scheduling day.
    OffsetOutOfDay {
        /// The vessel identifier.
        vessel_id: String,
        /// The offending field.
        field: &'static str,
        /// The offending offset in minutes.
        value: Minutes,
    },
    /// A vessel declares a negative unload or load duration.
    NegativeDuration {
        /// The vessel identifier.
        vessel_id: String,
        /// The offending field.
        field: &'static str,
        /// The offending value in minutes.
        value: Minutes,
    },
    /// A vessel has nothing to unload or load.
    ZeroDuration {
        /// The vessel identifier.
        vessel_id: String,
    },
    /// A vessel references a vessel type that is not in the registry snapshot.
    UnknownVesselType {
        /// The vessel identifier.
        vessel_id: String,
        /// The unknown vessel type identifier.
        vessel_type_id: String,
    },
    /// A crane availability window is empty or inverted.
    InvalidCraneAvailability {
        /// The crane identifier.
        crane_id: String,
    },
    /// A crane declares a non-positive lifting capacity.
    InvalidLiftingCapacity {
        /// The crane identifier.
        crane_id: String,
        /// The declared capacity.
        capacity: i64,
    },
    /// A staff shift is empty or inverted.
    InvalidShift {
        /// The staff identifier.
        staff_id: String,
    },
    /// A physical dimension is not a positive finite number.
    InvalidDimension {
        /// The kind of record ("dock" or "vessel type").
        kind: &'static str,
        /// The record identifier.
        id: String,
        /// The offending field.
        field: &'static str,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeWindow { start, end } => {
                write!(
                    f,
                    "Invalid time window [{start}, {end}): end must lie after start"
                )
            }
            Self::EmptyIdentifier { kind } => write!(f, "A {kind} identifier cannot be empty"),
            Self::DuplicateIdentifier { kind, id } => {
                write!(f, "Duplicate {kind} identifier '{id}'")
            }
            Self::ArrivalAfterDeparture {
                vessel_id,
                arrival,
                departure,
            } => {
                write!(
                    f,
                    "Vessel '{vessel_id}' arrives at minute {arrival} but departs at minute {departure}"
                )
            }
            Self::OffsetOutOfDay {
                vessel_id,
                field,
                value,
            } => {
                write!(
                    f,
                    "Vessel '{vessel_id}' has {field} {value} outside the scheduling day (0..=1440)"
                )
            }
            Self::NegativeDuration {
                vessel_id,
                field,
                value,
            } => {
                write!(f, "Vessel '{vessel_id}' has negative {field} {value}")
            }
            Self::ZeroDuration { vessel_id } => {
                write!(f, "Vessel '{vessel_id}' has no unload or load work")
            }
            Self::UnknownVesselType {
                vessel_id,
                vessel_type_id,
            } => {
                write!(
                    f,
                    "Vessel '{vessel_id}' references unknown vessel type '{vessel_type_id}'"
                )
            }
            Self::InvalidCraneAvailability { crane_id } => {
                write!(
                    f,
                    "Crane '{crane_id}' availability must end after it starts"
                )
            }
            Self::InvalidLiftingCapacity { crane_id, capacity } => {
                write!(
                    f,
                    "Crane '{crane_id}' has invalid lifting capacity {capacity}. Must be greater than 0"
                )
            }
            Self::InvalidShift { staff_id } => {
                write!(f, "Staff member '{staff_id}' shift must end after it starts")
            }
            Self::InvalidDimension { kind, id, field } => {
                write!(f, "The {kind} '{id}' has an invalid {field}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
