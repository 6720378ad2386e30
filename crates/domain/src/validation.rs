// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CraneContext, Dock, RegistrySnapshot, StaffContext, VesselContext, VesselType};
use std::collections::HashSet;

/// Validates a vessel context against its own invariants and the registry.
///
/// # Arguments
///
/// * `vessel` - The vessel to validate
/// * `registry` - The registry snapshot used to resolve the vessel type
///
/// # Errors
///
/// Returns an error if:
/// - The identifier is empty
/// - The unload or load duration is negative
/// - Arrival or departure lies outside the scheduling day
/// - The vessel arrives after it departs
/// - There is no unload or load work at all
/// - The vessel type is not in the registry snapshot
pub fn validate_vessel(
    vessel: &VesselContext,
    registry: &RegistrySnapshot,
) -> Result<(), DomainError> {
    if vessel.id.trim().is_empty() {
        return Err(DomainError::EmptyIdentifier { kind: "vessel" });
    }

    // Rule: durations are non-negative
    if vessel.unload_minutes < 0 {
        return Err(DomainError::NegativeDuration {
            vessel_id: vessel.id.clone(),
            field: "unload duration",
            value: vessel.unload_minutes,
        });
    }
    if vessel.load_minutes < 0 {
        return Err(DomainError::NegativeDuration {
            vessel_id: vessel.id.clone(),
            field: "load duration",
            value: vessel.load_minutes,
        });
    }

    // Rule: offsets are within the scheduling day
    if !vessel.is_within_day() {
        let (field, value) = if (0..=crate::MINUTES_PER_DAY).contains(&vessel.arrival) {
            ("departure", vessel.departure)
        } else {
            ("arrival", vessel.arrival)
        };
        return Err(DomainError::OffsetOutOfDay {
            vessel_id: vessel.id.clone(),
            field,
            value,
        });
    }

    // Rule: arrival <= departure
    if vessel.arrival > vessel.departure {
        return Err(DomainError::ArrivalAfterDeparture {
            vessel_id: vessel.id.clone(),
            arrival: vessel.arrival,
            departure: vessel.departure,
        });
    }

    if vessel.total_duration() == 0 {
        return Err(DomainError::ZeroDuration {
            vessel_id: vessel.id.clone(),
        });
    }

    if registry.vessel_type(&vessel.vessel_type_id).is_none() {
        return Err(DomainError::UnknownVesselType {
            vessel_id: vessel.id.clone(),
            vessel_type_id: vessel.vessel_type_id.clone(),
        });
    }

    Ok(())
}

/// Validates a crane context.
///
/// # Errors
///
/// Returns an error if:
/// - The identifier is empty
/// - The lifting capacity is not positive
/// - The availability window does not end after it starts
pub fn validate_crane(crane: &CraneContext) -> Result<(), DomainError> {
    if crane.id.trim().is_empty() {
        return Err(DomainError::EmptyIdentifier { kind: "crane" });
    }

    if crane.lifting_capacity <= 0 {
        return Err(DomainError::InvalidLiftingCapacity {
            crane_id: crane.id.clone(),
            capacity: crane.lifting_capacity,
        });
    }

    if crane.available_to <= crane.available_from {
        return Err(DomainError::InvalidCraneAvailability {
            crane_id: crane.id.clone(),
        });
    }

    Ok(())
}

/// Validates a staff context.
///
/// # Errors
///
/// Returns an error if the identifier is empty or the shift does not end
/// after it starts.
pub fn validate_staff(staff: &StaffContext) -> Result<(), DomainError> {
    if staff.id.trim().is_empty() {
        return Err(DomainError::EmptyIdentifier { kind: "staff" });
    }

    if staff.shift_end <= staff.shift_start {
        return Err(DomainError::InvalidShift {
            staff_id: staff.id.clone(),
        });
    }

    Ok(())
}

/// Validates a dock snapshot.
///
/// # Errors
///
/// Returns an error if the identifier is empty or a physical limit is not a
/// positive finite number.
pub fn validate_dock(dock: &Dock) -> Result<(), DomainError> {
    if dock.id.trim().is_empty() {
        return Err(DomainError::EmptyIdentifier { kind: "dock" });
    }

    for (field, value) in [
        ("max draft", dock.max_draft),
        ("max length", dock.max_length),
        ("depth", dock.depth),
    ] {
        if !is_positive_dimension(value) {
            return Err(DomainError::InvalidDimension {
                kind: "dock",
                id: dock.id.clone(),
                field,
            });
        }
    }

    Ok(())
}

/// Validates a vessel type snapshot.
///
/// # Errors
///
/// Returns an error if the identifier is empty or the draft or length is
/// not a positive finite number.
pub fn validate_vessel_type(vessel_type: &VesselType) -> Result<(), DomainError> {
    if vessel_type.id.trim().is_empty() {
        return Err(DomainError::EmptyIdentifier {
            kind: "vessel type",
        });
    }

    for (field, value) in [("draft", vessel_type.draft), ("length", vessel_type.length)] {
        if !is_positive_dimension(value) {
            return Err(DomainError::InvalidDimension {
                kind: "vessel type",
                id: vessel_type.id.clone(),
                field,
            });
        }
    }

    Ok(())
}

/// Validates that an identifier has not been seen earlier in the same list.
///
/// This function is pure; the caller owns `seen` and records accepted ids.
///
/// # Errors
///
/// Returns `DomainError::DuplicateIdentifier` if `id` is already in `seen`.
pub fn validate_id_unique(
    kind: &'static str,
    id: &str,
    seen: &HashSet<String>,
) -> Result<(), DomainError> {
    if seen.contains(id) {
        return Err(DomainError::DuplicateIdentifier {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}

fn is_positive_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
