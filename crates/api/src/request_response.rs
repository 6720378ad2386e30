// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// A vessel expected on the scheduling date.
///
/// Hours are offsets from midnight of the scheduling date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselInfo {
    /// The vessel identifier.
    pub id: String,
    /// The vessel type identifier.
    pub vessel_type_id: String,
    /// Requested arrival hour (0-24).
    pub arrival_hour: i64,
    /// Requested departure hour (0-24).
    pub departure_hour: i64,
    /// Unload work in hours.
    pub unload_hours: i64,
    /// Load work in hours.
    pub load_hours: i64,
}

/// A crane and its availability window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraneInfo {
    /// The crane identifier.
    pub id: String,
    /// Start of availability, `YYYY-MM-DDTHH:MM[:SS]`.
    pub available_from: String,
    /// End of availability, `YYYY-MM-DDTHH:MM[:SS]`.
    pub available_to: String,
    /// Lifting capacity.
    pub lifting_capacity: i64,
}

/// A staff member with skills and shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffInfo {
    /// The staff identifier.
    pub id: String,
    /// Skill codes.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Shift start, `YYYY-MM-DDTHH:MM[:SS]`.
    pub shift_start: String,
    /// Shift end, `YYYY-MM-DDTHH:MM[:SS]`.
    pub shift_end: String,
}

/// Physical constraints of a vessel type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselTypeInfo {
    /// The vessel type identifier.
    pub id: String,
    /// Draft in metres.
    pub draft: f64,
    /// Length in metres.
    pub length: f64,
}

/// A dock snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockInfo {
    /// The dock identifier.
    pub id: String,
    /// Maximum draft in metres.
    pub max_draft: f64,
    /// Maximum length in metres.
    pub max_length: f64,
    /// Water depth in metres.
    pub depth: f64,
    /// Accepted vessel type identifiers.
    #[serde(default)]
    pub allowed_vessel_types: Vec<String>,
}

/// API request to compute the schedule for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeScheduleRequest {
    /// The scheduling date, `YYYY-MM-DD`.
    pub date: String,
    /// Strategy name. The default strategy is used when absent.
    #[serde(default)]
    pub strategy: Option<String>,
    /// Vessels expected on the date.
    #[serde(default)]
    pub vessels: Vec<VesselInfo>,
    /// Cranes with availability.
    #[serde(default)]
    pub cranes: Vec<CraneInfo>,
    /// Staff with skills and shifts.
    #[serde(default)]
    pub staff: Vec<StaffInfo>,
    /// Vessel type registry snapshot.
    #[serde(default)]
    pub vessel_types: Vec<VesselTypeInfo>,
    /// Dock registry snapshot.
    #[serde(default)]
    pub docks: Vec<DockInfo>,
}

/// One scheduled operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledOperationInfo {
    /// The vessel identifier.
    pub vessel_id: String,
    /// The assigned dock.
    pub dock_id: Option<String>,
    /// Assigned cranes.
    pub crane_ids: Vec<String>,
    /// Assigned staff.
    pub staff_ids: Vec<String>,
    /// Start, `YYYY-MM-DDTHH:MM:SS`.
    pub start: String,
    /// End, `YYYY-MM-DDTHH:MM:SS`.
    pub end: String,
    /// Minutes between arrival and start.
    pub delay_minutes: i64,
    /// Whether more than one crane works the vessel.
    pub multi_crane: bool,
}

/// API response for a computed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeScheduleResponse {
    /// The scheduling date, `YYYY-MM-DD`.
    pub date: String,
    /// The strategy actually used.
    pub algorithm: String,
    /// Sum of all delays in minutes.
    pub total_delay_minutes: i64,
    /// Crane-hours consumed.
    pub crane_hours_used: f64,
    /// Scheduled operations.
    pub operations: Vec<ScheduledOperationInfo>,
    /// Warnings about rejected records and vessels that could not be placed.
    pub warnings: Vec<String>,
}

/// API response listing the known strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyListResponse {
    /// Strategy names.
    pub strategies: Vec<String>,
    /// The strategy used when none is requested.
    pub default: String,
}
