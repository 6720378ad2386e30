// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::time_window::{MINUTES_PER_DAY, Minutes};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use time::PrimitiveDateTime;

/// The timing facts about one ship's visit needed to plan its operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VesselContext {
    /// Identifier, unique within one scheduling run.
    pub id: String,
    /// Reference into the vessel-type registry snapshot.
    pub vessel_type_id: String,
    /// Requested arrival, in minutes from midnight of the scheduling date.
    pub arrival: Minutes,
    /// Requested departure, in minutes from midnight of the scheduling date.
    pub departure: Minutes,
    /// Unload work in minutes.
    pub unload_minutes: Minutes,
    /// Load work in minutes.
    pub load_minutes: Minutes,
}

impl VesselContext {
    /// Creates a new vessel context from minute offsets.
    ///
    /// No validation happens here; see [`crate::validate_vessel`].
    #[must_use]
    pub fn new(
        id: &str,
        vessel_type_id: &str,
        arrival: Minutes,
        departure: Minutes,
        unload_minutes: Minutes,
        load_minutes: Minutes,
    ) -> Self {
        Self {
            id: id.to_string(),
            vessel_type_id: vessel_type_id.to_string(),
            arrival,
            departure,
            unload_minutes,
            load_minutes,
        }
    }

    /// Creates a vessel context from whole hours.
    #[must_use]
    pub fn from_hours(
        id: &str,
        vessel_type_id: &str,
        arrival_hour: i64,
        departure_hour: i64,
        unload_hours: i64,
        load_hours: i64,
    ) -> Self {
        Self::new(
            id,
            vessel_type_id,
            arrival_hour.saturating_mul(60),
            departure_hour.saturating_mul(60),
            unload_hours.saturating_mul(60),
            load_hours.saturating_mul(60),
        )
    }

    /// Returns the combined unload and load work in minutes.
    #[must_use]
    pub const fn total_duration(&self) -> Minutes {
        self.unload_minutes.saturating_add(self.load_minutes)
    }

    /// Returns whether both offsets fall inside the scheduling day.
    #[must_use]
    pub const fn is_within_day(&self) -> bool {
        self.arrival >= 0
            && self.arrival <= MINUTES_PER_DAY
            && self.departure >= 0
            && self.departure <= MINUTES_PER_DAY
    }
}

/// A crane and the window in which it can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CraneContext {
    /// Identifier, unique within one scheduling run.
    pub id: String,
    /// Start of availability (inclusive).
    pub available_from: PrimitiveDateTime,
    /// End of availability (exclusive).
    pub available_to: PrimitiveDateTime,
    /// Lifting capacity in an abstract unit. Must be positive.
    pub lifting_capacity: i64,
}

impl CraneContext {
    /// Creates a new crane context.
    #[must_use]
    pub fn new(
        id: &str,
        available_from: PrimitiveDateTime,
        available_to: PrimitiveDateTime,
        lifting_capacity: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            available_from,
            available_to,
            lifting_capacity,
        }
    }
}

/// A set of skill codes.
///
/// Set semantics: order is irrelevant and duplicates collapse. Codes are
/// trimmed and blank codes are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    codes: BTreeSet<String>,
}

impl SkillSet {
    /// Creates an empty skill set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            codes: BTreeSet::new(),
        }
    }

    /// Returns whether the set contains `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code.trim())
    }

    /// Returns whether every code of `required` is also in this set.
    #[must_use]
    pub fn is_superset_of(&self, required: &Self) -> bool {
        self.codes.is_superset(&required.codes)
    }

    /// Returns the number of distinct codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates the codes in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|code| code.as_ref().trim().to_string())
                .filter(|code| !code.is_empty())
                .collect(),
        }
    }
}

/// A staff member, their skills and their shift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffContext {
    /// Identifier, unique within one scheduling run.
    pub id: String,
    /// Skill codes held by this staff member.
    pub skills: SkillSet,
    /// Start of the shift (inclusive).
    pub shift_start: PrimitiveDateTime,
    /// End of the shift (exclusive).
    pub shift_end: PrimitiveDateTime,
}

impl StaffContext {
    /// Creates a new staff context.
    #[must_use]
    pub fn new(
        id: &str,
        skills: SkillSet,
        shift_start: PrimitiveDateTime,
        shift_end: PrimitiveDateTime,
    ) -> Self {
        Self {
            id: id.to_string(),
            skills,
            shift_start,
            shift_end,
        }
    }
}

/// Physical constraints of a vessel type, from the vessel-type registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselType {
    /// Vessel type identifier.
    pub id: String,
    /// Maximum draft in metres.
    pub draft: f64,
    /// Overall length in metres.
    pub length: f64,
}

impl VesselType {
    /// Creates a new vessel type.
    #[must_use]
    pub fn new(id: &str, draft: f64, length: f64) -> Self {
        Self {
            id: id.to_string(),
            draft,
            length,
        }
    }
}

/// A dock snapshot from the dock registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dock {
    /// Dock identifier.
    pub id: String,
    /// Maximum vessel draft in metres.
    pub max_draft: f64,
    /// Maximum vessel length in metres.
    pub max_length: f64,
    /// Water depth in metres. Informational; draft limits use `max_draft`.
    pub depth: f64,
    /// Vessel type identifiers this dock accepts.
    pub allowed_vessel_types: BTreeSet<String>,
}

impl Dock {
    /// Creates a new dock.
    #[must_use]
    pub fn new(
        id: &str,
        max_draft: f64,
        max_length: f64,
        depth: f64,
        allowed_vessel_types: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            max_draft,
            max_length,
            depth,
            allowed_vessel_types: allowed_vessel_types
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
        }
    }
}

/// How a dock with an empty allowed-vessel-type set is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmptyAllowedTypesPolicy {
    /// An empty set accepts every vessel type.
    #[default]
    AcceptAll,
    /// An empty set accepts no vessel type.
    RejectAll,
}

impl EmptyAllowedTypesPolicy {
    /// Converts this policy to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AcceptAll => "accept-all",
            Self::RejectAll => "reject-all",
        }
    }
}

impl std::fmt::Display for EmptyAllowedTypesPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmptyAllowedTypesPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept-all" => Ok(Self::AcceptAll),
            "reject-all" => Ok(Self::RejectAll),
            _ => Err(format!(
                "Unknown empty allowed-types policy '{s}'. Must be 'accept-all' or 'reject-all'"
            )),
        }
    }
}

/// Read-only registry data supplied with each scheduling call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrySnapshot {
    vessel_types: BTreeMap<String, VesselType>,
    duplicate_vessel_type_ids: Vec<String>,
    docks: Vec<Dock>,
}

impl RegistrySnapshot {
    /// Creates a snapshot from vessel types and docks.
    ///
    /// The first vessel type with a given identifier is kept; the ids of
    /// later duplicates are available from [`Self::duplicate_vessel_type_ids`].
    #[must_use]
    pub fn new(vessel_types: Vec<VesselType>, docks: Vec<Dock>) -> Self {
        let mut by_id: BTreeMap<String, VesselType> = BTreeMap::new();
        let mut duplicate_vessel_type_ids: Vec<String> = Vec::new();
        for vessel_type in vessel_types {
            if by_id.contains_key(&vessel_type.id) {
                duplicate_vessel_type_ids.push(vessel_type.id);
            } else {
                by_id.insert(vessel_type.id.clone(), vessel_type);
            }
        }

        Self {
            vessel_types: by_id,
            duplicate_vessel_type_ids,
            docks,
        }
    }

    /// Returns the identifiers of vessel types dropped as duplicates, in input order.
    #[must_use]
    pub fn duplicate_vessel_type_ids(&self) -> &[String] {
        &self.duplicate_vessel_type_ids
    }

    /// Looks up a vessel type by identifier.
    #[must_use]
    pub fn vessel_type(&self, id: &str) -> Option<&VesselType> {
        self.vessel_types.get(id)
    }

    /// Returns all vessel types ordered by identifier.
    pub fn vessel_types(&self) -> impl Iterator<Item = &VesselType> {
        self.vessel_types.values()
    }

    /// Returns the docks in registry order.
    #[must_use]
    pub fn docks(&self) -> &[Dock] {
        &self.docks
    }
}
