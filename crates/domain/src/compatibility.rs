// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Physical and skill compatibility predicates.
//!
//! ## Rules
//!
//! A dock accepts a vessel when:
//! 1. The vessel type's draft does not exceed the dock's maximum draft
//! 2. The vessel type's length does not exceed the dock's maximum length
//! 3. The vessel type is in the dock's allowed set, or the set is empty and
//!    the [`EmptyAllowedTypesPolicy`] is `AcceptAll`
//!
//! A staff member qualifies when their skills are a superset of the
//! required skills.

use crate::types::{
    Dock, EmptyAllowedTypesPolicy, RegistrySnapshot, SkillSet, StaffContext, VesselType,
};

/// Returns whether `dock` can berth a vessel of `vessel_type`.
#[must_use]
pub fn dock_accepts(
    dock: &Dock,
    vessel_type: &VesselType,
    empty_allowed_types: EmptyAllowedTypesPolicy,
) -> bool {
    if vessel_type.draft > dock.max_draft || vessel_type.length > dock.max_length {
        return false;
    }

    if dock.allowed_vessel_types.is_empty() {
        return empty_allowed_types == EmptyAllowedTypesPolicy::AcceptAll;
    }

    dock.allowed_vessel_types.contains(&vessel_type.id)
}

/// Returns whether `staff` holds every skill in `required`.
#[must_use]
pub fn staff_qualifies(staff: &StaffContext, required: &SkillSet) -> bool {
    staff.skills.is_superset_of(required)
}

/// Returns the spare draft a dock leaves for a vessel type.
///
/// Negative when the vessel does not fit.
#[must_use]
pub fn draft_surplus(dock: &Dock, vessel_type: &VesselType) -> f64 {
    dock.max_draft - vessel_type.draft
}

/// Returns the docks that accept `vessel_type`, tightest draft fit first.
///
/// Ties on draft surplus are broken by dock identifier so the order is
/// deterministic.
#[must_use]
pub fn rank_compatible_docks<'a>(
    registry: &'a RegistrySnapshot,
    vessel_type: &VesselType,
    empty_allowed_types: EmptyAllowedTypesPolicy,
) -> Vec<&'a Dock> {
    let mut docks: Vec<&Dock> = registry
        .docks()
        .iter()
        .filter(|dock| dock_accepts(dock, vessel_type, empty_allowed_types))
        .collect();

    docks.sort_by(|a, b| {
        draft_surplus(a, vessel_type)
            .total_cmp(&draft_surplus(b, vessel_type))
            .then_with(|| a.id.cmp(&b.id))
    });

    docks
}
