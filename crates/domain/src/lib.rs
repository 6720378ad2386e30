// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod compatibility;
mod error;
mod time_window;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use compatibility::{dock_accepts, draft_surplus, rank_compatible_docks, staff_qualifies};
pub use error::DomainError;
pub use time_window::{DayClock, MINUTES_PER_DAY, Minutes, TimeWindow, contains, overlaps, shift};

// Re-export public types
pub use types::{
    CraneContext, Dock, EmptyAllowedTypesPolicy, RegistrySnapshot, SkillSet, StaffContext,
    VesselContext, VesselType,
};
pub use validation::{
    validate_crane, validate_dock, validate_id_unique, validate_staff, validate_vessel,
    validate_vessel_type,
};
