// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vessel processing order.
//!
//! The engine is greedy: vessels are handled one at a time and earlier
//! vessels get first claim on scarce resources. A strategy only decides the
//! order. Every ordering ends with the vessel identifier so that identical
//! input always produces an identical schedule.

use crate::error::CoreError;
use portops_domain::VesselContext;
use std::cmp::Ordering;
use std::str::FromStr;

/// Interchangeable vessel ordering policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Ascending arrival, ties by vessel identifier.
    #[default]
    GreedyEarliestArrival,
    /// Ascending departure, then arrival, then vessel identifier.
    EarliestDepartureFirst,
}

impl Strategy {
    /// Every known strategy, default first.
    pub const ALL: [Self; 2] = [Self::GreedyEarliestArrival, Self::EarliestDepartureFirst];

    /// Converts this strategy to the name used on the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GreedyEarliestArrival => "greedy-earliest-arrival",
            Self::EarliestDepartureFirst => "earliest-departure-first",
        }
    }

    /// Resolves an optional strategy name, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownStrategy` for a name that is not known.
    pub fn resolve(name: Option<&str>) -> Result<Self, CoreError> {
        name.map_or_else(|| Ok(Self::default()), Self::from_str)
    }

    /// Sorts vessels into processing order.
    pub fn order(&self, vessels: &mut [&VesselContext]) {
        vessels.sort_by(|a, b| self.compare(a, b));
    }

    /// Compares two vessels under this strategy.
    #[must_use]
    pub fn compare(&self, a: &VesselContext, b: &VesselContext) -> Ordering {
        match self {
            Self::GreedyEarliestArrival => a.arrival.cmp(&b.arrival).then_with(|| a.id.cmp(&b.id)),
            Self::EarliestDepartureFirst => a
                .departure
                .cmp(&b.departure)
                .then_with(|| a.arrival.cmp(&b.arrival))
                .then_with(|| a.id.cmp(&b.id)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy-earliest-arrival" => Ok(Self::GreedyEarliestArrival),
            "earliest-departure-first" => Ok(Self::EarliestDepartureFirst),
            _ => Err(CoreError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
