// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use portops_domain::{EmptyAllowedTypesPolicy, MINUTES_PER_DAY, Minutes, SkillSet};

/// Longest planning horizon accepted, in minutes (one week).
pub const MAX_HORIZON_MINUTES: Minutes = 7 * MINUTES_PER_DAY;

/// Tunable rules applied by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerPolicy {
    /// Qualified staff required per operation. Must be at least 1.
    pub staff_per_operation: usize,
    /// Skills every assigned staff member must hold.
    pub required_skills: SkillSet,
    /// Largest number of cranes one vessel may be split across. Must be at least 1.
    pub max_cranes_per_vessel: usize,
    /// Split across cranes whenever more than one is free, not only when
    /// a single crane would miss the departure.
    pub prefer_multi_crane: bool,
    /// Treatment of docks with an empty allowed-vessel-type set.
    pub empty_allowed_types: EmptyAllowedTypesPolicy,
    /// Latest minute (from midnight of the scheduling date) an operation may
    /// end when the departure constraint has to be relaxed.
    ///
    /// `None` derives the horizon from the supplied resources: the latest
    /// crane availability or shift end, but never before midnight at the end
    /// of the scheduling day and never past [`MAX_HORIZON_MINUTES`].
    pub horizon_minutes: Option<Minutes>,
}

impl Default for SchedulerPolicy {
    fn default() -> Self {
        Self {
            staff_per_operation: 1,
            required_skills: SkillSet::new(),
            max_cranes_per_vessel: 2,
            prefer_multi_crane: false,
            empty_allowed_types: EmptyAllowedTypesPolicy::AcceptAll,
            horizon_minutes: None,
        }
    }
}

impl SchedulerPolicy {
    /// Checks that the policy can be used for a run.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPolicy` if:
    /// - `staff_per_operation` is 0
    /// - `max_cranes_per_vessel` is 0
    /// - an explicit `horizon_minutes` is not positive or exceeds [`MAX_HORIZON_MINUTES`]
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.staff_per_operation == 0 {
            return Err(CoreError::InvalidPolicy {
                reason: String::from("staff per operation must be at least 1"),
            });
        }

        if self.max_cranes_per_vessel == 0 {
            return Err(CoreError::InvalidPolicy {
                reason: String::from("max cranes per vessel must be at least 1"),
            });
        }

        if let Some(horizon) = self.horizon_minutes
            && !(1..=MAX_HORIZON_MINUTES).contains(&horizon)
        {
            return Err(CoreError::InvalidPolicy {
                reason: format!(
                    "horizon must be between 1 and {MAX_HORIZON_MINUTES} minutes, got {horizon}"
                ),
            });
        }

        Ok(())
    }

    /// Returns the horizon for a run whose resources are available until
    /// `latest_resource_end`.
    #[must_use]
    pub fn effective_horizon(&self, latest_resource_end: Option<Minutes>) -> Minutes {
        self.horizon_minutes.unwrap_or_else(|| {
            latest_resource_end
                .unwrap_or(MINUTES_PER_DAY)
                .clamp(MINUTES_PER_DAY, MAX_HORIZON_MINUTES)
        })
    }
}
