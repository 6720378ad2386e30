// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::ScheduleOutcome;
use crate::error::CoreError;
use crate::planner::OperationPlan;
use crate::strategy::Strategy;
use num_traits::ToPrimitive;
use portops_domain::{DayClock, Minutes};
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

/// One committed vessel operation with absolute times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledOperation {
    /// The vessel handled.
    pub vessel_id: String,
    /// The dock used.
    pub dock_id: Option<String>,
    /// Assigned cranes, in selection order.
    pub crane_ids: Vec<String>,
    /// Assigned staff, in selection order.
    pub staff_ids: Vec<String>,
    /// Operation start (inclusive).
    pub start: PrimitiveDateTime,
    /// Operation end (exclusive).
    pub end: PrimitiveDateTime,
    /// Minutes between arrival and start.
    pub delay_minutes: Minutes,
    /// Whether more than one crane works the vessel.
    pub multi_crane: bool,
}

/// The full output of a scheduling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// The scheduling date.
    pub date: Date,
    /// Name of the strategy actually used.
    pub algorithm: String,
    /// Sum of `delay_minutes` over all operations.
    pub total_delay_minutes: Minutes,
    /// Sum over operations of crane count times duration, in hours.
    pub crane_hours_used: f64,
    /// Operations ordered by start, then dock, then vessel.
    pub operations: Vec<ScheduledOperation>,
    /// Rejected records, unschedulable vessels and late operations.
    pub warnings: Vec<String>,
}

impl ScheduleResult {
    /// Returns the operation of `vessel_id`, if it was scheduled.
    #[must_use]
    pub fn operation(&self, vessel_id: &str) -> Option<&ScheduledOperation> {
        self.operations.iter().find(|op| op.vessel_id == vessel_id)
    }
}

/// Projects a run's outcome into a `ScheduleResult`.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if an operation time cannot be
/// represented as an absolute timestamp.
pub fn assemble(
    clock: &DayClock,
    strategy: Strategy,
    outcome: ScheduleOutcome,
) -> Result<ScheduleResult, CoreError> {
    let total_delay_minutes: Minutes = outcome
        .scheduled
        .iter()
        .map(|plan| plan.delay_minutes)
        .sum();
    let crane_minutes: Minutes = outcome
        .scheduled
        .iter()
        .map(OperationPlan::crane_minutes)
        .sum();
    let crane_hours_used: f64 = crane_minutes.to_f64().unwrap_or(f64::MAX) / 60.0;

    let mut operations: Vec<ScheduledOperation> = outcome
        .scheduled
        .into_iter()
        .map(|plan| project(clock, plan))
        .collect::<Result<_, _>>()?;
    operations.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.dock_id.cmp(&b.dock_id))
            .then_with(|| a.vessel_id.cmp(&b.vessel_id))
    });

    Ok(ScheduleResult {
        date: clock.date(),
        algorithm: strategy.as_str().to_string(),
        total_delay_minutes,
        crane_hours_used,
        operations,
        warnings: outcome.warnings,
    })
}

fn project(clock: &DayClock, plan: OperationPlan) -> Result<ScheduledOperation, CoreError> {
    let multi_crane: bool = plan.multi_crane();
    Ok(ScheduledOperation {
        start: clock.to_datetime(plan.window.start())?,
        end: clock.to_datetime(plan.window.end())?,
        vessel_id: plan.vessel_id,
        dock_id: Some(plan.dock_id),
        crane_ids: plan.crane_ids,
        staff_ids: plan.staff_ids,
        delay_minutes: plan.delay_minutes,
        multi_crane,
    })
}
