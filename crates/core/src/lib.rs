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

mod assembler;
mod engine;
mod error;
mod ledger;
mod planner;
mod policy;
mod state;
mod strategy;

#[cfg(test)]
mod tests;

use portops_domain::{CraneContext, DayClock, RegistrySnapshot, StaffContext, VesselContext};
use time::Date;
use tracing::info;

// Re-export public types and functions
pub use assembler::{ScheduleResult, ScheduledOperation, assemble};
pub use engine::{ScheduleOutcome, Scheduler, VesselOutcome};
pub use error::CoreError;
pub use ledger::{ConflictError, Reservation, ResourceKey, ResourceKind, ResourceLedger};
pub use planner::{
    BlockingReason, CraneSlot, OperationPlan, OperationPlanner, ResourcePool, StaffSlot,
    wall_clock_minutes,
};
pub use policy::{MAX_HORIZON_MINUTES, SchedulerPolicy};
pub use state::VesselState;
pub use strategy::Strategy;

/// Computes the operations schedule for one day.
///
/// Each call is a pure function of its arguments: a fresh ledger is
/// created and dropped within the call.
///
/// # Arguments
///
/// * `date` - The scheduling date; vessel offsets are minutes from its midnight
/// * `strategy` - Strategy name, `greedy-earliest-arrival` when `None`
/// * `vessels` - Vessels expected on `date`
/// * `cranes` - Cranes with their availability
/// * `staff` - Staff with skills and shifts
/// * `registry` - Vessel types and docks
/// * `policy` - Scheduler policy
///
/// # Returns
///
/// The schedule. Invalid records and unschedulable vessels are reported in
/// its warnings rather than as errors.
///
/// # Errors
///
/// Returns an error if:
/// - The strategy name is unknown
/// - The policy is invalid
/// - The state machine rejects a transition
pub fn compute_daily_schedule(
    date: Date,
    strategy: Option<&str>,
    vessels: &[VesselContext],
    cranes: &[CraneContext],
    staff: &[StaffContext],
    registry: &RegistrySnapshot,
    policy: &SchedulerPolicy,
) -> Result<ScheduleResult, CoreError> {
    let strategy: Strategy = Strategy::resolve(strategy)?;
    policy.validate()?;

    info!(
        %date,
        %strategy,
        vessels = vessels.len(),
        cranes = cranes.len(),
        staff = staff.len(),
        docks = registry.docks().len(),
        "Computing daily schedule"
    );

    let scheduler: Scheduler<'_> = Scheduler::new(date, strategy, registry, policy);
    let outcome: ScheduleOutcome = scheduler.run(vessels, cranes, staff)?;
    let result: ScheduleResult = assemble(&DayClock::new(date), strategy, outcome)?;

    info!(
        %date,
        scheduled = result.operations.len(),
        warnings = result.warnings.len(),
        total_delay_minutes = result.total_delay_minutes,
        crane_hours_used = result.crane_hours_used,
        "Daily schedule computed"
    );

    Ok(result)
}
