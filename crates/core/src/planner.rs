// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Window and crane-count search for one vessel at one dock.
//!
//! ## Search Order
//!
//! 1. Deadline pass: the window must end at or before departure.
//!    Single-crane first; more cranes are only tried when no single-crane
//!    window fits. With `prefer_multi_crane` the largest crane count that
//!    fits at the earliest start is taken instead.
//! 2. Relaxed pass: the earliest start after arrival whose window ends
//!    within the planning horizon, fewer cranes on ties. Unless the policy
//!    fixes it, the horizon is the latest resource availability end, but
//!    at least the end of the scheduling day.
//!
//! Candidate starts are arrival plus every instant at which a resource may
//! become free: ledger release points, crane availability starts and staff
//! shift starts. Feasibility of a window only changes at those instants.

use crate::ledger::{Reservation, ResourceKey, ResourceLedger};
use crate::policy::SchedulerPolicy;
use portops_domain::{
    CraneContext, DayClock, DomainError, Minutes, StaffContext, TimeWindow, VesselContext,
};
use std::collections::BTreeSet;

/// Why no window could be found for a vessel.
///
/// Variants are ordered by planning stage: when several candidates fail,
/// the reason reported is the greatest one reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockingReason {
    /// No dock passes the compatibility matcher.
    NoCompatibleDock,
    /// No window at the dock is free and ends within the planning horizon.
    DockOccupied,
    /// The dock was free but not enough cranes were.
    NoAvailableCrane,
    /// Dock and cranes were free but not enough qualified staff were.
    NoQualifiedStaff,
}

impl BlockingReason {
    /// Returns the human-readable reason used in warnings.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoCompatibleDock => "no compatible dock",
            Self::DockOccupied => "no compatible dock free within the planning horizon",
            Self::NoAvailableCrane => "no available crane",
            Self::NoQualifiedStaff => "no qualified staff available",
        }
    }
}

impl std::fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Returns the wall-clock minutes `total` minutes of work take on `cranes` cranes.
///
/// Work is divided evenly and rounded up: `ceil(total / cranes)`. A crane
/// count of 0 is treated as 1.
#[must_use]
pub fn wall_clock_minutes(total: Minutes, cranes: usize) -> Minutes {
    let divisor: Minutes = Minutes::try_from(cranes.max(1)).unwrap_or(Minutes::MAX);
    total.saturating_add(divisor - 1) / divisor
}

/// A crane as seen by the planner: day-relative availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraneSlot {
    key: ResourceKey,
    lifting_capacity: i64,
    availability: TimeWindow,
}

impl CraneSlot {
    /// Converts a crane context using `clock`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if the availability is empty
    /// once expressed in whole minutes.
    pub fn from_context(crane: &CraneContext, clock: &DayClock) -> Result<Self, DomainError> {
        Ok(Self {
            key: ResourceKey::crane(&crane.id),
            lifting_capacity: crane.lifting_capacity,
            availability: clock.to_window(crane.available_from, crane.available_to)?,
        })
    }

    /// Returns the crane identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.key.id()
    }

    /// Returns the ledger key of this crane.
    #[must_use]
    pub const fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Returns the availability window in day-relative minutes.
    #[must_use]
    pub const fn availability(&self) -> TimeWindow {
        self.availability
    }
}

/// A staff member as seen by the planner: day-relative shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffSlot {
    key: ResourceKey,
    skill_count: usize,
    shift: TimeWindow,
}

impl StaffSlot {
    /// Converts a staff context using `clock`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if the shift is empty once
    /// expressed in whole minutes.
    pub fn from_context(staff: &StaffContext, clock: &DayClock) -> Result<Self, DomainError> {
        Ok(Self {
            key: ResourceKey::staff(&staff.id),
            skill_count: staff.skills.len(),
            shift: clock.to_window(staff.shift_start, staff.shift_end)?,
        })
    }

    /// Returns the staff identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.key.id()
    }

    /// Returns the ledger key of this staff member.
    #[must_use]
    pub const fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Returns the shift in day-relative minutes.
    #[must_use]
    pub const fn shift(&self) -> TimeWindow {
        self.shift
    }
}

/// The cranes and qualified staff available to one run, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePool {
    cranes: Vec<CraneSlot>,
    staff: Vec<StaffSlot>,
}

impl ResourcePool {
    /// Creates a pool.
    ///
    /// Cranes are ordered by lifting capacity descending, then id. Staff are
    /// ordered by skill count ascending, then id, so that versatile staff
    /// stay available for operations that need them.
    #[must_use]
    pub fn new(mut cranes: Vec<CraneSlot>, mut staff: Vec<StaffSlot>) -> Self {
        cranes.sort_by(|a, b| {
            b.lifting_capacity
                .cmp(&a.lifting_capacity)
                .then_with(|| a.id().cmp(b.id()))
        });
        staff.sort_by(|a, b| {
            a.skill_count
                .cmp(&b.skill_count)
                .then_with(|| a.id().cmp(b.id()))
        });
        Self { cranes, staff }
    }

    /// Returns the cranes in selection order.
    #[must_use]
    pub fn cranes(&self) -> &[CraneSlot] {
        &self.cranes
    }

    /// Returns the staff in selection order.
    #[must_use]
    pub fn staff(&self) -> &[StaffSlot] {
        &self.staff
    }

    /// Returns the latest crane availability or shift end, if any.
    #[must_use]
    pub fn latest_end(&self) -> Option<Minutes> {
        self.cranes
            .iter()
            .map(|crane| crane.availability.end())
            .chain(self.staff.iter().map(|staff| staff.shift.end()))
            .max()
    }
}

/// A feasible window with its resources, not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// The vessel being handled.
    pub vessel_id: String,
    /// The dock the vessel berths at.
    pub dock_id: String,
    /// The operation window in day-relative minutes.
    pub window: TimeWindow,
    /// Assigned cranes, in selection order.
    pub crane_ids: Vec<String>,
    /// Assigned staff, in selection order.
    pub staff_ids: Vec<String>,
    /// Whether the window ends at or before the vessel's departure.
    pub meets_deadline: bool,
    /// `max(0, start - arrival)`.
    pub delay_minutes: Minutes,
}

impl OperationPlan {
    /// Returns the ledger reservations this plan needs, dock first.
    #[must_use]
    pub fn reservations(&self) -> Vec<Reservation> {
        std::iter::once(ResourceKey::dock(&self.dock_id))
            .chain(self.crane_ids.iter().map(|id| ResourceKey::crane(id)))
            .chain(self.staff_ids.iter().map(|id| ResourceKey::staff(id)))
            .map(|key| Reservation::new(key, self.window))
            .collect()
    }

    /// Returns the number of cranes assigned.
    #[must_use]
    pub fn crane_count(&self) -> usize {
        self.crane_ids.len()
    }

    /// Returns whether the work is split across more than one crane.
    #[must_use]
    pub fn multi_crane(&self) -> bool {
        self.crane_ids.len() > 1
    }

    /// Returns crane count times window duration.
    #[must_use]
    pub fn crane_minutes(&self) -> Minutes {
        let cranes: Minutes = Minutes::try_from(self.crane_ids.len()).unwrap_or(Minutes::MAX);
        cranes.saturating_mul(self.window.duration())
    }
}

/// Finds windows for vessels against a fixed pool and a shared ledger.
#[derive(Debug, Clone, Copy)]
pub struct OperationPlanner<'a> {
    pool: &'a ResourcePool,
    policy: &'a SchedulerPolicy,
    horizon: Minutes,
}

impl<'a> OperationPlanner<'a> {
    /// Creates a planner over `pool` governed by `policy`.
    #[must_use]
    pub fn new(pool: &'a ResourcePool, policy: &'a SchedulerPolicy) -> Self {
        Self {
            pool,
            policy,
            horizon: policy.effective_horizon(pool.latest_end()),
        }
    }

    /// Returns the latest minute a relaxed window may end.
    #[must_use]
    pub const fn horizon(&self) -> Minutes {
        self.horizon
    }

    /// Plans the operation of `vessel` at `dock_id`.
    ///
    /// The ledger is only read. Committing the plan is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns the furthest `BlockingReason` reached if no window fits
    /// within the planning horizon.
    pub fn plan(
        &self,
        vessel: &VesselContext,
        dock_id: &str,
        ledger: &ResourceLedger,
    ) -> Result<OperationPlan, BlockingReason> {
        if self.pool.cranes.is_empty() {
            return Err(BlockingReason::NoAvailableCrane);
        }
        if self.pool.staff.len() < self.policy.staff_per_operation {
            return Err(BlockingReason::NoQualifiedStaff);
        }

        let dock: ResourceKey = ResourceKey::dock(dock_id);
        let starts: Vec<Minutes> = self.candidate_starts(vessel, &dock, ledger);
        let mut furthest: Option<BlockingReason> = None;

        let on_time: Option<OperationPlan> = if self.policy.prefer_multi_crane {
            self.deadline_pass_multi_first(vessel, &dock, &starts, ledger, &mut furthest)
        } else {
            self.deadline_pass(vessel, &dock, &starts, ledger, &mut furthest)
        };
        if let Some(plan) = on_time {
            return Ok(plan);
        }

        if let Some(plan) = self.relaxed_pass(vessel, &dock, &starts, ledger, &mut furthest) {
            return Ok(plan);
        }

        Err(furthest.unwrap_or(BlockingReason::DockOccupied))
    }

    /// Returns the ascending, deduplicated candidate starts below the horizon.
    #[must_use]
    pub fn candidate_starts(
        &self,
        vessel: &VesselContext,
        dock: &ResourceKey,
        ledger: &ResourceLedger,
    ) -> Vec<Minutes> {
        let from: Minutes = vessel.arrival;
        let mut points: BTreeSet<Minutes> = BTreeSet::new();
        points.insert(from);
        points.extend(ledger.release_points_from(dock, from));

        for crane in &self.pool.cranes {
            points.extend(ledger.release_points_from(&crane.key, from));
            if crane.availability.start() >= from {
                points.insert(crane.availability.start());
            }
        }
        for staff in &self.pool.staff {
            points.extend(ledger.release_points_from(&staff.key, from));
            if staff.shift.start() >= from {
                points.insert(staff.shift.start());
            }
        }

        points
            .into_iter()
            .filter(|start| *start < self.horizon)
            .collect()
    }

    fn max_cranes(&self) -> usize {
        self.policy.max_cranes_per_vessel.min(self.pool.cranes.len())
    }

    fn deadline_pass(
        &self,
        vessel: &VesselContext,
        dock: &ResourceKey,
        starts: &[Minutes],
        ledger: &ResourceLedger,
        furthest: &mut Option<BlockingReason>,
    ) -> Option<OperationPlan> {
        for crane_count in 1..=self.max_cranes() {
            let wall: Minutes = wall_clock_minutes(vessel.total_duration(), crane_count);
            for start in starts {
                if start.saturating_add(wall) > vessel.departure {
                    break;
                }
                if let Some(plan) =
                    self.attempt(vessel, dock, *start, crane_count, ledger, furthest)
                {
                    return Some(plan);
                }
            }
        }
        None
    }

    fn deadline_pass_multi_first(
        &self,
        vessel: &VesselContext,
        dock: &ResourceKey,
        starts: &[Minutes],
        ledger: &ResourceLedger,
        furthest: &mut Option<BlockingReason>,
    ) -> Option<OperationPlan> {
        for start in starts {
            for crane_count in (1..=self.max_cranes()).rev() {
                let wall: Minutes = wall_clock_minutes(vessel.total_duration(), crane_count);
                if start.saturating_add(wall) > vessel.departure {
                    continue;
                }
                if let Some(plan) =
                    self.attempt(vessel, dock, *start, crane_count, ledger, furthest)
                {
                    return Some(plan);
                }
            }
        }
        None
    }

    fn relaxed_pass(
        &self,
        vessel: &VesselContext,
        dock: &ResourceKey,
        starts: &[Minutes],
        ledger: &ResourceLedger,
        furthest: &mut Option<BlockingReason>,
    ) -> Option<OperationPlan> {
        for start in starts {
            for crane_count in 1..=self.max_cranes() {
                let wall: Minutes = wall_clock_minutes(vessel.total_duration(), crane_count);
                if start.saturating_add(wall) > self.horizon {
                    continue;
                }
                if let Some(plan) =
                    self.attempt(vessel, dock, *start, crane_count, ledger, furthest)
                {
                    return Some(plan);
                }
            }
        }
        None
    }

    fn attempt(
        &self,
        vessel: &VesselContext,
        dock: &ResourceKey,
        start: Minutes,
        crane_count: usize,
        ledger: &ResourceLedger,
        furthest: &mut Option<BlockingReason>,
    ) -> Option<OperationPlan> {
        let wall: Minutes = wall_clock_minutes(vessel.total_duration(), crane_count);
        let window: TimeWindow = TimeWindow::starting_at(start, wall).ok()?;

        match self.assign(dock, window, crane_count, ledger) {
            Ok((crane_ids, staff_ids)) => Some(OperationPlan {
                vessel_id: vessel.id.clone(),
                dock_id: dock.id().to_string(),
                window,
                crane_ids,
                staff_ids,
                meets_deadline: window.end() <= vessel.departure,
                delay_minutes: (window.start() - vessel.arrival).max(0),
            }),
            Err(reason) => {
                *furthest = Some(furthest.map_or(reason, |current| current.max(reason)));
                None
            }
        }
    }

    fn assign(
        &self,
        dock: &ResourceKey,
        window: TimeWindow,
        crane_count: usize,
        ledger: &ResourceLedger,
    ) -> Result<(Vec<String>, Vec<String>), BlockingReason> {
        if !ledger.is_free(dock, &window) {
            return Err(BlockingReason::DockOccupied);
        }

        let crane_ids: Vec<String> = self
            .pool
            .cranes
            .iter()
            .filter(|crane| {
                crane.availability.contains(&window) && ledger.is_free(&crane.key, &window)
            })
            .take(crane_count)
            .map(|crane| crane.id().to_string())
            .collect();
        if crane_ids.len() < crane_count {
            return Err(BlockingReason::NoAvailableCrane);
        }

        let staff_ids: Vec<String> = self
            .pool
            .staff
            .iter()
            .filter(|staff| staff.shift.contains(&window) && ledger.is_free(&staff.key, &window))
            .take(self.policy.staff_per_operation)
            .map(|staff| staff.id().to_string())
            .collect();
        if staff_ids.len() < self.policy.staff_per_operation {
            return Err(BlockingReason::NoQualifiedStaff);
        }

        Ok((crane_ids, staff_ids))
    }
}
