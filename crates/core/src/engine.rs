// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The greedy scheduling run.
//!
//! ## Steps
//!
//! 1. Validate registry records, vessels, cranes and staff. Invalid and
//!    duplicate records become warnings and are excluded.
//! 2. Order vessels by the strategy.
//! 3. Per vessel: rank compatible docks, plan at every dock, then reserve
//!    the preferred plan as one group in the ledger.
//!
//! Plans that meet the deadline beat relaxed ones. Within each group the
//! earliest start wins, then fewer cranes, then the tighter dock.

use crate::error::CoreError;
use crate::ledger::ResourceLedger;
use crate::planner::{
    BlockingReason, CraneSlot, OperationPlan, OperationPlanner, ResourcePool, StaffSlot,
};
use crate::policy::SchedulerPolicy;
use crate::state::VesselState;
use crate::strategy::Strategy;
use portops_domain::{
    CraneContext, DayClock, Dock, DomainError, RegistrySnapshot, StaffContext, VesselContext,
    VesselType, rank_compatible_docks, staff_qualifies, validate_crane, validate_dock,
    validate_id_unique, validate_staff, validate_vessel, validate_vessel_type,
};
use std::collections::{BTreeMap, HashSet};
use time::Date;
use tracing::{debug, warn};

/// The outcome of scheduling one vessel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VesselOutcome {
    /// The plan was committed.
    Scheduled(OperationPlan),
    /// No plan could be committed.
    Unschedulable(BlockingReason),
}

/// Everything a run produced, before projection into a `ScheduleResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// Committed plans, in processing order.
    pub scheduled: Vec<OperationPlan>,
    /// Human-readable warnings, in the order they arose.
    pub warnings: Vec<String>,
    /// Final state of every validated vessel.
    pub states: BTreeMap<String, VesselState>,
}

/// One scheduling run over a registry snapshot under a policy.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler<'a> {
    clock: DayClock,
    strategy: Strategy,
    registry: &'a RegistrySnapshot,
    policy: &'a SchedulerPolicy,
}

impl<'a> Scheduler<'a> {
    /// Creates a scheduler for `date`.
    #[must_use]
    pub const fn new(
        date: Date,
        strategy: Strategy,
        registry: &'a RegistrySnapshot,
        policy: &'a SchedulerPolicy,
    ) -> Self {
        Self {
            clock: DayClock::new(date),
            strategy,
            registry,
            policy,
        }
    }

    /// Returns the strategy this scheduler orders vessels by.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Runs the schedule.
    ///
    /// The ledger is created here and dropped when the run ends.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidStateTransition` if the vessel state
    /// machine is driven into an invalid transition.
    pub fn run(
        &self,
        vessels: &[VesselContext],
        cranes: &[CraneContext],
        staff: &[StaffContext],
    ) -> Result<ScheduleOutcome, CoreError> {
        let mut outcome: ScheduleOutcome = ScheduleOutcome::default();

        let registry: RegistrySnapshot = self.sanitize_registry(&mut outcome.warnings);
        let accepted: Vec<&VesselContext> =
            Self::accept_vessels(vessels, &registry, &mut outcome.warnings);
        let pool: ResourcePool = self.build_pool(cranes, staff, &mut outcome.warnings);

        let mut ordered: Vec<&VesselContext> = accepted;
        self.strategy.order(&mut ordered);

        let planner: OperationPlanner<'_> = OperationPlanner::new(&pool, self.policy);
        debug!(horizon_minutes = planner.horizon(), "Planning horizon resolved");
        let mut ledger: ResourceLedger = ResourceLedger::new();

        for vessel in ordered {
            let mut state: VesselState = VesselState::Pending;

            match self.schedule_vessel(vessel, &registry, &planner, &mut ledger, &mut state)? {
                VesselOutcome::Scheduled(plan) => {
                    if !plan.meets_deadline {
                        let message: String = format!(
                            "Vessel '{}' is scheduled past its departure: ends at minute {}, departs at minute {}",
                            vessel.id,
                            plan.window.end(),
                            vessel.departure
                        );
                        warn!(vessel_id = %vessel.id, "{message}");
                        outcome.warnings.push(message);
                    }
                    outcome.scheduled.push(plan);
                }
                VesselOutcome::Unschedulable(reason) => {
                    let message: String =
                        format!("Vessel '{}' could not be scheduled: {reason}", vessel.id);
                    warn!(vessel_id = %vessel.id, %reason, "Vessel could not be scheduled");
                    outcome.warnings.push(message);
                }
            }

            outcome.states.insert(vessel.id.clone(), state);
        }

        debug!(
            commitments = ledger.commitment_count(),
            "Scheduling run finished"
        );

        Ok(outcome)
    }

    fn schedule_vessel(
        &self,
        vessel: &VesselContext,
        registry: &RegistrySnapshot,
        planner: &OperationPlanner<'_>,
        ledger: &mut ResourceLedger,
        state: &mut VesselState,
    ) -> Result<VesselOutcome, CoreError> {
        let docks: Vec<&Dock> = registry
            .vessel_type(&vessel.vessel_type_id)
            .map(|vessel_type: &VesselType| {
                rank_compatible_docks(registry, vessel_type, self.policy.empty_allowed_types)
            })
            .unwrap_or_default();

        if docks.is_empty() {
            state.transition(&vessel.id, VesselState::Unschedulable)?;
            return Ok(VesselOutcome::Unschedulable(BlockingReason::NoCompatibleDock));
        }

        let mut furthest: BlockingReason = BlockingReason::DockOccupied;
        let mut plans: Vec<(usize, OperationPlan)> = Vec::new();

        for (rank, dock) in docks.iter().enumerate() {
            match planner.plan(vessel, &dock.id, ledger) {
                Ok(plan) => plans.push((rank, plan)),
                Err(reason) => {
                    debug!(vessel_id = %vessel.id, dock_id = %dock.id, %reason, "No plan at dock");
                    furthest = furthest.max(reason);
                }
            }
        }

        plans.sort_by(|(rank_a, a), (rank_b, b)| {
            b.meets_deadline
                .cmp(&a.meets_deadline)
                .then_with(|| a.window.start().cmp(&b.window.start()))
                .then_with(|| a.crane_count().cmp(&b.crane_count()))
                .then_with(|| rank_a.cmp(rank_b))
        });

        for (_, plan) in plans {
            state.transition(&vessel.id, VesselState::DockSelected)?;
            debug!(
                vessel_id = %vessel.id,
                dock_id = %plan.dock_id,
                window = %plan.window,
                cranes = plan.crane_count(),
                "Selected plan"
            );

            match ledger.reserve_all(&plan.reservations()) {
                Ok(()) => {
                    state.transition(&vessel.id, VesselState::ResourcesReserved)?;
                    state.transition(&vessel.id, VesselState::Scheduled)?;
                    return Ok(VesselOutcome::Scheduled(plan));
                }
                Err(conflict) => {
                    debug!(vessel_id = %vessel.id, %conflict, "Reservation failed, trying next plan");
                    furthest = furthest.max(BlockingReason::DockOccupied);
                }
            }
        }

        state.transition(&vessel.id, VesselState::Unschedulable)?;
        Ok(VesselOutcome::Unschedulable(furthest))
    }

    /// Drops invalid or duplicate vessel types and docks.
    fn sanitize_registry(&self, warnings: &mut Vec<String>) -> RegistrySnapshot {
        for id in self.registry.duplicate_vessel_type_ids() {
            reject(
                warnings,
                "vessel type",
                &DomainError::DuplicateIdentifier {
                    kind: "vessel type",
                    id: id.clone(),
                },
            );
        }

        let vessel_types: Vec<VesselType> = self
            .registry
            .vessel_types()
            .filter(|vessel_type| match validate_vessel_type(vessel_type) {
                Ok(()) => true,
                Err(err) => {
                    reject(warnings, "vessel type", &err);
                    false
                }
            })
            .cloned()
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut docks: Vec<Dock> = Vec::new();
        for dock in self.registry.docks() {
            match validate_dock(dock).and_then(|()| validate_id_unique("dock", &dock.id, &seen)) {
                Ok(()) => {
                    seen.insert(dock.id.clone());
                    docks.push(dock.clone());
                }
                Err(err) => reject(warnings, "dock", &err),
            }
        }

        RegistrySnapshot::new(vessel_types, docks)
    }

    fn accept_vessels<'v>(
        vessels: &'v [VesselContext],
        registry: &RegistrySnapshot,
        warnings: &mut Vec<String>,
    ) -> Vec<&'v VesselContext> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut accepted: Vec<&VesselContext> = Vec::new();
        for vessel in vessels {
            match validate_vessel(vessel, registry)
                .and_then(|()| validate_id_unique("vessel", &vessel.id, &seen))
            {
                Ok(()) => {
                    seen.insert(vessel.id.clone());
                    accepted.push(vessel);
                }
                Err(err) => reject(warnings, "vessel", &err),
            }
        }
        accepted
    }

    fn build_pool(
        &self,
        cranes: &[CraneContext],
        staff: &[StaffContext],
        warnings: &mut Vec<String>,
    ) -> ResourcePool {
        let mut seen: HashSet<String> = HashSet::new();
        let mut crane_slots: Vec<CraneSlot> = Vec::new();
        for crane in cranes {
            let slot: Result<CraneSlot, DomainError> = validate_crane(crane)
                .and_then(|()| validate_id_unique("crane", &crane.id, &seen))
                .and_then(|()| CraneSlot::from_context(crane, &self.clock));
            match slot {
                Ok(slot) => {
                    seen.insert(crane.id.clone());
                    crane_slots.push(slot);
                }
                Err(err) => reject(warnings, "crane", &err),
            }
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut staff_slots: Vec<StaffSlot> = Vec::new();
        for member in staff {
            let slot: Result<StaffSlot, DomainError> = validate_staff(member)
                .and_then(|()| validate_id_unique("staff", &member.id, &seen))
                .and_then(|()| StaffSlot::from_context(member, &self.clock));
            match slot {
                Ok(slot) => {
                    seen.insert(member.id.clone());
                    if staff_qualifies(member, &self.policy.required_skills) {
                        staff_slots.push(slot);
                    } else {
                        debug!(staff_id = %member.id, "Staff member lacks required skills");
                    }
                }
                Err(err) => reject(warnings, "staff", &err),
            }
        }

        ResourcePool::new(crane_slots, staff_slots)
    }
}

fn reject(warnings: &mut Vec<String>, kind: &str, err: &DomainError) {
    warn!(kind, error = %err, "Rejected record");
    warnings.push(format!("Rejected {kind} record: {err}"));
}
