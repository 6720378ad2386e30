// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CraneSlot, ResourcePool, ScheduleResult, SchedulerPolicy, StaffSlot, compute_daily_schedule,
};
use portops_domain::{
    CraneContext, DayClock, Dock, RegistrySnapshot, SkillSet, StaffContext, VesselContext,
    VesselType,
};
use time::macros::date;
use time::{Date, Duration, PrimitiveDateTime};

pub fn test_date() -> Date {
    date!(2026-03-02)
}

pub fn test_clock() -> DayClock {
    DayClock::new(test_date())
}

pub fn at_hour(hour: i64) -> PrimitiveDateTime {
    test_date().midnight() + Duration::hours(hour)
}

/// Feeder and panamax vessel types; D1 accepts everything up to panamax,
/// D2 only takes feeders.
pub fn create_test_registry() -> RegistrySnapshot {
    RegistrySnapshot::new(
        vec![
            VesselType::new("feeder", 8.0, 140.0),
            VesselType::new("panamax", 12.0, 290.0),
        ],
        vec![
            Dock::new("D1", 14.0, 300.0, 16.0, &[]),
            Dock::new("D2", 9.0, 160.0, 11.0, &["feeder"]),
        ],
    )
}

pub fn create_single_dock_registry() -> RegistrySnapshot {
    RegistrySnapshot::new(
        vec![VesselType::new("feeder", 8.0, 140.0)],
        vec![Dock::new("D1", 14.0, 300.0, 16.0, &[])],
    )
}

pub fn create_test_vessel(
    id: &str,
    arrival_hour: i64,
    departure_hour: i64,
    work_hours: i64,
) -> VesselContext {
    VesselContext::from_hours(id, "feeder", arrival_hour, departure_hour, work_hours, 0)
}

pub fn create_test_crane(id: &str, from_hour: i64, to_hour: i64, capacity: i64) -> CraneContext {
    CraneContext::new(id, at_hour(from_hour), at_hour(to_hour), capacity)
}

pub fn create_day_crane(id: &str) -> CraneContext {
    create_test_crane(id, 0, 24, 40)
}

pub fn create_test_staff(id: &str, skills: &[&str], from_hour: i64, to_hour: i64) -> StaffContext {
    StaffContext::new(
        id,
        skills.iter().collect::<SkillSet>(),
        at_hour(from_hour),
        at_hour(to_hour),
    )
}

pub fn create_day_staff(id: &str) -> StaffContext {
    create_test_staff(id, &["crane-op"], 0, 24)
}

pub fn create_test_pool(cranes: &[CraneContext], staff: &[StaffContext]) -> ResourcePool {
    let clock: DayClock = test_clock();
    ResourcePool::new(
        cranes
            .iter()
            .map(|crane| CraneSlot::from_context(crane, &clock).unwrap())
            .collect(),
        staff
            .iter()
            .map(|member| StaffSlot::from_context(member, &clock).unwrap())
            .collect(),
    )
}

pub fn run_schedule(
    vessels: &[VesselContext],
    cranes: &[CraneContext],
    staff: &[StaffContext],
    registry: &RegistrySnapshot,
    policy: &SchedulerPolicy,
) -> ScheduleResult {
    compute_daily_schedule(test_date(), None, vessels, cranes, staff, registry, policy).unwrap()
}
