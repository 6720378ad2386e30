// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CraneContext, Dock, RegistrySnapshot, SkillSet, StaffContext, VesselType};
use time::macros::datetime;

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

pub fn create_test_crane(id: &str) -> CraneContext {
    CraneContext::new(
        id,
        datetime!(2026-03-02 00:00),
        datetime!(2026-03-03 00:00),
        40,
    )
}

pub fn create_test_staff(id: &str, skills: &[&str]) -> StaffContext {
    StaffContext::new(
        id,
        skills.iter().collect::<SkillSet>(),
        datetime!(2026-03-02 06:00),
        datetime!(2026-03-02 18:00),
    )
}
