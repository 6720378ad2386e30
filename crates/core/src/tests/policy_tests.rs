// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, MAX_HORIZON_MINUTES, SchedulerPolicy};
use portops_domain::{EmptyAllowedTypesPolicy, MINUTES_PER_DAY};

#[test]
fn test_default_policy_is_valid() {
    let policy: SchedulerPolicy = SchedulerPolicy::default();
    assert!(policy.validate().is_ok());
    assert_eq!(policy.staff_per_operation, 1);
    assert_eq!(policy.max_cranes_per_vessel, 2);
    assert!(policy.required_skills.is_empty());
    assert!(!policy.prefer_multi_crane);
    assert_eq!(policy.empty_allowed_types, EmptyAllowedTypesPolicy::AcceptAll);
    assert_eq!(policy.horizon_minutes, None);
}

#[test]
fn test_zero_staff_per_operation_is_rejected() {
    let policy: SchedulerPolicy = SchedulerPolicy {
        staff_per_operation: 0,
        ..SchedulerPolicy::default()
    };
    assert!(matches!(
        policy.validate(),
        Err(CoreError::InvalidPolicy { .. })
    ));
}

#[test]
fn test_zero_max_cranes_is_rejected() {
    let policy: SchedulerPolicy = SchedulerPolicy {
        max_cranes_per_vessel: 0,
        ..SchedulerPolicy::default()
    };
    assert!(matches!(
        policy.validate(),
        Err(CoreError::InvalidPolicy { .. })
    ));
}

#[test]
fn test_horizon_bounds() {
    for horizon in [0, -60, MAX_HORIZON_MINUTES + 1] {
        let policy: SchedulerPolicy = SchedulerPolicy {
            horizon_minutes: Some(horizon),
            ..SchedulerPolicy::default()
        };
        assert!(policy.validate().is_err(), "horizon {horizon}");
    }

    let policy: SchedulerPolicy = SchedulerPolicy {
        horizon_minutes: Some(MAX_HORIZON_MINUTES),
        ..SchedulerPolicy::default()
    };
    assert!(policy.validate().is_ok());
}

#[test]
fn test_effective_horizon_defaults_to_resource_end() {
    let policy: SchedulerPolicy = SchedulerPolicy::default();
    assert_eq!(policy.effective_horizon(None), MINUTES_PER_DAY);
    assert_eq!(policy.effective_horizon(Some(600)), MINUTES_PER_DAY);
    assert_eq!(policy.effective_horizon(Some(2000)), 2000);
    assert_eq!(
        policy.effective_horizon(Some(MAX_HORIZON_MINUTES + 60)),
        MAX_HORIZON_MINUTES
    );

    let fixed: SchedulerPolicy = SchedulerPolicy {
        horizon_minutes: Some(720),
        ..SchedulerPolicy::default()
    };
    assert_eq!(fixed.effective_horizon(Some(2000)), 720);
}
