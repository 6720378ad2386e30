// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_crane, create_test_request, create_test_vessel};
use crate::{
    ApiError, ComputeScheduleRequest, ComputeScheduleResponse, StrategyListResponse,
    compute_daily_schedule, list_strategies,
};
use portops::SchedulerPolicy;

#[test]
fn test_compute_schedule_formats_times() {
    let response: ComputeScheduleResponse =
        compute_daily_schedule(&create_test_request(), &SchedulerPolicy::default()).unwrap();

    assert_eq!(response.date, "2026-03-02");
    assert_eq!(response.algorithm, "greedy-earliest-arrival");
    assert_eq!(response.operations.len(), 1);
    assert_eq!(response.operations[0].start, "2026-03-02T08:00:00");
    assert_eq!(response.operations[0].end, "2026-03-02T16:00:00");
    assert_eq!(response.operations[0].dock_id.as_deref(), Some("D1"));
    assert!(response.warnings.is_empty());
}

#[test]
fn test_compute_schedule_with_named_strategy() {
    let mut request: ComputeScheduleRequest = create_test_request();
    request.strategy = Some(String::from("earliest-departure-first"));

    let response: ComputeScheduleResponse =
        compute_daily_schedule(&request, &SchedulerPolicy::default()).unwrap();

    assert_eq!(response.algorithm, "earliest-departure-first");
}

#[test]
fn test_unknown_strategy_is_configuration_error() {
    let mut request: ComputeScheduleRequest = create_test_request();
    request.strategy = Some(String::from("fastest"));

    let err: ApiError = compute_daily_schedule(&request, &SchedulerPolicy::default()).unwrap_err();

    assert!(matches!(err, ApiError::Configuration { .. }));
    assert!(err.to_string().contains("fastest"));
}

#[test]
fn test_invalid_policy_is_configuration_error() {
    let policy: SchedulerPolicy = SchedulerPolicy {
        max_cranes_per_vessel: 0,
        ..SchedulerPolicy::default()
    };

    let err: ApiError = compute_daily_schedule(&create_test_request(), &policy).unwrap_err();

    assert_eq!(err.code(), "configuration");
}

#[test]
fn test_malformed_date_is_invalid_input() {
    let mut request: ComputeScheduleRequest = create_test_request();
    request.date = String::from("02/03/2026");

    let err: ApiError = compute_daily_schedule(&request, &SchedulerPolicy::default()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "date"));
}

#[test]
fn test_malformed_crane_timestamp_is_invalid_input() {
    let mut request: ComputeScheduleRequest = create_test_request();
    let mut crane = create_test_crane("C2");
    crane.available_to = String::from("tomorrow");
    request.cranes.push(crane);

    let err: ApiError = compute_daily_schedule(&request, &SchedulerPolicy::default()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "available_to"));
}

#[test]
fn test_invalid_vessel_becomes_warning() {
    let mut request: ComputeScheduleRequest = create_test_request();
    request.vessels.push(create_test_vessel("V2", 20, 8));

    let response: ComputeScheduleResponse =
        compute_daily_schedule(&request, &SchedulerPolicy::default()).unwrap();

    assert_eq!(response.operations.len(), 1);
    assert_eq!(response.warnings.len(), 1);
    assert!(response.warnings[0].contains("V2"));
}

#[test]
fn test_request_deserializes_with_defaults() {
    let request: ComputeScheduleRequest =
        serde_json::from_str(r#"{"date": "2026-03-02"}"#).unwrap();

    assert!(request.strategy.is_none());
    assert!(request.vessels.is_empty());

    let response: ComputeScheduleResponse =
        compute_daily_schedule(&request, &SchedulerPolicy::default()).unwrap();
    assert!(response.operations.is_empty());
    assert!(response.crane_hours_used.abs() < f64::EPSILON);
}

#[test]
fn test_list_strategies_names_default_first() {
    let response: StrategyListResponse = list_strategies();

    assert_eq!(response.default, "greedy-earliest-arrival");
    assert_eq!(
        response.strategies,
        vec![
            String::from("greedy-earliest-arrival"),
            String::from("earliest-departure-first")
        ]
    );
}
