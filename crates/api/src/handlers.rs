// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_core_error};
use crate::parse::{format_date, format_timestamp, parse_date, parse_timestamp};
use crate::request_response::{
    ComputeScheduleRequest, ComputeScheduleResponse, CraneInfo, DockInfo, ScheduledOperationInfo,
    StaffInfo, StrategyListResponse, VesselInfo, VesselTypeInfo,
};
use portops::{ScheduleResult, ScheduledOperation, SchedulerPolicy, Strategy};
use portops_domain::{
    CraneContext, Dock, RegistrySnapshot, SkillSet, StaffContext, VesselContext, VesselType,
};
use time::Date;
use tracing::{debug, info};

/// Computes the schedule for the day in `request`.
///
/// # Arguments
///
/// * `request` - The scheduling request
/// * `policy` - The scheduler policy configured for this deployment
///
/// # Returns
///
/// The schedule, with rejected records and unschedulable vessels listed in
/// its warnings.
///
/// # Errors
///
/// Returns an error if:
/// - The date or any timestamp is malformed
/// - The strategy is unknown or the policy is invalid
pub fn compute_daily_schedule(
    request: &ComputeScheduleRequest,
    policy: &SchedulerPolicy,
) -> Result<ComputeScheduleResponse, ApiError> {
    let date: Date = parse_date("date", &request.date)?;
    let vessels: Vec<VesselContext> = request.vessels.iter().map(to_vessel_context).collect();
    let cranes: Vec<CraneContext> = request
        .cranes
        .iter()
        .map(to_crane_context)
        .collect::<Result<_, _>>()?;
    let staff: Vec<StaffContext> = request
        .staff
        .iter()
        .map(to_staff_context)
        .collect::<Result<_, _>>()?;
    let registry: RegistrySnapshot = RegistrySnapshot::new(
        request.vessel_types.iter().map(to_vessel_type).collect(),
        request.docks.iter().map(to_dock).collect(),
    );

    debug!(
        %date,
        strategy = request.strategy.as_deref().unwrap_or("default"),
        "Translated schedule request"
    );

    let result: ScheduleResult = portops::compute_daily_schedule(
        date,
        request.strategy.as_deref(),
        &vessels,
        &cranes,
        &staff,
        &registry,
        policy,
    )
    .map_err(translate_core_error)?;

    info!(
        %date,
        algorithm = %result.algorithm,
        operations = result.operations.len(),
        warnings = result.warnings.len(),
        "Schedule request completed"
    );

    to_response(result)
}

/// Lists the scheduling strategies this deployment understands.
#[must_use]
pub fn list_strategies() -> StrategyListResponse {
    StrategyListResponse {
        strategies: Strategy::ALL
            .iter()
            .map(|strategy| strategy.as_str().to_string())
            .collect(),
        default: Strategy::default().as_str().to_string(),
    }
}

fn to_vessel_context(info: &VesselInfo) -> VesselContext {
    VesselContext::from_hours(
        &info.id,
        &info.vessel_type_id,
        info.arrival_hour,
        info.departure_hour,
        info.unload_hours,
        info.load_hours,
    )
}

fn to_crane_context(info: &CraneInfo) -> Result<CraneContext, ApiError> {
    Ok(CraneContext::new(
        &info.id,
        parse_timestamp("available_from", &info.available_from)?,
        parse_timestamp("available_to", &info.available_to)?,
        info.lifting_capacity,
    ))
}

fn to_staff_context(info: &StaffInfo) -> Result<StaffContext, ApiError> {
    Ok(StaffContext::new(
        &info.id,
        info.skills.iter().collect::<SkillSet>(),
        parse_timestamp("shift_start", &info.shift_start)?,
        parse_timestamp("shift_end", &info.shift_end)?,
    ))
}

fn to_vessel_type(info: &VesselTypeInfo) -> VesselType {
    VesselType::new(&info.id, info.draft, info.length)
}

fn to_dock(info: &DockInfo) -> Dock {
    let allowed: Vec<&str> = info
        .allowed_vessel_types
        .iter()
        .map(String::as_str)
        .collect();
    Dock::new(&info.id, info.max_draft, info.max_length, info.depth, &allowed)
}

fn to_operation_info(op: ScheduledOperation) -> Result<ScheduledOperationInfo, ApiError> {
    Ok(ScheduledOperationInfo {
        start: format_timestamp(op.start)?,
        end: format_timestamp(op.end)?,
        vessel_id: op.vessel_id,
        dock_id: op.dock_id,
        crane_ids: op.crane_ids,
        staff_ids: op.staff_ids,
        delay_minutes: op.delay_minutes,
        multi_crane: op.multi_crane,
    })
}

fn to_response(result: ScheduleResult) -> Result<ComputeScheduleResponse, ApiError> {
    Ok(ComputeScheduleResponse {
        date: format_date(result.date)?,
        algorithm: result.algorithm,
        total_delay_minutes: result.total_delay_minutes,
        crane_hours_used: result.crane_hours_used,
        operations: result
            .operations
            .into_iter()
            .map(to_operation_info)
            .collect::<Result<_, _>>()?,
        warnings: result.warnings,
    })
}
