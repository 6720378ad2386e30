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
    clippy::all
)]

mod error;
mod handlers;
mod parse;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error};
pub use handlers::{compute_daily_schedule, list_strategies};
pub use parse::{RequestParseError, format_date, format_timestamp, parse_date, parse_timestamp};
pub use request_response::{
    ComputeScheduleRequest, ComputeScheduleResponse, CraneInfo, DockInfo, ScheduledOperationInfo,
    StaffInfo, StrategyListResponse, VesselInfo, VesselTypeInfo,
};
