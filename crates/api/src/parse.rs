// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and timestamp parsing for request payloads.
//!
//! Dates are `YYYY-MM-DD`. Timestamps are `YYYY-MM-DDTHH:MM` with optional
//! `:SS`; they carry no offset and are read in the port's local time.

use thiserror::Error;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");
const TIMESTAMP_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const TIMESTAMP_FORMAT_NO_SECONDS: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Request parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestParseError {
    /// A date field is not `YYYY-MM-DD`.
    #[error("Invalid date '{value}' for field '{field}': expected YYYY-MM-DD")]
    InvalidDate { field: String, value: String },

    /// A timestamp field is not `YYYY-MM-DDTHH:MM[:SS]`.
    #[error("Invalid timestamp '{value}' for field '{field}': expected YYYY-MM-DDTHH:MM[:SS]")]
    InvalidTimestamp { field: String, value: String },

    /// A value could not be rendered back to text.
    #[error("Failed to format {what}: {reason}")]
    Format { what: &'static str, reason: String },
}

impl RequestParseError {
    /// Returns the request field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidDate { field, .. } | Self::InvalidTimestamp { field, .. } => Some(field),
            Self::Format { .. } => None,
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `RequestParseError::InvalidDate` if `value` is not a valid date.
pub fn parse_date(field: &str, value: &str) -> Result<Date, RequestParseError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|_| RequestParseError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses a `YYYY-MM-DDTHH:MM[:SS]` timestamp.
///
/// # Errors
///
/// Returns `RequestParseError::InvalidTimestamp` if `value` matches neither form.
pub fn parse_timestamp(field: &str, value: &str) -> Result<PrimitiveDateTime, RequestParseError> {
    let trimmed: &str = value.trim();
    PrimitiveDateTime::parse(trimmed, TIMESTAMP_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, TIMESTAMP_FORMAT_NO_SECONDS))
        .map_err(|_| RequestParseError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `RequestParseError::Format` if the date cannot be rendered.
pub fn format_date(date: Date) -> Result<String, RequestParseError> {
    date.format(DATE_FORMAT)
        .map_err(|err| RequestParseError::Format {
            what: "date",
            reason: err.to_string(),
        })
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`.
///
/// # Errors
///
/// Returns `RequestParseError::Format` if the timestamp cannot be rendered.
pub fn format_timestamp(at: PrimitiveDateTime) -> Result<String, RequestParseError> {
    at.format(TIMESTAMP_FORMAT)
        .map_err(|err| RequestParseError::Format {
            what: "timestamp",
            reason: err.to_string(),
        })
}
