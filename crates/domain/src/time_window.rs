// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open minute intervals relative to a scheduling day.
//!
//! Every instant handled by the scheduler is a signed number of minutes
//! from midnight of the scheduling date. Absolute timestamps are only
//! materialized at the boundaries through [`DayClock`].
//!
//! ## Invariants
//!
//! - A `TimeWindow` built through [`TimeWindow::new`] always has `start < end`
//! - Windows are half-open: `[start, end)`
//! - Two windows that merely touch (`a.end == b.start`) do not overlap

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, PrimitiveDateTime};

/// A signed count of minutes, relative to midnight of the scheduling date.
pub type Minutes = i64;

/// Minutes in one scheduling day.
pub const MINUTES_PER_DAY: Minutes = 24 * 60;

/// A half-open interval `[start, end)` in day-relative minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeWindow {
    start: Minutes,
    end: Minutes,
}

impl TimeWindow {
    /// Creates a new window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if `end <= start`.
    pub const fn new(start: Minutes, end: Minutes) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window starting at `start` that lasts `duration` minutes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if `duration` is not positive.
    pub const fn starting_at(start: Minutes, duration: Minutes) -> Result<Self, DomainError> {
        Self::new(start, start.saturating_add(duration))
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start(&self) -> Minutes {
        self.start
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end(&self) -> Minutes {
        self.end
    }

    /// Returns the length of the window in minutes.
    #[must_use]
    pub const fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Returns whether the two windows share at least one minute.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        overlaps(self, other)
    }

    /// Returns whether `inner` lies entirely inside this window.
    #[must_use]
    pub const fn contains(&self, inner: &Self) -> bool {
        contains(self, inner)
    }

    /// Returns this window moved by `minutes` (negative moves earlier).
    #[must_use]
    pub const fn shift(&self, minutes: Minutes) -> Self {
        shift(self, minutes)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Half-open intersection test.
#[must_use]
pub const fn overlaps(a: &TimeWindow, b: &TimeWindow) -> bool {
    a.start < b.end && b.start < a.end
}

/// Returns whether `inner` is fully covered by `outer`.
#[must_use]
pub const fn contains(outer: &TimeWindow, inner: &TimeWindow) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

/// Moves a window by a number of minutes, preserving its duration.
#[must_use]
pub const fn shift(window: &TimeWindow, minutes: Minutes) -> TimeWindow {
    TimeWindow {
        start: window.start.saturating_add(minutes),
        end: window.end.saturating_add(minutes),
    }
}

const NANOS_PER_MINUTE: i128 = 60_000_000_000;

fn saturate_minutes(minutes: i128) -> Minutes {
    Minutes::try_from(minutes).unwrap_or(if minutes < 0 {
        Minutes::MIN
    } else {
        Minutes::MAX
    })
}

/// Converts between absolute timestamps and minutes relative to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClock {
    date: Date,
    midnight: PrimitiveDateTime,
}

impl DayClock {
    /// Creates a clock anchored at midnight of `date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self {
            date,
            midnight: date.midnight(),
        }
    }

    /// Returns the scheduling date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Converts an absolute timestamp into whole minutes from midnight.
    ///
    /// Sub-minute remainders are floored.
    #[must_use]
    pub fn to_minutes(&self, at: PrimitiveDateTime) -> Minutes {
        let nanos: i128 = (at - self.midnight).whole_nanoseconds();
        saturate_minutes(nanos.div_euclid(NANOS_PER_MINUTE))
    }

    /// Converts an absolute timestamp into whole minutes from midnight,
    /// rounding any sub-minute remainder up.
    #[must_use]
    pub fn to_minutes_ceil(&self, at: PrimitiveDateTime) -> Minutes {
        let nanos: i128 = (at - self.midnight).whole_nanoseconds();
        let whole: i128 = nanos.div_euclid(NANOS_PER_MINUTE);
        saturate_minutes(whole + i128::from(nanos.rem_euclid(NANOS_PER_MINUTE) != 0))
    }

    /// Converts an absolute window into the whole-minute window it covers.
    ///
    /// The start is rounded up and the end rounded down, so the result never
    /// extends past the absolute window on either side.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if the converted window is empty.
    pub fn to_window(
        &self,
        from: PrimitiveDateTime,
        to: PrimitiveDateTime,
    ) -> Result<TimeWindow, DomainError> {
        TimeWindow::new(self.to_minutes_ceil(from), self.to_minutes(to))
    }

    /// Converts day-relative minutes back into an absolute timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the result is not representable.
    pub fn to_datetime(&self, minutes: Minutes) -> Result<PrimitiveDateTime, DomainError> {
        self.midnight
            .checked_add(Duration::minutes(minutes))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("adding {minutes} minutes to {}", self.date),
            })
    }
}
