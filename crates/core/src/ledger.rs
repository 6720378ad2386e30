// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-run bookkeeping of committed resource intervals.
//!
//! ## Invariants
//!
//! - Per resource, committed intervals are sorted by start and pairwise disjoint
//! - `commit` checks and inserts under one `&mut` borrow, so no other
//!   reservation can interleave between the check and the insert
//! - `reserve_all` either commits every member of a group or none of them
//!
//! The ledger lives for exactly one scheduling run and is never persisted.

use portops_domain::{Minutes, TimeWindow};
use std::collections::BTreeMap;

/// The category of a bookable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// A dock (berth).
    Dock,
    /// A crane.
    Crane,
    /// A staff member.
    Staff,
}

impl ResourceKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dock => "dock",
            Self::Crane => "crane",
            Self::Staff => "staff",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one resource within one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    kind: ResourceKind,
    id: String,
}

impl ResourceKey {
    /// Creates a key for a dock.
    #[must_use]
    pub fn dock(id: &str) -> Self {
        Self {
            kind: ResourceKind::Dock,
            id: id.to_string(),
        }
    }

    /// Creates a key for a crane.
    #[must_use]
    pub fn crane(id: &str) -> Self {
        Self {
            kind: ResourceKind::Crane,
            id: id.to_string(),
        }
    }

    /// Creates a key for a staff member.
    #[must_use]
    pub fn staff(id: &str) -> Self {
        Self {
            kind: ResourceKind::Staff,
            id: id.to_string(),
        }
    }

    /// Returns the resource category.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the resource identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.id)
    }
}

/// A commit found the resource already booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictError {
    /// The resource that was requested.
    pub key: ResourceKey,
    /// The window that was requested.
    pub requested: TimeWindow,
    /// The committed window it collides with.
    pub existing: TimeWindow,
}

impl std::fmt::Display for ConflictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Conflict on {}: requested {} overlaps committed {}",
            self.key, self.requested, self.existing
        )
    }
}

impl std::error::Error for ConflictError {}

/// One member of an atomic reservation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// The resource to book.
    pub key: ResourceKey,
    /// The window to book it for.
    pub window: TimeWindow,
}

impl Reservation {
    /// Creates a new reservation.
    #[must_use]
    pub const fn new(key: ResourceKey, window: TimeWindow) -> Self {
        Self { key, window }
    }
}

/// Per-resource committed intervals for one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLedger {
    /// Committed intervals per resource, keyed by start and mapping to end.
    committed: BTreeMap<ResourceKey, BTreeMap<Minutes, Minutes>>,
}

impl ResourceLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            committed: BTreeMap::new(),
        }
    }

    /// Returns true iff no committed interval of `key` overlaps `window`.
    #[must_use]
    pub fn is_free(&self, key: &ResourceKey, window: &TimeWindow) -> bool {
        self.find_conflict(key, window).is_none()
    }

    /// Books `window` on `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConflictError` if the resource is not free for `window`.
    pub fn commit(&mut self, key: &ResourceKey, window: TimeWindow) -> Result<(), ConflictError> {
        if let Some(existing) = self.find_conflict(key, &window) {
            return Err(ConflictError {
                key: key.clone(),
                requested: window,
                existing,
            });
        }

        self.committed
            .entry(key.clone())
            .or_default()
            .insert(window.start(), window.end());
        Ok(())
    }

    /// Removes a previously committed interval.
    ///
    /// Only an exact match is removed. Returns whether anything was removed.
    pub fn release(&mut self, key: &ResourceKey, window: &TimeWindow) -> bool {
        let Some(intervals) = self.committed.get_mut(key) else {
            return false;
        };

        if intervals.get(&window.start()) != Some(&window.end()) {
            return false;
        }

        intervals.remove(&window.start());
        if intervals.is_empty() {
            self.committed.remove(key);
        }
        true
    }

    /// Books every reservation in `group`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns the first `ConflictError` encountered. Every member committed
    /// before the conflict has been released again when this returns.
    pub fn reserve_all(&mut self, group: &[Reservation]) -> Result<(), ConflictError> {
        for (index, reservation) in group.iter().enumerate() {
            if let Err(conflict) = self.commit(&reservation.key, reservation.window) {
                for committed in group[..index].iter().rev() {
                    self.release(&committed.key, &committed.window);
                }
                return Err(conflict);
            }
        }
        Ok(())
    }

    /// Returns the ends of committed intervals of `key` that lie at or after `from`.
    ///
    /// These are the instants at which the resource may become free again.
    #[must_use]
    pub fn release_points_from(&self, key: &ResourceKey, from: Minutes) -> Vec<Minutes> {
        self.committed.get(key).map_or_else(Vec::new, |intervals| {
            intervals
                .values()
                .copied()
                .filter(|end| *end >= from)
                .collect()
        })
    }

    /// Returns the committed windows of `key` in ascending order.
    #[must_use]
    pub fn committed_windows(&self, key: &ResourceKey) -> Vec<TimeWindow> {
        self.committed.get(key).map_or_else(Vec::new, |intervals| {
            intervals
                .iter()
                .filter_map(|(start, end)| TimeWindow::new(*start, *end).ok())
                .collect()
        })
    }

    /// Returns the total number of committed intervals across all resources.
    #[must_use]
    pub fn commitment_count(&self) -> usize {
        self.committed.values().map(BTreeMap::len).sum()
    }

    /// Finds a committed interval of `key` overlapping `window`.
    ///
    /// Intervals are disjoint and sorted, so their ends are sorted as well: the
    /// last interval starting before `window.end()` has the greatest end of all
    /// candidates, and it is the only one that needs checking.
    fn find_conflict(&self, key: &ResourceKey, window: &TimeWindow) -> Option<TimeWindow> {
        let intervals: &BTreeMap<Minutes, Minutes> = self.committed.get(key)?;
        let (start, end) = intervals.range(..window.end()).next_back()?;
        if *end > window.start() {
            return TimeWindow::new(*start, *end).ok();
        }
        None
    }
}
