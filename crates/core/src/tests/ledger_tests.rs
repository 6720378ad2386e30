// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConflictError, Reservation, ResourceKey, ResourceKind, ResourceLedger};
use portops_domain::TimeWindow;

fn window(start: i64, end: i64) -> TimeWindow {
    TimeWindow::new(start, end).unwrap()
}

#[test]
fn test_commit_blocks_overlapping_window() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let crane: ResourceKey = ResourceKey::crane("C1");

    ledger.commit(&crane, window(480, 720)).unwrap();

    assert!(!ledger.is_free(&crane, &window(600, 900)));
    assert!(!ledger.is_free(&crane, &window(400, 500)));
    assert!(!ledger.is_free(&crane, &window(500, 600)));
    assert!(!ledger.is_free(&crane, &window(0, 1440)));
}

#[test]
fn test_touching_windows_are_free() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let dock: ResourceKey = ResourceKey::dock("D1");

    ledger.commit(&dock, window(480, 720)).unwrap();

    assert!(ledger.is_free(&dock, &window(720, 900)));
    assert!(ledger.is_free(&dock, &window(300, 480)));
    ledger.commit(&dock, window(720, 900)).unwrap();
    ledger.commit(&dock, window(300, 480)).unwrap();
    assert_eq!(ledger.commitment_count(), 3);
}

#[test]
fn test_conflict_reports_existing_window() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let staff: ResourceKey = ResourceKey::staff("S1");
    ledger.commit(&staff, window(480, 720)).unwrap();

    let err: ConflictError = ledger.commit(&staff, window(700, 800)).unwrap_err();

    assert_eq!(err.key, staff);
    assert_eq!(err.requested, window(700, 800));
    assert_eq!(err.existing, window(480, 720));
    assert!(err.to_string().contains("staff 'S1'"));
}

#[test]
fn test_same_id_in_different_kinds_is_independent() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    ledger
        .commit(&ResourceKey::dock("X"), window(480, 720))
        .unwrap();

    assert!(ledger.is_free(&ResourceKey::crane("X"), &window(480, 720)));
    assert_eq!(ResourceKey::crane("X").kind(), ResourceKind::Crane);
}

#[test]
fn test_release_requires_exact_match() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let crane: ResourceKey = ResourceKey::crane("C1");
    ledger.commit(&crane, window(480, 720)).unwrap();

    assert!(!ledger.release(&crane, &window(480, 700)));
    assert!(!ledger.release(&ResourceKey::crane("C2"), &window(480, 720)));
    assert!(ledger.release(&crane, &window(480, 720)));
    assert!(ledger.is_free(&crane, &window(480, 720)));
    assert_eq!(ledger.commitment_count(), 0);
}

#[test]
fn test_reserve_all_commits_whole_group() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let group: Vec<Reservation> = vec![
        Reservation::new(ResourceKey::dock("D1"), window(480, 720)),
        Reservation::new(ResourceKey::crane("C1"), window(480, 720)),
        Reservation::new(ResourceKey::staff("S1"), window(480, 720)),
    ];

    ledger.reserve_all(&group).unwrap();

    assert_eq!(ledger.commitment_count(), 3);
}

#[test]
fn test_reserve_all_rolls_back_on_conflict() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    ledger
        .commit(&ResourceKey::staff("S1"), window(600, 660))
        .unwrap();
    let group: Vec<Reservation> = vec![
        Reservation::new(ResourceKey::dock("D1"), window(480, 720)),
        Reservation::new(ResourceKey::crane("C1"), window(480, 720)),
        Reservation::new(ResourceKey::staff("S1"), window(480, 720)),
    ];

    let err: ConflictError = ledger.reserve_all(&group).unwrap_err();

    assert_eq!(err.key, ResourceKey::staff("S1"));
    assert!(ledger.is_free(&ResourceKey::dock("D1"), &window(480, 720)));
    assert!(ledger.is_free(&ResourceKey::crane("C1"), &window(480, 720)));
    assert_eq!(ledger.commitment_count(), 1);
}

#[test]
fn test_committed_windows_stay_sorted_and_disjoint() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let dock: ResourceKey = ResourceKey::dock("D1");
    for (start, end) in [(900, 960), (60, 120), (480, 600), (120, 300)] {
        ledger.commit(&dock, window(start, end)).unwrap();
    }
    assert!(ledger.commit(&dock, window(550, 910)).is_err());

    let windows: Vec<TimeWindow> = ledger.committed_windows(&dock);
    assert_eq!(
        windows,
        vec![
            window(60, 120),
            window(120, 300),
            window(480, 600),
            window(900, 960)
        ]
    );
    for pair in windows.windows(2) {
        assert!(pair[0].end() <= pair[1].start());
    }
}

#[test]
fn test_release_points_from_filters_earlier_ends() {
    let mut ledger: ResourceLedger = ResourceLedger::new();
    let crane: ResourceKey = ResourceKey::crane("C1");
    ledger.commit(&crane, window(60, 120)).unwrap();
    ledger.commit(&crane, window(480, 600)).unwrap();
    ledger.commit(&crane, window(700, 800)).unwrap();

    assert_eq!(ledger.release_points_from(&crane, 600), vec![600, 800]);
    assert!(
        ledger
            .release_points_from(&ResourceKey::crane("C9"), 0)
            .is_empty()
    );
}
