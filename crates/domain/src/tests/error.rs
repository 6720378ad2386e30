// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidTimeWindow { start: 60, end: 30 };
    assert_eq!(
        format!("{err}"),
        "Invalid time window [60, 30): end must lie after start"
    );

    let err: DomainError = DomainError::EmptyIdentifier { kind: "crane" };
    assert_eq!(format!("{err}"), "A crane identifier cannot be empty");

    let err: DomainError = DomainError::DuplicateIdentifier {
        kind: "vessel",
        id: String::from("V1"),
    };
    assert_eq!(format!("{err}"), "Duplicate vessel identifier 'V1'");

    let err: DomainError = DomainError::ArrivalAfterDeparture {
        vessel_id: String::from("V1"),
        arrival: 600,
        departure: 480,
    };
    assert_eq!(
        format!("{err}"),
        "Vessel 'V1' arrives at minute 600 but departs at minute 480"
    );

    let err: DomainError = DomainError::UnknownVesselType {
        vessel_id: String::from("V9"),
        vessel_type_id: String::from("ghost"),
    };
    assert_eq!(
        format!("{err}"),
        "Vessel 'V9' references unknown vessel type 'ghost'"
    );

    let err: DomainError = DomainError::ZeroDuration {
        vessel_id: String::from("V2"),
    };
    assert_eq!(format!("{err}"), "Vessel 'V2' has no unload or load work");

    let err: DomainError = DomainError::InvalidLiftingCapacity {
        crane_id: String::from("C1"),
        capacity: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Crane 'C1' has invalid lifting capacity 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::InvalidShift {
        staff_id: String::from("S1"),
    };
    assert_eq!(
        format!("{err}"),
        "Staff member 'S1' shift must end after it starts"
    );
}
