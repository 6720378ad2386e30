// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{
    ComputeScheduleRequest, CraneInfo, DockInfo, StaffInfo, VesselInfo, VesselTypeInfo,
};

pub fn create_test_vessel(id: &str, arrival_hour: i64, departure_hour: i64) -> VesselInfo {
    VesselInfo {
        id: id.to_string(),
        vessel_type_id: String::from("feeder"),
        arrival_hour,
        departure_hour,
        unload_hours: 4,
        load_hours: 4,
    }
}

pub fn create_test_crane(id: &str) -> CraneInfo {
    CraneInfo {
        id: id.to_string(),
        available_from: String::from("2026-03-02T00:00"),
        available_to: String::from("2026-03-03T00:00"),
        lifting_capacity: 40,
    }
}

pub fn create_test_staff(id: &str) -> StaffInfo {
    StaffInfo {
        id: id.to_string(),
        skills: vec![String::from("crane-op")],
        shift_start: String::from("2026-03-02T00:00:00"),
        shift_end: String::from("2026-03-03T00:00:00"),
    }
}

pub fn create_test_request() -> ComputeScheduleRequest {
    ComputeScheduleRequest {
        date: String::from("2026-03-02"),
        strategy: None,
        vessels: vec![create_test_vessel("V1", 8, 20)],
        cranes: vec![create_test_crane("C1")],
        staff: vec![create_test_staff("S1")],
        vessel_types: vec![VesselTypeInfo {
            id: String::from("feeder"),
            draft: 8.0,
            length: 140.0,
        }],
        docks: vec![DockInfo {
            id: String::from("D1"),
            max_draft: 14.0,
            max_length: 300.0,
            depth: 16.0,
            allowed_vessel_types: Vec::new(),
        }],
    }
}
