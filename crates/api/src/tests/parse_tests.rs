// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RequestParseError, format_date, format_timestamp, parse_date, parse_timestamp};
use time::macros::{date, datetime};

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("date", "2026-03-02").unwrap(), date!(2026-03-02));
    assert_eq!(
        parse_date("date", "2026-02-30").unwrap_err(),
        RequestParseError::InvalidDate {
            field: String::from("date"),
            value: String::from("2026-02-30"),
        }
    );
}

#[test]
fn test_parse_timestamp_with_and_without_seconds() {
    assert_eq!(
        parse_timestamp("shift_start", "2026-03-02T06:30").unwrap(),
        datetime!(2026-03-02 06:30)
    );
    assert_eq!(
        parse_timestamp("shift_start", "2026-03-02T06:30:15").unwrap(),
        datetime!(2026-03-02 06:30:15)
    );
}

#[test]
fn test_parse_timestamp_rejects_offsets_and_garbage() {
    for value in ["2026-03-02 06:30", "2026-03-02T06:30Z", "06:30", ""] {
        let err: RequestParseError = parse_timestamp("shift_end", value).unwrap_err();
        assert_eq!(err.field(), Some("shift_end"), "value {value:?}");
    }
}

#[test]
fn test_format_round_trips() {
    assert_eq!(format_date(date!(2026-03-02)).unwrap(), "2026-03-02");
    assert_eq!(
        format_timestamp(datetime!(2026-03-02 08:05)).unwrap(),
        "2026-03-02T08:05:00"
    );
}
