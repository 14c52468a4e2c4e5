//! Integration tests: civil dates through zones onto the UT axis.

use chrono::{Datelike, Timelike};
use panchanga_time::{CivilZone, Instant, calendar_to_jd, parse_civil_date};

#[test]
fn ist_day_start_for_parsed_date() {
    let date = parse_civil_date("01/01/2023").unwrap();
    let zone = CivilZone::parse("Asia/Kolkata").unwrap();
    let start = zone.local_midnight(date);
    let expected = calendar_to_jd(2022, 12, 31.0) + 18.5 / 24.0;
    assert!(
        (start.jd_ut() - expected).abs() < 1e-8,
        "start = {start}, expected JD {expected}"
    );
}

#[test]
fn local_rendering_round_trips_day() {
    let zone = CivilZone::from_hours(-7.0).unwrap();
    let date = parse_civil_date("2024-06-15").unwrap();
    let noon = zone.local_midnight(date).add_days(0.5);
    let local = zone.to_local(noon).unwrap();
    assert_eq!(local.date_naive(), date);
    assert_eq!(local.hour(), 12);
}

#[test]
fn dst_gap_midnight_still_resolves() {
    // Santiago springs forward at 00:00 local, so midnight does not exist.
    let zone = CivilZone::parse("America/Santiago").unwrap();
    let date = parse_civil_date("2023-09-03").unwrap();
    let start = zone.local_midnight(date);
    let local = zone.to_local(start).unwrap();
    assert_eq!(local.day(), 3, "local start = {local}");
}

#[test]
fn instant_display_is_utc() {
    let t = Instant::from_jd_ut(calendar_to_jd(2023, 1, 1.25));
    assert_eq!(t.to_string(), "2023-01-01T06:00:00Z");
}
