use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::America::{Chicago, Los_Angeles};
use chrono_tz::Asia::{Kolkata, Tokyo};

use world_clock::types::{Coordinate, Location, TimeSample};
use world_clock::zone::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn utc_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<Utc> {
    let naive = NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_milli_opt(h, mi, s, ms)
        .unwrap();
    Utc.from_utc_datetime(&naive)
}

// ── Chicago solstice noon ──

#[test]
fn test_chicago_solstice_noon_wraps_to_zero() {
    let t = utc(2021, 6, 21, 17, 0, 0);
    assert_approx!(decimal_hour(&t, &Chicago), 0.0, 1e-12);
    assert_approx!(decimal_minute(&t, &Chicago), 0.0, 1e-12);
    assert_approx!(decimal_second(&t, &Chicago), 0.0, 1e-12);
    assert_approx!(decimal_day_time(&t, &Chicago), 12.0, 1e-12);
}

#[test]
fn test_chicago_location_time_sample() {
    let t = utc(2021, 6, 21, 17, 0, 0);
    let sample = Location::chicago().time_sample(&t);
    assert_eq!(
        sample,
        TimeSample {
            hour: 0.0,
            minute: 0.0,
            second: 0.0
        }
    );
}

#[test]
fn test_fractional_components() {
    let t = utc_millis(2021, 6, 21, 17, 30, 45, 250);
    assert_approx!(decimal_hour(&t, &Chicago), 0.5, 1e-12);
    assert_approx!(decimal_minute(&t, &Chicago), 30.75, 1e-12);
    assert_approx!(decimal_second(&t, &Chicago), 45.25, 1e-9);
}

#[test]
fn test_hour_uses_minutes_not_seconds() {
    let t = utc(2021, 1, 4, 15, 45, 59);
    // 09:45:59 CST
    assert_approx!(decimal_hour(&t, &Chicago), 9.75, 1e-12);
}

#[test]
fn test_afternoon_maps_onto_twelve_hour_face() {
    let t = utc(2021, 1, 4, 21, 15, 0);
    // 15:15 CST
    assert_approx!(decimal_hour(&t, &Chicago), 3.25, 1e-12);
}

// ── Other zones ──

#[test]
fn test_tokyo_and_half_hour_offset() {
    let t = utc(2021, 1, 1, 0, 0, 0);
    assert_approx!(decimal_hour(&t, &Tokyo), 9.0, 1e-12);
    assert_approx!(decimal_hour(&t, &Kolkata), 5.5, 1e-12);
    assert_approx!(decimal_hour(&t, &Utc), 0.0, 1e-12);
}

#[test]
fn test_dst_changes_projection() {
    let winter = utc(2021, 1, 15, 18, 0, 0);
    let summer = utc(2021, 7, 15, 18, 0, 0);
    assert_approx!(decimal_day_time(&winter, &Chicago), 12.0, 1e-12);
    assert_approx!(decimal_day_time(&summer, &Chicago), 13.0, 1e-12);
}

// ── Ranges ──

#[test]
fn test_components_in_range_over_a_day() {
    let start = utc_millis(2021, 3, 14, 0, 0, 0, 999);
    let zones: [&dyn CivilZone; 4] = [&Chicago, &Tokyo, &Kolkata, &Utc];
    for step in 0..(24 * 60 / 7 + 1) {
        let t = start + chrono::Duration::minutes(7 * step) + chrono::Duration::seconds(step % 60);
        for zone in zones {
            let h = decimal_hour(&t, zone);
            let m = decimal_minute(&t, zone);
            let s = decimal_second(&t, zone);
            assert!((0.0..12.0).contains(&h), "hour={} at {}", h, t);
            assert!((0.0..60.0).contains(&m), "minute={} at {}", m, t);
            assert!((0.0..60.0).contains(&s), "second={} at {}", s, t);
        }
    }
}

#[test]
fn test_hour_monotonic_within_half_day() {
    // 00:00 to 11:59 CST on 2021-01-04
    let start = utc(2021, 1, 4, 6, 0, 0);
    let mut previous = -1.0;
    for minute in 0..720 {
        let t = start + chrono::Duration::minutes(minute);
        let h = decimal_hour(&t, &Chicago);
        assert!(h >= previous, "hour went backwards at {}", t);
        previous = h;
    }
    let noon = start + chrono::Duration::minutes(720);
    assert!(decimal_hour(&noon, &Chicago) < previous);
}

#[test]
fn test_leap_second_stays_below_sixty() {
    let leap = utc_millis(2016, 12, 31, 23, 59, 59, 1_500);
    let s = decimal_second(&leap, &Utc);
    assert!(s < 60.0, "second={}", s);
    assert_approx!(s, 59.5, 1e-9);
}

// ── Fallbacks ──

#[test]
fn test_unrepresentable_local_time_defaults_to_zero() {
    let edge = DateTime::<Utc>::MAX_UTC;
    assert!(Tokyo.civil_time(&edge).is_none());
    assert_eq!(decimal_hour(&edge, &Tokyo), 0.0);
    assert_eq!(decimal_minute(&edge, &Tokyo), 0.0);
    assert_eq!(decimal_second(&edge, &Tokyo), 0.0);
}

#[test]
fn test_resolve_zone_known_and_unknown() {
    assert_eq!(resolve_zone("America/Chicago"), ClockZone::Named(Chicago));
    assert_eq!(resolve_zone("Mars/Olympus_Mons"), ClockZone::Host);
    assert_eq!(resolve_zone(""), ClockZone::Host);
}

#[test]
fn test_host_zone_still_in_range() {
    let location = Location::new(
        "Nowhere",
        Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        },
        "Not/A_Zone",
    )
    .unwrap();
    assert_eq!(location.zone(), ClockZone::Host);
    let sample = location.time_sample(&utc(2021, 6, 21, 17, 0, 0));
    assert!((0.0..12.0).contains(&sample.hour));
    assert!((0.0..60.0).contains(&sample.minute));
}

// ── Time difference ──

#[test]
fn test_time_difference_between_zones() {
    let t = utc(2021, 6, 21, 17, 0, 0);
    assert_eq!(time_difference(&t, &Chicago, &Los_Angeles), -2 * 3600);
    assert_eq!(time_difference(&t, &Los_Angeles, &Chicago), 2 * 3600);
    assert_eq!(time_difference(&t, &Utc, &Kolkata), 5 * 3600 + 1800);
}

#[test]
fn test_format_time_difference() {
    assert_eq!(format_time_difference(7200), "+2:00");
    assert_eq!(format_time_difference(-7200), "-2:00");
    assert_eq!(format_time_difference(1800), "+0:30");
    assert_eq!(format_time_difference(19800), "+5:30");
    assert_eq!(format_time_difference(0), "0:00");
}

#[test]
fn test_location_time_difference_string() {
    let t = utc(2021, 6, 21, 17, 0, 0);
    let chicago = Location::chicago();
    let sf = Location::san_francisco();
    assert_eq!(chicago.time_difference_string(&t, &sf), "-2:00");
    assert_eq!(sf.time_difference_string(&t, &chicago), "+2:00");
    assert_eq!(chicago.time_difference_string(&t, &chicago), "0:00");
}

// ── Labels ──

#[test]
fn test_zone_abbreviation() {
    let chicago = Location::chicago();
    assert_eq!(chicago.zone_abbreviation(&utc(2021, 6, 21, 17, 0, 0)), "CDT");
    assert_eq!(chicago.zone_abbreviation(&utc(2021, 1, 4, 17, 0, 0)), "CST");
}

#[test]
fn test_short_time_string() {
    let chicago = Location::chicago();
    assert_eq!(chicago.local_time_string(&utc(2021, 6, 21, 17, 0, 0)), "12:00 PM");
    assert_eq!(chicago.local_time_string(&utc(2021, 6, 21, 14, 5, 0)), "9:05 AM");
}
