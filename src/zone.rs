use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::types::{CivilTime, Location, TimeSample};

pub const HOURS_PER_FACE: f64 = 12.0;

/// Anything that can turn a UTC instant into wall-clock components.
pub trait CivilZone {
    fn utc_offset(&self, instant: &DateTime<Utc>) -> i32;

    fn local_datetime(&self, instant: &DateTime<Utc>) -> Option<NaiveDateTime> {
        let offset = Duration::seconds(i64::from(self.utc_offset(instant)));
        instant.naive_utc().checked_add_signed(offset)
    }

    fn local_date(&self, instant: &DateTime<Utc>) -> Option<NaiveDate> {
        self.local_datetime(instant).map(|local| local.date())
    }

    fn civil_time(&self, instant: &DateTime<Utc>) -> Option<CivilTime> {
        let local = self.local_datetime(instant)?;
        Some(CivilTime {
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            // leap seconds report nanos past 1e9
            nanosecond: local.nanosecond() % 1_000_000_000,
        })
    }
}

impl<T: TimeZone> CivilZone for T {
    fn utc_offset(&self, instant: &DateTime<Utc>) -> i32 {
        self.offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockZone {
    Named(Tz),
    Host,
}

impl ClockZone {
    pub fn abbreviation(&self, instant: &DateTime<Utc>) -> String {
        match self {
            Self::Named(tz) => instant.with_timezone(tz).format("%Z").to_string(),
            Self::Host => instant.with_timezone(&Local).format("%Z").to_string(),
        }
    }

    pub fn short_time(&self, instant: &DateTime<Utc>) -> String {
        const SHORT: &str = "%-I:%M %p";
        match self {
            Self::Named(tz) => instant.with_timezone(tz).format(SHORT).to_string(),
            Self::Host => instant.with_timezone(&Local).format(SHORT).to_string(),
        }
    }
}

impl CivilZone for ClockZone {
    fn utc_offset(&self, instant: &DateTime<Utc>) -> i32 {
        match self {
            Self::Named(tz) => tz.utc_offset(instant),
            Self::Host => Local.utc_offset(instant),
        }
    }
}

pub fn resolve_zone(identifier: &str) -> ClockZone {
    match identifier.parse::<Tz>() {
        Ok(tz) => ClockZone::Named(tz),
        Err(_) => {
            tracing::debug!(zone = identifier, "Unknown time zone, using host zone");
            ClockZone::Host
        }
    }
}

pub fn decimal_hour<Z: CivilZone + ?Sized>(instant: &DateTime<Utc>, zone: &Z) -> f64 {
    match zone.civil_time(instant) {
        Some(civil) => {
            let decimal = civil.day_hours();
            if decimal >= HOURS_PER_FACE {
                decimal - HOURS_PER_FACE
            } else {
                decimal
            }
        }
        None => 0.0,
    }
}

pub fn decimal_minute<Z: CivilZone + ?Sized>(instant: &DateTime<Utc>, zone: &Z) -> f64 {
    zone.civil_time(instant)
        .map(|civil| civil.minute as f64 + civil.second as f64 / 60.0)
        .unwrap_or(0.0)
}

pub fn decimal_second<Z: CivilZone + ?Sized>(instant: &DateTime<Utc>, zone: &Z) -> f64 {
    zone.civil_time(instant)
        .map(|civil| civil.second as f64 + civil.nanosecond as f64 / 1e9)
        .unwrap_or(0.0)
}

/// Wall-clock time on a 24-hour scale, minute precision.
pub fn decimal_day_time<Z: CivilZone + ?Sized>(instant: &DateTime<Utc>, zone: &Z) -> f64 {
    zone.civil_time(instant)
        .map(|civil| civil.day_hours())
        .unwrap_or(0.0)
}

pub fn time_difference<A, B>(instant: &DateTime<Utc>, from: &A, to: &B) -> i32
where
    A: CivilZone + ?Sized,
    B: CivilZone + ?Sized,
{
    to.utc_offset(instant) - from.utc_offset(instant)
}

pub fn format_time_difference(seconds: i32) -> String {
    let sign = match seconds {
        s if s > 0 => "+",
        s if s < 0 => "-",
        _ => "",
    };
    let abs = seconds.unsigned_abs();
    format!("{}{}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

impl TimeSample {
    pub fn at<Z: CivilZone + ?Sized>(instant: &DateTime<Utc>, zone: &Z) -> Self {
        Self {
            hour: decimal_hour(instant, zone),
            minute: decimal_minute(instant, zone),
            second: decimal_second(instant, zone),
        }
    }
}

impl Location {
    pub fn zone(&self) -> ClockZone {
        resolve_zone(&self.time_zone)
    }

    pub fn time_sample(&self, instant: &DateTime<Utc>) -> TimeSample {
        TimeSample::at(instant, &self.zone())
    }

    pub fn zone_abbreviation(&self, instant: &DateTime<Utc>) -> String {
        self.zone().abbreviation(instant)
    }

    pub fn local_time_string(&self, instant: &DateTime<Utc>) -> String {
        self.zone().short_time(instant)
    }

    /// Offset of `other` relative to this location, e.g. `"+2:00"`.
    pub fn time_difference_string(&self, instant: &DateTime<Utc>, other: &Location) -> String {
        format_time_difference(time_difference(instant, &self.zone(), &other.zone()))
    }
}
