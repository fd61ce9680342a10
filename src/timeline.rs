use chrono::{DateTime, NaiveDate, Utc};

use crate::solar::{HorizonSolar, SolarCalculator};
use crate::types::{Location, SunEvents};
use crate::zone::{decimal_day_time, CivilZone};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const MARKER_HOURS: [f64; 2] = [0.0, 12.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSegment {
    pub start: f64,
    pub end: f64,
    pub daylight: bool,
}

impl TimelineSegment {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Horizontal layout of one day: night, daylight, night.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTimeline {
    pub date: NaiveDate,
    pub width: f64,
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
    pub segments: [TimelineSegment; 3],
    pub markers: [f64; 2],
}

fn hour_to_x(hour: f64, width: f64) -> f64 {
    hour * width / HOURS_PER_DAY
}

/// Local sunrise and sunset on a 24-hour scale. Missing events fall back to
/// the day edges; polar night collapses the daylight band at noon.
pub fn daylight_hours<C: SolarCalculator + ?Sized>(
    calculator: &C,
    date: NaiveDate,
    location: &Location,
) -> (f64, f64) {
    let zone = location.zone();
    let events = calculator.sun_events(date, location.coordinate());
    let (sunrise, sunset) = match events {
        Some(SunEvents::Regular { sunrise, sunset }) => (
            zone.civil_time(&sunrise)
                .map(|civil| civil.day_hours())
                .unwrap_or(0.0),
            zone.civil_time(&sunset)
                .map(|civil| civil.day_hours())
                .unwrap_or(HOURS_PER_DAY),
        ),
        Some(SunEvents::PolarNight) => (12.0, 12.0),
        Some(SunEvents::PolarDay) | None => (0.0, HOURS_PER_DAY),
    };
    // sunset past local midnight
    if sunset < sunrise {
        (sunrise, HOURS_PER_DAY)
    } else {
        (sunrise, sunset)
    }
}

pub fn sunrise_decimal(date: NaiveDate, location: &Location) -> f64 {
    daylight_hours(&HorizonSolar::default(), date, location).0
}

pub fn sunset_decimal(date: NaiveDate, location: &Location) -> f64 {
    daylight_hours(&HorizonSolar::default(), date, location).1
}

impl DayTimeline {
    pub fn for_day(date: NaiveDate, location: &Location, width: f64) -> Self {
        Self::with_calculator(&HorizonSolar::default(), date, location, width)
    }

    pub fn with_calculator<C: SolarCalculator + ?Sized>(
        calculator: &C,
        date: NaiveDate,
        location: &Location,
        width: f64,
    ) -> Self {
        let (sunrise_hour, sunset_hour) = daylight_hours(calculator, date, location);
        let sunrise_x = hour_to_x(sunrise_hour, width);
        let sunset_x = hour_to_x(sunset_hour, width);
        Self {
            date,
            width,
            sunrise_hour,
            sunset_hour,
            segments: [
                TimelineSegment {
                    start: 0.0,
                    end: sunrise_x,
                    daylight: false,
                },
                TimelineSegment {
                    start: sunrise_x,
                    end: sunset_x,
                    daylight: true,
                },
                TimelineSegment {
                    start: sunset_x,
                    end: width,
                    daylight: false,
                },
            ],
            markers: MARKER_HOURS.map(|hour| hour_to_x(hour, width)),
        }
    }
}

/// Today and tomorrow laid side by side and scrolled so "now" sits one
/// hour from the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStrip {
    pub today: DayTimeline,
    pub tomorrow: Option<DayTimeline>,
    pub now_x: f64,
    pub scroll_offset: f64,
}

impl TimelineStrip {
    pub fn at(instant: &DateTime<Utc>, location: &Location, width: f64) -> Self {
        Self::with_calculator(&HorizonSolar::default(), instant, location, width)
    }

    pub fn with_calculator<C: SolarCalculator + ?Sized>(
        calculator: &C,
        instant: &DateTime<Utc>,
        location: &Location,
        width: f64,
    ) -> Self {
        let zone = location.zone();
        let today = zone
            .local_date(instant)
            .unwrap_or_else(|| instant.date_naive());
        let now = decimal_day_time(instant, &zone);
        Self {
            today: DayTimeline::with_calculator(calculator, today, location, width),
            tomorrow: today
                .succ_opt()
                .map(|date| DayTimeline::with_calculator(calculator, date, location, width)),
            now_x: hour_to_x(now, width),
            scroll_offset: -hour_to_x(now - 1.0, width),
        }
    }
}
