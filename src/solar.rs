use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::astro::{
    day_of_year, horizon_hour_angle, local_solar_date, solar_declination, solar_noon_minutes,
    HorizonCrossing, MINUTES_PER_DEGREE, SUNRISE_ALTITUDE,
};
use crate::types::{Coordinate, Location, SunEvents};

/// Source of sunrise/sunset times. `None` means the inputs could not be
/// evaluated at all, which callers treat as night.
pub trait SolarCalculator {
    fn sun_events(&self, date: NaiveDate, coordinate: Coordinate) -> Option<SunEvents>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonSolar {
    pub altitude: f64,
}

impl Default for HorizonSolar {
    fn default() -> Self {
        Self {
            altitude: SUNRISE_ALTITUDE,
        }
    }
}

impl SolarCalculator for HorizonSolar {
    fn sun_events(&self, date: NaiveDate, coordinate: Coordinate) -> Option<SunEvents> {
        if !coordinate.is_valid() {
            return None;
        }
        let n = day_of_year(date);
        let declination = solar_declination(n);
        match horizon_hour_angle(coordinate.latitude, declination, self.altitude)? {
            HorizonCrossing::AlwaysAbove => Some(SunEvents::PolarDay),
            HorizonCrossing::AlwaysBelow => Some(SunEvents::PolarNight),
            HorizonCrossing::HalfDay(h) => {
                let noon = solar_noon_minutes(coordinate.longitude, n);
                let half_day = h * MINUTES_PER_DEGREE;
                let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
                Some(SunEvents::Regular {
                    sunrise: offset_minutes(midnight, noon - half_day)?,
                    sunset: offset_minutes(midnight, noon + half_day)?,
                })
            }
        }
    }
}

fn offset_minutes(base: DateTime<Utc>, minutes: f64) -> Option<DateTime<Utc>> {
    base.checked_add_signed(Duration::milliseconds((minutes * 60_000.0).round() as i64))
}

type SolarKey = (NaiveDate, u64, u64);

/// Memoizes another calculator; meant to live for one render tick.
#[derive(Debug, Default)]
pub struct CachedSolar<C> {
    inner: C,
    cache: RefCell<HashMap<SolarKey, Option<SunEvents>>>,
}

impl<C: SolarCalculator> CachedSolar<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<C: SolarCalculator> SolarCalculator for CachedSolar<C> {
    fn sun_events(&self, date: NaiveDate, coordinate: Coordinate) -> Option<SunEvents> {
        let key = (
            date,
            coordinate.latitude.to_bits(),
            coordinate.longitude.to_bits(),
        );
        if let Some(hit) = self.cache.borrow().get(&key) {
            return *hit;
        }
        let events = self.inner.sun_events(date, coordinate);
        self.cache.borrow_mut().insert(key, events);
        events
    }
}

pub fn sunrise(date: NaiveDate, coordinate: Coordinate) -> Option<DateTime<Utc>> {
    HorizonSolar::default()
        .sun_events(date, coordinate)?
        .sunrise()
}

pub fn sunset(date: NaiveDate, coordinate: Coordinate) -> Option<DateTime<Utc>> {
    HorizonSolar::default()
        .sun_events(date, coordinate)?
        .sunset()
}

pub fn is_daytime(instant: &DateTime<Utc>, coordinate: Coordinate) -> bool {
    is_daytime_with(&HorizonSolar::default(), instant, coordinate)
}

pub fn is_daytime_with<C: SolarCalculator + ?Sized>(
    calculator: &C,
    instant: &DateTime<Utc>,
    coordinate: Coordinate,
) -> bool {
    if !coordinate.is_valid() {
        tracing::debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "Coordinate out of range, rendering as night"
        );
        return false;
    }
    let date = local_solar_date(instant, coordinate.longitude);
    match calculator.sun_events(date, coordinate) {
        Some(SunEvents::Regular { sunrise, sunset }) => sunrise <= *instant && *instant < sunset,
        Some(SunEvents::PolarDay | SunEvents::PolarNight) => false,
        None => {
            tracing::debug!(
                latitude = coordinate.latitude,
                longitude = coordinate.longitude,
                "No solar result, rendering as night"
            );
            false
        }
    }
}

impl Location {
    pub fn sunrise_on(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        sunrise(date, self.coordinate())
    }

    pub fn sunset_on(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        sunset(date, self.coordinate())
    }

    pub fn is_daytime(&self, instant: &DateTime<Utc>) -> bool {
        is_daytime(instant, self.coordinate())
    }
}
