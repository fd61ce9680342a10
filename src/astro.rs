use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
/// Geometric altitude of the sun's center at apparent sunrise/sunset,
/// refraction and solar radius included.
pub const SUNRISE_ALTITUDE: f64 = -0.833;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

/// Minutes between apparent and mean solar time.
pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

/// Solar noon for `n` at `longitude`, in minutes after 00:00 UTC.
pub fn solar_noon_minutes(longitude: f64, n: i32) -> f64 {
    720.0 - MINUTES_PER_DEGREE * longitude - equation_of_time(n)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCrossing {
    /// Half-width of the day as an hour angle in degrees.
    HalfDay(f64),
    AlwaysAbove,
    AlwaysBelow,
}

pub fn horizon_hour_angle(latitude: f64, declination: f64, altitude: f64) -> Option<HorizonCrossing> {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let cos_h = (deg_to_rad(altitude).sin() - lat_rad.sin() * dec_rad.sin())
        / (lat_rad.cos() * dec_rad.cos());

    if cos_h.is_nan() {
        None
    } else if cos_h >= 1.0 {
        Some(HorizonCrossing::AlwaysBelow)
    } else if cos_h <= -1.0 {
        Some(HorizonCrossing::AlwaysAbove)
    } else {
        Some(HorizonCrossing::HalfDay(rad_to_deg(cos_h.acos())))
    }
}

/// Calendar date of local mean solar time at `longitude`.
pub fn local_solar_date(instant: &DateTime<Utc>, longitude: f64) -> NaiveDate {
    chrono::Duration::try_seconds((MINUTES_PER_DEGREE * longitude * 60.0).round() as i64)
        .and_then(|shift| instant.checked_add_signed(shift))
        .map(|t| t.date_naive())
        .unwrap_or_else(|| instant.date_naive())
}
