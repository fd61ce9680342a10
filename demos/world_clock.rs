use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

use world_clock::config::{ClockFaceConfig, CountdownFaceConfig, TimelineConfig, LOCATIONS_PREFERENCE_KEY};
use world_clock::countdown::{Countdown, CountdownState, DurationParts};
use world_clock::render::{countdown_face, day_night_band, location_clock_face, Size};
use world_clock::storage::{LocationList, MemoryPreferences, PreferenceStore};
use world_clock::timeline::TimelineStrip;
use world_clock::types::{Coordinate, Location};
use world_clock::zone::CivilZone;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let now = Utc::now();
    let prefs = Rc::new(RefCell::new(MemoryPreferences::new()));
    let mut locations = LocationList::load(&*prefs.borrow(), LOCATIONS_PREFERENCE_KEY);
    locations.persist_to(Rc::clone(&prefs), LOCATIONS_PREFERENCE_KEY);
    locations.add(Location::new(
        "Tokyo, Japan",
        Coordinate::new(35.6762, 139.6503).unwrap(),
        "Asia/Tokyo",
    )
    .unwrap());

    let Some(home) = locations.first().cloned() else {
        return;
    };

    println!("=== World Clock ===");
    println!("Now: {}", now);
    println!();
    for location in locations.as_slice() {
        let sample = location.time_sample(&now);
        let today = location.zone().local_date(&now).unwrap_or_else(|| now.date_naive());
        println!("--- {} ({}) ---", location.name, location.zone_abbreviation(&now));
        println!("Local time: {}", location.local_time_string(&now));
        println!("Versus {}: {}", home.name, location.time_difference_string(&now, &home));
        println!(
            "Hands: hour {:.2}, minute {:.2}, second {:.2}",
            sample.hour, sample.minute, sample.second
        );
        println!("Daytime: {}", location.is_daytime(&now));
        match (location.sunrise_on(today), location.sunset_on(today)) {
            (Some(rise), Some(set)) => println!("Sunrise: {}  Sunset: {}", rise, set),
            _ => println!("No sunrise or sunset today"),
        }

        let face = location_clock_face(location, &now, Size::new(200.0, 200.0), &ClockFaceConfig::default());
        let strip = TimelineStrip::at(&now, location, 240.0);
        let band = day_night_band(&strip, 30.0, &TimelineConfig::default());
        println!(
            "Daylight: {:.2}h to {:.2}h ({} face commands, {} band commands)",
            strip.today.sunrise_hour,
            strip.today.sunset_hour,
            face.len(),
            band.len()
        );
        println!();
    }

    let mut countdown = Countdown::default();
    countdown.set_duration(DurationParts {
        days: 0,
        hours: 0,
        minutes: 25,
        seconds: 0,
    });
    countdown.start(now);
    let later = now + Duration::minutes(10);
    println!("--- Countdown ---");
    if let CountdownState::Running {
        remaining_minutes,
        remaining_seconds,
        ..
    } = countdown.state(later)
    {
        let parts = DurationParts::from_seconds(remaining_seconds);
        println!(
            "After 10 minutes: {:.1} minutes left ({}h {:02}m {:02}s)",
            remaining_minutes, parts.hours, parts.minutes, parts.seconds
        );
    }
    let dial = countdown_face(Size::new(300.0, 300.0), &countdown.state(later), &CountdownFaceConfig::default());
    println!("Dial commands: {}", dial.len());
    println!();
    println!(
        "Stored: {}",
        prefs.borrow().get(LOCATIONS_PREFERENCE_KEY).unwrap_or_default().replace('\n', " / ")
    );
}
