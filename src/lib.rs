pub mod astro;
pub mod config;
pub mod countdown;
pub mod error;
pub mod geometry;
pub mod render;
pub mod search;
pub mod solar;
pub mod storage;
pub mod timeline;
pub mod types;
pub mod zone;

pub use config::{
    ClockFaceConfig, CountdownFaceConfig, HandStyle, Palette, SearchConfig, TimelineConfig,
    LOCATIONS_PREFERENCE_KEY,
};

pub use countdown::{Countdown, CountdownState, DurationParts};

pub use error::LocationError;

pub use geometry::{
    center_button, countdown_wedge, hand_angle, hand_polygon, hand_tip, minute_numeral_label,
    numeral_label, numeral_position, tick_mark_segment, tick_mark_segments, HAND_ROTATION_OFFSET,
};

pub use render::{clock_face, countdown_face, day_night_band, location_clock_face, Size};

pub use search::{city_completions, InputOutcome, SearchCompletion, SearchDebouncer, SearchQuery};

pub use solar::{is_daytime, is_daytime_with, sunrise, sunset, CachedSolar, HorizonSolar, SolarCalculator};

pub use storage::{
    decode_locations, encode_locations, locations_from_json, locations_to_json, LocationList,
    MemoryPreferences, PreferenceStore,
};

pub use timeline::{sunrise_decimal, sunset_decimal, DayTimeline, TimelineSegment, TimelineStrip};

pub use types::{
    CivilTime, Color, Coordinate, DrawCommand, HandPolygon, Location, Point, Rect, Segment,
    Stroke, SunEvents, TimeSample, Wedge,
};

pub use zone::{
    decimal_day_time, decimal_hour, decimal_minute, decimal_second, format_time_difference,
    resolve_zone, time_difference, CivilZone, ClockZone,
};
