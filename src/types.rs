use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LocationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(LocationError::CoordinateOutOfRange {
                latitude,
                longitude,
            })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A saved place shown as one clock.
///
/// The time zone is kept as the identifier the user picked so that it
/// survives persistence unchanged; see [`crate::zone::resolve_zone`]. The
/// coordinate is always in range, so anything that can be built can also be
/// stored and loaded back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredLocation")]
pub struct Location {
    id: Uuid,
    pub name: String,
    coordinate: Coordinate,
    pub time_zone: String,
}

#[derive(Deserialize)]
struct StoredLocation {
    id: Uuid,
    name: String,
    coordinate: Coordinate,
    time_zone: String,
}

impl TryFrom<StoredLocation> for Location {
    type Error = LocationError;

    fn try_from(stored: StoredLocation) -> Result<Self, Self::Error> {
        Self::with_id(stored.id, stored.name, stored.coordinate, stored.time_zone)
    }
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        coordinate: Coordinate,
        time_zone: impl Into<String>,
    ) -> Result<Self, LocationError> {
        Self::with_id(Uuid::new_v4(), name, coordinate, time_zone)
    }

    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        coordinate: Coordinate,
        time_zone: impl Into<String>,
    ) -> Result<Self, LocationError> {
        let coordinate = Coordinate::new(coordinate.latitude, coordinate.longitude)?;
        Ok(Self {
            id,
            name: name.into(),
            coordinate,
            time_zone: time_zone.into(),
        })
    }

    fn preset(name: &str, latitude: f64, longitude: f64, time_zone: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            coordinate: Coordinate {
                latitude,
                longitude,
            },
            time_zone: time_zone.to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn chicago() -> Self {
        Self::preset("Chicago, IL", 41.8781, -87.6298, "America/Chicago")
    }

    pub fn san_francisco() -> Self {
        Self::preset("San Francisco, CA", 37.779379, -122.418433, "America/Los_Angeles")
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::chicago(), Self::san_francisco()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

impl CivilTime {
    pub fn day_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunEvents {
    Regular {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    PolarDay,
    PolarNight,
}

impl SunEvents {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Regular { sunrise, .. } => Some(*sunrise),
            Self::PolarDay | Self::PolarNight => None,
        }
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Regular { sunset, .. } => Some(*sunset),
            Self::PolarDay | Self::PolarNight => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn centered(center: Point, diameter: f64) -> Self {
        Self {
            x: center.x - diameter / 2.0,
            y: center.y - diameter / 2.0,
            width: diameter,
            height: diameter,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPolygon {
    pub pivot: Point,
    pub left_waist: Point,
    pub tip: Point,
    pub right_waist: Point,
}

impl HandPolygon {
    pub fn points(&self) -> [Point; 4] {
        [self.pivot, self.left_waist, self.tip, self.right_waist]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const BROWN: Color = Color::rgb(153, 102, 51);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const DAY_SKY: Color = Color::rgb(192, 217, 228);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Ellipse {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Rectangle {
        rect: Rect,
        fill: Color,
    },
    Line {
        segment: Segment,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Point>,
        fill: Color,
    },
    Wedge {
        wedge: Wedge,
        fill: Color,
    },
    Text {
        text: String,
        at: Point,
        color: Color,
    },
}
