use std::f64::consts::{FRAC_PI_2, TAU};

use crate::types::{HandPolygon, Point, Rect, Segment, Wedge};

/// Puts value 0 at twelve o'clock. Screen space has y pointing down, so
/// growing angles already run clockwise.
pub const HAND_ROTATION_OFFSET: f64 = -FRAC_PI_2;
pub const HAND_WAIST: f64 = 0.67;

pub const HOUR_PERIOD: f64 = 12.0;
pub const MINUTE_PERIOD: f64 = 60.0;

pub const HOUR_MARKS: u32 = 12;
pub const MINUTE_MARKS: u32 = 60;
pub const MAJOR_TICK_INNER: f64 = 0.90;
pub const MINOR_TICK_INNER: f64 = 0.95;
pub const NUMERAL_RADIUS: f64 = 0.80;
pub const BUTTON_FRACTION: f64 = 0.05;
pub const WEDGE_FRACTION: f64 = 0.85;

pub fn hand_angle(value: f64, period: f64) -> f64 {
    TAU * (value / period) + HAND_ROTATION_OFFSET
}

pub fn point_on_circle(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

pub fn hand_tip(center: Point, value: f64, period: f64, length: f64) -> Point {
    point_on_circle(center, hand_angle(value, period), length)
}

pub fn tick_angle(index: u32, total_marks: u32) -> f64 {
    TAU * index as f64 / total_marks.max(1) as f64
}

pub fn tick_mark_segment(
    index: u32,
    total_marks: u32,
    center: Point,
    outer_radius: f64,
    inner_radius_fraction: f64,
) -> Segment {
    let angle = tick_angle(index, total_marks);
    Segment {
        start: point_on_circle(center, angle, outer_radius),
        end: point_on_circle(center, angle, outer_radius * inner_radius_fraction),
    }
}

pub fn tick_mark_segments(
    total_marks: u32,
    center: Point,
    outer_radius: f64,
    inner_radius_fraction: f64,
) -> Vec<Segment> {
    (0..total_marks)
        .map(|i| tick_mark_segment(i, total_marks, center, outer_radius, inner_radius_fraction))
        .collect()
}

/// Hour printed next to major mark `index`; mark 0 sits at three o'clock.
pub fn numeral_label(index: u32) -> u32 {
    match (index + 3) % 12 {
        0 => 12,
        hour => hour,
    }
}

pub fn minute_numeral_label(index: u32) -> u32 {
    numeral_label(index) * 5
}

pub fn numeral_position(index: u32, center: Point, radius: f64, fraction: f64) -> Point {
    point_on_circle(center, tick_angle(index, HOUR_MARKS), radius * fraction)
}

pub fn hand_polygon(center: Point, angle: f64, width: f64, length: f64) -> HandPolygon {
    let (sin, cos) = angle.sin_cos();
    let waist = Point::new(center.x + cos * length * HAND_WAIST, center.y + sin * length * HAND_WAIST);
    // perpendicular, pointing to the left of the hand direction
    let (px, py) = (sin * width, -cos * width);
    HandPolygon {
        pivot: center,
        left_waist: Point::new(waist.x + px, waist.y + py),
        tip: point_on_circle(center, angle, length),
        right_waist: Point::new(waist.x - px, waist.y - py),
    }
}

pub fn center_button(center: Point, clock_diameter: f64) -> Rect {
    Rect::centered(center, clock_diameter * BUTTON_FRACTION)
}

/// Elapsed part of a countdown: starts at the minute hand and runs clockwise
/// back to where the hand started, capped at one revolution.
pub fn countdown_wedge(
    center: Point,
    clock_radius: f64,
    remaining_minutes: f64,
    elapsed_minutes: f64,
) -> Wedge {
    let sweep = if elapsed_minutes.is_finite() {
        (TAU * elapsed_minutes / MINUTE_PERIOD).clamp(0.0, TAU)
    } else {
        0.0
    };
    Wedge {
        center,
        radius: clock_radius * WEDGE_FRACTION,
        start_angle: hand_angle(remaining_minutes.max(0.0), MINUTE_PERIOD),
        sweep,
    }
}
