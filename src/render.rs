use chrono::{DateTime, Utc};

use crate::config::{ClockFaceConfig, CountdownFaceConfig, HandStyle, TimelineConfig};
use crate::countdown::CountdownState;
use crate::geometry::{
    center_button, countdown_wedge, hand_angle, hand_polygon, minute_numeral_label,
    numeral_label, numeral_position, tick_mark_segments, HOUR_MARKS, HOUR_PERIOD,
    MAJOR_TICK_INNER, MINOR_TICK_INNER, MINUTE_MARKS, MINUTE_PERIOD, NUMERAL_RADIUS,
};
use crate::timeline::{DayTimeline, TimelineStrip};
use crate::types::{Color, DrawCommand, Location, Point, Rect, Segment, Stroke, TimeSample};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

fn hand(center: Point, value: f64, period: f64, style: HandStyle, radius: f64, fill: Color) -> DrawCommand {
    let polygon = hand_polygon(center, hand_angle(value, period), style.width, radius * style.length);
    DrawCommand::Polygon {
        points: polygon.points().to_vec(),
        fill,
    }
}

fn tick_lines(total: u32, center: Point, radius: f64, fraction: f64, stroke: Stroke) -> impl Iterator<Item = DrawCommand> {
    tick_mark_segments(total, center, radius, fraction)
        .into_iter()
        .map(move |segment| DrawCommand::Line { segment, stroke })
}

fn numerals(center: Point, radius: f64, label: fn(u32) -> u32, color: Color) -> impl Iterator<Item = DrawCommand> {
    (0..HOUR_MARKS).map(move |i| DrawCommand::Text {
        text: label(i).to_string(),
        at: numeral_position(i, center, radius, NUMERAL_RADIUS),
        color,
    })
}

/// Analog face for one location, anchored at the top-left square of the canvas.
pub fn clock_face(size: Size, sample: &TimeSample, daytime: bool, config: &ClockFaceConfig) -> Vec<DrawCommand> {
    let side = size.min_side();
    let clock_size = side * config.clock_fraction;
    let offset = (side - clock_size) / 2.0;
    let face = Rect {
        x: offset,
        y: offset,
        width: clock_size,
        height: clock_size,
    };
    let radius = clock_size / 2.0;
    let center = face.center();
    let palette = if daytime { config.day } else { config.night };
    let outline = Stroke {
        color: palette.outline,
        width: config.outline_width,
    };

    let mut commands = vec![DrawCommand::Ellipse {
        rect: face,
        fill: Some(palette.face),
        stroke: Some(outline),
    }];

    if config.show_minor_ticks {
        let thin = Stroke {
            width: config.outline_width / 2.0,
            ..outline
        };
        commands.extend(tick_lines(MINUTE_MARKS, center, radius, config.minor_tick_fraction, thin));
    }
    commands.extend(tick_lines(HOUR_MARKS, center, radius, config.major_tick_fraction, outline));
    if config.show_numerals {
        commands.extend(numerals(center, radius, numeral_label, palette.outline));
    }

    commands.push(hand(center, sample.hour, HOUR_PERIOD, config.hour_hand, radius, palette.hands));
    commands.push(hand(center, sample.minute, MINUTE_PERIOD, config.minute_hand, radius, palette.hands));
    commands.push(hand(
        center,
        sample.second,
        MINUTE_PERIOD,
        config.second_hand,
        radius,
        config.second_hand_color,
    ));
    commands.push(DrawCommand::Ellipse {
        rect: center_button(center, clock_size),
        fill: Some(palette.hands),
        stroke: None,
    });
    commands
}

pub fn location_clock_face(
    location: &Location,
    instant: &DateTime<Utc>,
    size: Size,
    config: &ClockFaceConfig,
) -> Vec<DrawCommand> {
    clock_face(size, &location.time_sample(instant), location.is_daytime(instant), config)
}

/// Countdown dial centered in the canvas. Nothing is drawn unless the
/// countdown is running.
pub fn countdown_face(size: Size, state: &CountdownState, config: &CountdownFaceConfig) -> Vec<DrawCommand> {
    let CountdownState::Running {
        remaining_minutes,
        elapsed_minutes,
        ..
    } = *state
    else {
        return Vec::new();
    };

    let side = size.min_side();
    let clock_size = side * config.clock_fraction;
    let radius = clock_size / 2.0;
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let face = Rect::centered(center, clock_size);
    let black = |width| Stroke {
        color: Color::BLACK,
        width,
    };

    let mut commands = vec![
        DrawCommand::Ellipse {
            rect: face.inset(-config.bezel_margin),
            fill: Some(config.bezel_color),
            stroke: Some(black(config.bezel_width)),
        },
        DrawCommand::Ellipse {
            rect: face,
            fill: Some(config.face_color),
            stroke: Some(black(2.0)),
        },
        DrawCommand::Wedge {
            wedge: countdown_wedge(center, radius, remaining_minutes, elapsed_minutes),
            fill: config.wedge_color,
        },
    ];

    let minor = Stroke {
        color: config.minor_tick_color,
        width: config.minor_tick_width,
    };
    commands.extend(tick_lines(MINUTE_MARKS, center, radius, MINOR_TICK_INNER, minor));
    commands.extend(tick_lines(HOUR_MARKS, center, radius, MAJOR_TICK_INNER, black(2.0)));
    commands.extend(numerals(center, radius, minute_numeral_label, config.minor_tick_color));

    commands.push(hand(center, HOUR_PERIOD, HOUR_PERIOD, config.hour_hand, radius, Color::BLACK));
    commands.push(hand(
        center,
        remaining_minutes,
        MINUTE_PERIOD,
        config.minute_hand,
        radius,
        Color::BLACK,
    ));
    commands
}

fn day_commands(day: &DayTimeline, x: f64, height: f64, config: &TimelineConfig, out: &mut Vec<DrawCommand>) {
    for segment in day.segments.iter().filter(|s| s.width() > 0.0) {
        out.push(DrawCommand::Rectangle {
            rect: Rect {
                x: x + segment.start,
                y: 0.0,
                width: segment.width(),
                height,
            },
            fill: if segment.daylight {
                config.day_color
            } else {
                config.night_color
            },
        });
    }
    for marker in day.markers {
        out.push(DrawCommand::Line {
            segment: Segment {
                start: Point::new(x + marker, 0.0),
                end: Point::new(x + marker, height),
            },
            stroke: Stroke {
                color: config.marker_color,
                width: config.marker_width,
            },
        });
    }
}

/// Day/night band for a list row, already scrolled into place.
pub fn day_night_band(strip: &TimelineStrip, height: f64, config: &TimelineConfig) -> Vec<DrawCommand> {
    let origin = strip.scroll_offset;
    let mut commands = Vec::new();
    day_commands(&strip.today, origin, height, config, &mut commands);
    if let Some(tomorrow) = &strip.tomorrow {
        day_commands(tomorrow, origin + strip.today.width, height, config, &mut commands);
    }
    let now_x = origin + strip.now_x;
    commands.push(DrawCommand::Line {
        segment: Segment {
            start: Point::new(now_x, 0.0),
            end: Point::new(now_x, height),
        },
        stroke: Stroke {
            color: config.now_color,
            width: config.now_width,
        },
    });
    commands
}
