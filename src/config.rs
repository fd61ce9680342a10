use std::time::Duration;

use crate::types::Color;

pub const LOCATIONS_PREFERENCE_KEY: &str = "Locations";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    pub width: f64,
    /// Fraction of the clock radius.
    pub length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub face: Color,
    pub outline: Color,
    pub hands: Color,
}

impl Palette {
    pub const DAY: Palette = Palette {
        face: Color::DAY_SKY,
        outline: Color::BLACK,
        hands: Color::BLACK,
    };

    pub const NIGHT: Palette = Palette {
        face: Color::BLACK,
        outline: Color::WHITE,
        hands: Color::WHITE,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFaceConfig {
    /// Fraction of the shorter canvas side taken by the clock.
    pub clock_fraction: f64,
    pub outline_width: f64,
    pub major_tick_fraction: f64,
    pub minor_tick_fraction: f64,
    pub show_minor_ticks: bool,
    pub show_numerals: bool,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
    pub second_hand_color: Color,
    pub day: Palette,
    pub night: Palette,
}

impl Default for ClockFaceConfig {
    fn default() -> Self {
        Self {
            clock_fraction: 0.9,
            outline_width: 2.0,
            major_tick_fraction: 0.90,
            minor_tick_fraction: 0.95,
            show_minor_ticks: false,
            show_numerals: false,
            hour_hand: HandStyle {
                width: 7.5,
                length: 0.65,
            },
            minute_hand: HandStyle {
                width: 5.0,
                length: 0.75,
            },
            second_hand: HandStyle {
                width: 2.0,
                length: 0.85,
            },
            second_hand_color: Color::RED,
            day: Palette::DAY,
            night: Palette::NIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownFaceConfig {
    pub clock_fraction: f64,
    pub bezel_margin: f64,
    pub bezel_width: f64,
    pub bezel_color: Color,
    pub face_color: Color,
    pub wedge_color: Color,
    pub minor_tick_color: Color,
    pub minor_tick_width: f64,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
}

impl Default for CountdownFaceConfig {
    fn default() -> Self {
        Self {
            clock_fraction: 0.9,
            bezel_margin: 10.0,
            bezel_width: 5.0,
            bezel_color: Color::BROWN,
            face_color: Color::DAY_SKY,
            // 70% opacity
            wedge_color: Color::RED.with_alpha(179),
            minor_tick_color: Color::GRAY,
            minor_tick_width: 1.5,
            hour_hand: HandStyle {
                width: 7.5,
                length: 0.65,
            },
            minute_hand: HandStyle {
                width: 5.0,
                length: 0.75,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    pub night_color: Color,
    pub day_color: Color,
    pub marker_color: Color,
    pub marker_width: f64,
    pub now_color: Color,
    pub now_width: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            night_color: Color::BLACK,
            day_color: Color::BLUE,
            marker_color: Color::YELLOW,
            marker_width: 3.0,
            now_color: Color::WHITE,
            now_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(200),
        }
    }
}
