use chrono::{DateTime, Utc};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

pub const MAX_PICKER_DAYS: u64 = 30;

/// A duration split the way the picker wheels show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Saturates at `u64::MAX` for out-of-range parts.
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECONDS_PER_DAY)
            .saturating_add(self.hours.saturating_mul(SECONDS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(SECONDS_PER_MINUTE))
            .saturating_add(self.seconds)
    }

    /// True when every wheel is within its picker range.
    pub fn is_pickable(&self) -> bool {
        self.days < MAX_PICKER_DAYS && self.hours < 24 && self.minutes < 60 && self.seconds < 60
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownState {
    Idle,
    Running {
        remaining_minutes: f64,
        elapsed_minutes: f64,
        /// Whole seconds left, as shown above the dial.
        remaining_seconds: u64,
    },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    duration_seconds: u64,
    started_at: Option<DateTime<Utc>>,
}

impl Countdown {
    pub fn new(duration_seconds: u64) -> Self {
        Self {
            duration_seconds,
            started_at: None,
        }
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Only allowed while idle.
    pub fn set_duration(&mut self, parts: DurationParts) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.duration_seconds = parts.total_seconds();
        true
    }

    pub fn can_start(&self) -> bool {
        self.started_at.is_none() && self.duration_seconds > 0
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if !self.can_start() {
            return false;
        }
        tracing::info!(duration_seconds = self.duration_seconds, "Countdown started");
        self.started_at = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.duration_seconds = 0;
    }

    pub fn state(&self, now: DateTime<Utc>) -> CountdownState {
        let Some(started_at) = self.started_at else {
            return CountdownState::Idle;
        };
        let elapsed = (now - started_at).num_milliseconds().max(0) as f64 / 1000.0;
        let remaining = self.duration_seconds as f64 - elapsed;
        if remaining > 0.0 {
            CountdownState::Running {
                remaining_minutes: remaining / 60.0,
                elapsed_minutes: elapsed / 60.0,
                remaining_seconds: remaining as u64,
            }
        } else {
            CountdownState::Finished
        }
    }
}
