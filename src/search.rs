use std::time::Instant;

use crate::config::SearchConfig;
use crate::error::LocationError;
use crate::types::{Coordinate, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub sequence: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Results should be emptied right away.
    Cleared,
    Scheduled { deadline: Instant },
}

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Instant,
}

/// Debounces search-as-you-type input. The host feeds keystrokes through
/// [`SearchDebouncer::input`] and calls [`SearchDebouncer::poll`] from its
/// timer; results are applied only when [`SearchDebouncer::accept`] says the
/// query is still the latest one.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    config: SearchConfig,
    pending: Option<Pending>,
    last_issued: u64,
    // bumped by clears so in-flight results are dropped too
    generation: u64,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchDebouncer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            pending: None,
            last_issued: 0,
            generation: 0,
        }
    }

    pub fn input(&mut self, text: &str, now: Instant) -> InputOutcome {
        if text.is_empty() {
            self.pending = None;
            self.generation = self.last_issued;
            return InputOutcome::Cleared;
        }
        let deadline = now + self.config.debounce;
        self.pending = Some(Pending {
            text: text.to_string(),
            deadline,
        });
        InputOutcome::Scheduled { deadline }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn poll(&mut self, now: Instant) -> Option<SearchQuery> {
        if now < self.pending.as_ref()?.deadline {
            return None;
        }
        let pending = self.pending.take()?;
        self.last_issued += 1;
        tracing::debug!(sequence = self.last_issued, query = %pending.text, "Issuing city search");
        Some(SearchQuery {
            sequence: self.last_issued,
            text: pending.text,
        })
    }

    /// Whether results for `sequence` may replace what is on screen.
    pub fn accept(&self, sequence: u64) -> bool {
        sequence == self.last_issued && sequence > self.generation
    }
}

/// One row returned by the host's completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCompletion {
    pub title: String,
    pub subtitle: String,
}

impl SearchCompletion {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Builds a location once the geocoder has resolved the completion.
    pub fn into_location(
        self,
        coordinate: Coordinate,
        time_zone: impl Into<String>,
    ) -> Result<Location, LocationError> {
        Location::new(self.title, coordinate, time_zone)
    }
}

/// Keeps completions that carry a region subtitle, which is as close to
/// "cities only" as the completion service gets.
pub fn city_completions(results: Vec<SearchCompletion>) -> Vec<SearchCompletion> {
    results
        .into_iter()
        .filter(|c| !c.subtitle.is_empty())
        .collect()
}
