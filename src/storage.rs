use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::error::LocationError;
use crate::types::{Coordinate, Location};

pub const FIELD_SEPARATOR: char = '|';
pub const RECORD_SEPARATOR: char = '\n';
const ESCAPE: char = '\\';
const RECORD_FIELDS: usize = 5;

fn escape_field(field: &str, out: &mut String) {
    for c in field.chars() {
        match c {
            ESCAPE => out.push_str("\\\\"),
            FIELD_SEPARATOR => out.push_str("\\|"),
            RECORD_SEPARATOR => out.push_str("\\n"),
            other => out.push(other),
        }
    }
}

/// Only `\\`, `\|` and `\n` are escapes. Any other backslash, including a
/// trailing one, is kept as written so records saved before escaping load
/// unchanged.
fn unescape_field(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push(RECORD_SEPARATOR),
            Some(c @ (ESCAPE | FIELD_SEPARATOR)) => out.push(c),
            Some(other) => {
                out.push(ESCAPE);
                out.push(other);
            }
            None => out.push(ESCAPE),
        }
    }
    out
}

/// Splits on `separator` occurrences that are not preceded by an escape.
/// Escapes stay in the returned slices.
fn split_unescaped(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else if c == separator {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, LocationError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LocationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl Location {
    pub fn to_record(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.id().to_string());
        out.push(FIELD_SEPARATOR);
        escape_field(&self.name, &mut out);
        out.push(FIELD_SEPARATOR);
        out.push_str(&self.coordinate().latitude.to_string());
        out.push(FIELD_SEPARATOR);
        out.push_str(&self.coordinate().longitude.to_string());
        out.push(FIELD_SEPARATOR);
        escape_field(&self.time_zone, &mut out);
        out
    }

    pub fn from_record(record: &str) -> Result<Self, LocationError> {
        let fields = split_unescaped(record, FIELD_SEPARATOR);
        if fields.len() == RECORD_FIELDS {
            return Self::from_fields(&fields, unescape_field);
        }
        // unescaped record whose name ends in a backslash
        let legacy: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        if legacy.len() == RECORD_FIELDS {
            return Self::from_fields(&legacy, str::to_string);
        }
        Err(LocationError::FieldCount {
            found: fields.len(),
        })
    }

    fn from_fields(fields: &[&str], decode: impl Fn(&str) -> String) -> Result<Self, LocationError> {
        let id = Uuid::parse_str(fields[0].trim()).map_err(|source| LocationError::InvalidId {
            value: fields[0].to_string(),
            source,
        })?;
        let latitude = parse_degrees("latitude", fields[2])?;
        let longitude = parse_degrees("longitude", fields[3])?;
        Location::with_id(
            id,
            decode(fields[1]),
            Coordinate {
                latitude,
                longitude,
            },
            decode(fields[4]),
        )
    }
}

pub fn encode_locations(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::to_record)
        .collect::<Vec<_>>()
        .join(&RECORD_SEPARATOR.to_string())
}

/// Malformed records are dropped; the rest load in order.
pub fn decode_locations(stored: &str) -> Vec<Location> {
    if stored.trim().is_empty() {
        return Vec::new();
    }
    split_unescaped(stored, RECORD_SEPARATOR)
        .into_iter()
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
        .filter_map(|(index, record)| match Location::from_record(record) {
            Ok(location) => Some(location),
            Err(e) => {
                tracing::warn!(record = index, error = %e, "Skipping malformed stored location");
                None
            }
        })
        .collect()
}

pub fn locations_to_json(locations: &[Location]) -> Result<String, LocationError> {
    Ok(serde_json::to_string(locations)?)
}

pub fn locations_from_json(json: &str) -> Result<Vec<Location>, LocationError> {
    Ok(serde_json::from_str(json)?)
}

/// Key-value string storage owned by the host application.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

type Observer = Box<dyn FnMut(&[Location])>;

/// The saved locations, in display order. Observers see the full list after
/// every change.
#[derive(Default)]
pub struct LocationList {
    locations: Vec<Location>,
    observers: Vec<Observer>,
}

impl fmt::Debug for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationList")
            .field("locations", &self.locations)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl LocationList {
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            observers: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Location::defaults())
    }

    /// Reads the list stored under `key`, or the built-in defaults when
    /// nothing has been stored yet.
    pub fn load<P: PreferenceStore + ?Sized>(prefs: &P, key: &str) -> Self {
        match prefs.get(key).filter(|stored| !stored.is_empty()) {
            Some(stored) => {
                let locations = decode_locations(&stored);
                tracing::debug!(count = locations.len(), "Loaded stored locations");
                Self::new(locations)
            }
            None => Self::with_defaults(),
        }
    }

    /// Writes the encoded list under `key` now and after every change.
    pub fn persist_to<P: PreferenceStore + 'static>(&mut self, prefs: Rc<RefCell<P>>, key: &str) {
        let key = key.to_string();
        prefs.borrow_mut().set(&key, encode_locations(&self.locations));
        self.subscribe(move |locations| {
            prefs.borrow_mut().set(&key, encode_locations(locations));
        });
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&[Location]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn first(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn get(&self, id: Uuid) -> Option<&Location> {
        self.locations.iter().find(|l| l.id() == id)
    }

    pub fn encoded(&self) -> String {
        encode_locations(&self.locations)
    }

    pub fn add(&mut self, location: Location) {
        self.locations.push(location);
        self.notify();
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Location> {
        let index = self.locations.iter().position(|l| l.id() == id)?;
        let removed = self.locations.remove(index);
        self.notify();
        Some(removed)
    }

    pub fn remove_at(&mut self, offsets: &[usize]) {
        let mut offsets: Vec<usize> = offsets
            .iter()
            .copied()
            .filter(|&i| i < self.locations.len())
            .collect();
        if offsets.is_empty() {
            return;
        }
        offsets.sort_unstable();
        offsets.dedup();
        for &i in offsets.iter().rev() {
            self.locations.remove(i);
        }
        self.notify();
    }

    /// Moves the items at `offsets` so they sit, in their current relative
    /// order, before the item that was at `destination`.
    pub fn move_items(&mut self, offsets: &[usize], destination: usize) {
        let len = self.locations.len();
        let mut offsets: Vec<usize> = offsets.iter().copied().filter(|&i| i < len).collect();
        if offsets.is_empty() {
            return;
        }
        offsets.sort_unstable();
        offsets.dedup();
        let destination = destination.min(len);
        let before = offsets.iter().filter(|&&i| i < destination).count();

        let mut moved = Vec::with_capacity(offsets.len());
        for &i in offsets.iter().rev() {
            moved.push(self.locations.remove(i));
        }
        moved.reverse();

        let insert_at = destination - before;
        self.locations.splice(insert_at..insert_at, moved);
        self.notify();
    }

    pub fn replace(&mut self, locations: Vec<Location>) {
        self.locations = locations;
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.locations);
        }
    }
}
