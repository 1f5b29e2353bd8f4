//! Property Types
//!
//! The listed entity that owns an event log, plus its display attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::event::LogEvent;

/// Market-segment tag partitioning properties.
///
/// Used only for filtering by consumers; the scoring engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyMode {
    Living,
    Business,
    Production,
    Travel,
}

impl PropertyMode {
    /// Returns all mode variants.
    pub fn all() -> &'static [PropertyMode] {
        &[
            PropertyMode::Living,
            PropertyMode::Business,
            PropertyMode::Production,
            PropertyMode::Travel,
        ]
    }

    /// Wire tag used in serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            PropertyMode::Living => "LIVING",
            PropertyMode::Business => "BUSINESS",
            PropertyMode::Production => "PRODUCTION",
            PropertyMode::Travel => "TRAVEL",
        }
    }
}

impl fmt::Display for PropertyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error type for parsing a [`PropertyMode`] from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown property mode: '{}'", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for PropertyMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyMode::all()
            .iter()
            .copied()
            .find(|m| m.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// A labeled display attribute (e.g. "Size" / "5 Acres").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

impl Spec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Geographic position of a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A listed property and its event log.
///
/// The log is exclusively owned by the property and only ever grows.
/// Storage order is most-recent-append-first; [`Property::timeline`]
/// derives the date-sorted display order on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier (e.g., "prop-1")
    pub id: String,
    /// Display title
    pub title: String,
    /// Street address or locality
    pub address: String,
    /// Asking price or rate, in whole currency units
    pub price: u64,
    /// ISO currency code
    pub currency: String,
    /// Market segment
    pub mode: PropertyMode,
    /// Cover image URL
    pub image: String,
    /// Labeled display attributes
    pub specs: Vec<Spec>,
    /// Static trust score shown on list views.
    ///
    /// Not recomputed from the log; the dynamically computed health score
    /// lives in the appraisal crate and the two are not kept in sync.
    pub summary_score: u8,
    /// Geographic position
    pub coordinates: Coordinates,
    /// Event log, newest append first
    pub logs: Vec<LogEvent>,
}

impl Property {
    /// Creates a property with no specs, logs, or image.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        address: impl Into<String>,
        price: u64,
        mode: PropertyMode,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            address: address.into(),
            price,
            currency: "USD".to_string(),
            mode,
            image: String::new(),
            specs: Vec::new(),
            summary_score: 0,
            coordinates: Coordinates::new(0.0, 0.0),
            logs: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_specs(mut self, specs: Vec<Spec>) -> Self {
        self.specs = specs;
        self
    }

    pub fn with_summary_score(mut self, score: u8) -> Self {
        self.summary_score = score;
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Coordinates::new(lat, lng);
        self
    }

    /// Seeds the log in append order: the last event listed ends up first.
    pub fn with_logs(mut self, logs: Vec<LogEvent>) -> Self {
        for event in logs {
            self.record(event);
        }
        self
    }

    /// Appends an event at the head of the log (most recent append first).
    pub fn record(&mut self, event: LogEvent) {
        self.logs.insert(0, event);
    }

    /// Number of logged events.
    pub fn log_count(&self) -> usize {
        self.logs.len()
    }

    /// Returns the log in display order: date descending, ties keeping
    /// storage order. Recomputed on every call since the log can grow
    /// between reads.
    pub fn timeline(&self) -> Vec<LogEvent> {
        let mut sorted = self.logs.clone();
        // sort_by is stable, so equal dates preserve storage order
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
