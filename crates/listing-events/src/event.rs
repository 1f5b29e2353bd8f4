//! Log Event Types
//!
//! The immutable, categorized records that make up a property's history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Placeholder description for programmatic appends that omit their own.
pub const DEFAULT_DESCRIPTION: &str = "User initiated action via Cumulative Dashboard.";

/// Closed set of log event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogCategory {
    Trust,
    Legal,
    Spatial,
    Financial,
    Maintenance,
    Social,
    Media,
    Policy,
    Communication,
    User,
}

impl LogCategory {
    /// Returns all category variants.
    pub fn all() -> &'static [LogCategory] {
        &[
            LogCategory::Trust,
            LogCategory::Legal,
            LogCategory::Spatial,
            LogCategory::Financial,
            LogCategory::Maintenance,
            LogCategory::Social,
            LogCategory::Media,
            LogCategory::Policy,
            LogCategory::Communication,
            LogCategory::User,
        ]
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            LogCategory::Trust => "Trust & Verification",
            LogCategory::Legal => "Legal & Contracts",
            LogCategory::Spatial => "Maps & Boundaries",
            LogCategory::Financial => "Financial",
            LogCategory::Maintenance => "Maintenance",
            LogCategory::Social => "Social",
            LogCategory::Media => "Media",
            LogCategory::Policy => "Policy",
            LogCategory::Communication => "Communication",
            LogCategory::User => "User Action",
        }
    }

    /// Wire tag used in serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            LogCategory::Trust => "TRUST",
            LogCategory::Legal => "LEGAL",
            LogCategory::Spatial => "SPATIAL",
            LogCategory::Financial => "FINANCIAL",
            LogCategory::Maintenance => "MAINTENANCE",
            LogCategory::Social => "SOCIAL",
            LogCategory::Media => "MEDIA",
            LogCategory::Policy => "POLICY",
            LogCategory::Communication => "COMMUNICATION",
            LogCategory::User => "USER",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error type for parsing a [`LogCategory`] from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for LogCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogCategory::all()
            .iter()
            .copied()
            .find(|c| c.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Structured annotation value: free text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) => write!(f, "{}", s),
            MetadataValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::Number(n)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::Number(n as f64)
    }
}

/// A single entry in a property's history.
///
/// Events are append-only: once created they are never edited or removed.
/// The `date` is the logical event date, not necessarily the wall-clock
/// moment the record was appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Unique identifier (e.g., "evt_1717440000000_0001")
    pub id: String,
    /// Calendar date of the event (ISO 8601, no time component)
    pub date: NaiveDate,
    /// Category tag
    pub category: LogCategory,
    /// Short human-readable label
    pub title: String,
    /// Free-text detail; also scanned for risk keywords by the appraisal crate
    pub description: String,
    /// Whether the event's claim has been independently corroborated
    pub verified: bool,
    /// Optional structured annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, MetadataValue>>,
}

impl LogEvent {
    /// Creates an unverified event with no metadata.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        category: LogCategory,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            category,
            title: title.into(),
            description: description.into(),
            verified: false,
            metadata: None,
        }
    }

    /// Marks the event as independently corroborated.
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Attaches a metadata annotation, creating the map on first use.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Serializes the event as a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

static EVENT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates an event ID unique for the lifetime of the process.
///
/// Combines epoch milliseconds with a process-wide sequence suffix so that
/// two appends within the same millisecond still get distinct ids.
pub fn generate_event_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = EVENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("evt_{}_{:04}", millis, seq)
}
