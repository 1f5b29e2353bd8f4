//! Property Store
//!
//! In-memory registry of properties and the only write path into their
//! event logs. Appends are synchronous and atomically visible to the next
//! read; there is no interleaving to guard against.

use chrono::Local;
use std::collections::HashMap;
use thiserror::Error;

use listing_events::{
    generate_event_id, LogCategory, LogEvent, MetadataValue, Property, PropertyMode,
    DEFAULT_DESCRIPTION,
};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced property does not exist in the store.
    #[error("property not found: {0}")]
    PropertyNotFound(String),
}

/// A broadcast request to every property of a given mode.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    /// Market segment to match against
    pub mode: PropertyMode,
    /// What the seeker is looking for
    pub description: String,
    /// Free-form budget text (e.g. "$500/mo")
    pub budget: String,
    /// Whether the seeker drew a custom search boundary
    pub custom_area: bool,
}

impl MatchRequest {
    pub fn new(
        mode: PropertyMode,
        description: impl Into<String>,
        budget: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            description: description.into(),
            budget: budget.into(),
            custom_area: false,
        }
    }

    pub fn with_custom_area(mut self) -> Self {
        self.custom_area = true;
        self
    }
}

/// In-memory registry of all listed properties.
///
/// Properties are registered once at startup and never removed; their logs
/// only grow. A registration-order index keeps listing output deterministic.
#[derive(Debug, Default)]
pub struct PropertyStore {
    properties: HashMap<String, Property>,
    order: Vec<String>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new property. Re-registering an id replaces the entry
    /// without duplicating it in the listing order.
    pub fn register(&mut self, property: Property) {
        let id = property.id.clone();
        if self.properties.insert(id.clone(), property).is_none() {
            self.order.push(id);
        }
    }

    /// Get a property by ID.
    pub fn get(&self, property_id: &str) -> Option<&Property> {
        self.properties.get(property_id)
    }

    /// Get a mutable property by ID.
    pub fn get_mut(&mut self, property_id: &str) -> Option<&mut Property> {
        self.properties.get_mut(property_id)
    }

    /// All properties in registration order.
    pub fn all_properties(&self) -> impl Iterator<Item = &Property> {
        self.order.iter().filter_map(|id| self.properties.get(id))
    }

    /// Properties of one market segment, in registration order.
    pub fn in_mode(&self, mode: PropertyMode) -> Vec<&Property> {
        self.all_properties().filter(|p| p.mode == mode).collect()
    }

    /// All property IDs in registration order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Total number of log events across all properties.
    pub fn total_log_count(&self) -> usize {
        self.properties.values().map(|p| p.log_count()).sum()
    }

    /// Appends a new system-verified event to a property's log.
    ///
    /// The event id and date are synthesized here; the date is the current
    /// calendar date, not a caller-supplied one. A missing description
    /// falls back to [`DEFAULT_DESCRIPTION`]. Returns a clone of the
    /// stored event, or [`StoreError::PropertyNotFound`] with the store
    /// unchanged.
    pub fn append(
        &mut self,
        property_id: &str,
        category: LogCategory,
        title: impl Into<String>,
        description: Option<String>,
        metadata: Option<HashMap<String, MetadataValue>>,
    ) -> Result<LogEvent, StoreError> {
        let property = self
            .properties
            .get_mut(property_id)
            .ok_or_else(|| StoreError::PropertyNotFound(property_id.to_string()))?;

        let mut event = LogEvent::new(
            generate_event_id(),
            Local::now().date_naive(),
            category,
            title,
            description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        )
        .verified();
        event.metadata = metadata;

        tracing::debug!(
            property = property_id,
            category = %category,
            event_id = %event.id,
            "appending log event"
        );
        property.record(event.clone());
        Ok(event)
    }

    /// Returns a property's log in display order: date descending, ties
    /// keeping append order. Recomputed on every call.
    pub fn read(&self, property_id: &str) -> Result<Vec<LogEvent>, StoreError> {
        self.properties
            .get(property_id)
            .map(Property::timeline)
            .ok_or_else(|| StoreError::PropertyNotFound(property_id.to_string()))
    }

    /// Fan-out write: appends a social "match" event to every property of
    /// the request's mode, plus a user event recording the custom search
    /// boundary when one was drawn. This is the only multi-property write
    /// path. Returns the number of matched properties.
    pub fn post_match_request(&mut self, request: &MatchRequest) -> usize {
        let matched: Vec<String> = self
            .all_properties()
            .filter(|p| p.mode == request.mode)
            .map(|p| p.id.clone())
            .collect();

        for property_id in &matched {
            let match_event = LogEvent::new(
                generate_event_id(),
                Local::now().date_naive(),
                LogCategory::Social,
                "Hot Request Match",
                format!(
                    "Seeker looking for: \"{}\". Budget: {}. System matched this property.",
                    request.description, request.budget
                ),
            )
            .verified()
            .with_metadata("Budget", request.budget.as_str())
            .with_metadata("Type", request.mode.tag());

            let zone_event = request.custom_area.then(|| {
                LogEvent::new(
                    generate_event_id(),
                    Local::now().date_naive(),
                    LogCategory::User,
                    "Custom Search Zone Saved",
                    "User defined a custom polygon boundary for match alerts.",
                )
                .verified()
                .with_metadata("Type", "Map Draw")
                .with_metadata("Area", "Custom Polygon")
            });

            // register() guarantees every ordered id resolves
            if let Some(property) = self.properties.get_mut(property_id) {
                property.record(match_event);
                if let Some(zone_event) = zone_event {
                    property.record(zone_event);
                }
            }
        }

        tracing::info!(
            mode = %request.mode,
            matched = matched.len(),
            custom_area = request.custom_area,
            "fan-out match request posted"
        );
        matched.len()
    }
}
