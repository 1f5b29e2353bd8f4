//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // listing-events = { path = "../listing-events", features = ["test-fixtures"] }
//!
//! use listing_events::fixtures;
//!
//! let logs = fixtures::sample_logs();
//! let property = fixtures::sample_property();
//! ```

use crate::{LogEvent, Property, PropertyMode, Spec};

/// Returns sample log events from the fixtures file.
///
/// Contains 8 diverse events:
/// - trust, spatial, legal, social, and financial entries
/// - 2 maintenance entries
/// - 1 unverified entry (pending corroboration)
/// - 2 entries carrying risk keywords (one matching two keywords)
/// - 2 entries sharing the same date (for sort-stability tests)
pub fn sample_logs() -> Vec<LogEvent> {
    let jsonl = include_str!("../tests/fixtures/sample_logs.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            LogEvent::from_jsonl(l)
                .unwrap_or_else(|e| panic!("Failed to parse log line: {}\nError: {}", l, e))
        })
        .collect()
}

/// Returns a specific log event by ID from the sample logs.
pub fn get_log(event_id: &str) -> Option<LogEvent> {
    sample_logs().into_iter().find(|e| e.id == event_id)
}

/// Returns the double-keyword maintenance failure event from the samples.
pub fn failed_inspection_event() -> LogEvent {
    get_log("ev_fix_06").expect("Failed inspection event should exist in fixtures")
}

/// Returns a property seeded with the full sample log.
pub fn sample_property() -> Property {
    Property::new(
        "prop-fixture",
        "Corner Retail Unit",
        "14 Main St, Cape Town",
        180_000,
        PropertyMode::Business,
    )
    .with_summary_score(74)
    .with_coordinates(-33.92, 18.42)
    .with_specs(vec![
        Spec::new("Area", "150 sqm"),
        Spec::new("Frontage", "12m"),
    ])
    .with_logs(sample_logs())
}
