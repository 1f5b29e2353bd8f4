//! Plain-text rendering of the dashboard and property detail views.

use std::fmt::Write as _;

use appraisal::{compute_health_score, score_breakdown, system_analysis, HealthTier};
use listing_core::{PropertyStore, StoreError};
use listing_events::{Property, PropertyMode};

/// One dashboard row: mode, title, price, static trust score, computed
/// health score with tier.
fn dashboard_line(property: &Property) -> String {
    let health = compute_health_score(&property.logs);
    let tier = HealthTier::for_score(health);
    format!(
        "[{:<10}] {:<42} {:>9} {}  trust {:>3}/100  health {:>3} ({})",
        property.mode.tag(),
        property.title,
        property.price,
        property.currency,
        property.summary_score,
        health,
        tier.label(),
    )
}

/// Renders the card-grid dashboard, optionally filtered to one mode.
pub fn dashboard(store: &PropertyStore, mode: Option<PropertyMode>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Listings ({} properties)", store.len());
    let _ = writeln!(out, "{}", "-".repeat(100));
    for property in store.all_properties() {
        if mode.is_some_and(|m| property.mode != m) {
            continue;
        }
        let _ = writeln!(out, "{}", dashboard_line(property));
    }
    out
}

/// Renders the detail view: score breakdown, system analysis, and the
/// date-sorted timeline.
pub fn detail(store: &PropertyStore, property_id: &str) -> Result<String, StoreError> {
    let property = store
        .get(property_id)
        .ok_or_else(|| StoreError::PropertyNotFound(property_id.to_string()))?;
    let timeline = store.read(property_id)?;

    let health = compute_health_score(&property.logs);
    let tier = HealthTier::for_score(health);
    let breakdown = score_breakdown(&property.logs);

    let mut out = String::new();
    let _ = writeln!(out, "{}", property.title);
    let _ = writeln!(out, "{}  ·  {} {}", property.address, property.price, property.currency);
    for spec in &property.specs {
        let _ = writeln!(out, "  {}: {}", spec.label, spec.value);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Health Score: {} ({}, {})   Trust Score: {}/100",
        health,
        tier.label(),
        tier.color(),
        property.summary_score
    );
    let _ = writeln!(
        out,
        "  verified: {}  maintenance: {}  legal: {}  risk hits: {}",
        breakdown.verified, breakdown.maintenance, breakdown.legal, breakdown.risk_hits
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "System Analysis");
    let _ = writeln!(out, "  {}", system_analysis(&property.title, &property.logs));
    let _ = writeln!(out);
    let _ = writeln!(out, "Property Timeline ({} events)", timeline.len());
    for event in &timeline {
        let _ = writeln!(
            out,
            "  {}  [{}] {}",
            event.date,
            event.category.label(),
            event.title
        );
        let _ = writeln!(out, "      {}", event.description);
        if let Some(metadata) = &event.metadata {
            let mut badges: Vec<String> =
                metadata.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
            badges.sort();
            let _ = writeln!(out, "      {}", badges.join("  |  "));
        }
        if event.verified {
            let _ = writeln!(out, "      * Verified Event");
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_core::seed_store;

    #[test]
    fn test_dashboard_lists_all_seed_properties() {
        let store = seed_store();
        let out = dashboard(&store, None);
        assert!(out.contains("8 properties"));
        assert!(out.contains("Modern Loft - Tech Hub"));
        assert!(out.contains("Golden Valley Wheat Farm"));
    }

    #[test]
    fn test_dashboard_mode_filter() {
        let store = seed_store();
        let out = dashboard(&store, Some(PropertyMode::Travel));
        assert!(out.contains("Sunny Side Cottage"));
        assert!(!out.contains("Modern Loft"));
    }

    #[test]
    fn test_detail_renders_timeline_and_analysis() {
        let store = seed_store();
        let out = detail(&store, "prop-1").unwrap();

        assert!(out.contains("Plot 452 - Evergreen Agricultural Stand"));
        assert!(out.contains("Ownership is confirmed."));
        assert!(out.contains("Property Timeline (5 events)"));
        assert!(out.contains("* Verified Event"));
        assert!(out.contains("Maps & Boundaries"));
    }

    #[test]
    fn test_detail_unknown_property() {
        let store = seed_store();
        assert!(detail(&store, "prop-404").is_err());
    }

    #[test]
    fn test_detail_shows_metadata_badges() {
        let store = seed_store();
        let out = detail(&store, "prop-3").unwrap();
        assert!(out.contains("Risk: High"));
    }
}
