//! System Analysis Narrative
//!
//! Human-readable summary text derived from boolean predicates over a
//! property's log. Display-only; nothing here feeds back into the score.
//!
//! Risk counting differs from the scorer on purpose: the scorer penalizes
//! once per keyword matched per event, while this module flags each
//! matching event once, regardless of how many keywords it contains. The
//! two rules live at their own call sites and must not be merged.

use listing_events::{LogCategory, LogEvent};

use crate::score::score_constants::RISK_KEYWORDS;

/// Boolean predicates and counts the narrative is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSignals {
    /// A trust event whose title mentions "Ownership" exists
    pub ownership_confirmed: bool,
    /// Any spatial event exists
    pub boundaries_surveyed: bool,
    /// Any legal event exists
    pub legal_activity: bool,
    /// Events matching at least one risk keyword, counted once per event
    pub risk_flags: usize,
}

impl AnalysisSignals {
    /// Scans a log for the narrative predicates.
    pub fn from_logs(logs: &[LogEvent]) -> Self {
        let ownership_confirmed = logs
            .iter()
            .any(|e| e.category == LogCategory::Trust && e.title.contains("Ownership"));
        let boundaries_surveyed = logs.iter().any(|e| e.category == LogCategory::Spatial);
        let legal_activity = logs.iter().any(|e| e.category == LogCategory::Legal);

        let risk_flags = logs
            .iter()
            .filter(|e| {
                let title = e.title.to_lowercase();
                let description = e.description.to_lowercase();
                RISK_KEYWORDS
                    .iter()
                    .any(|k| title.contains(k) || description.contains(k))
            })
            .count();

        Self {
            ownership_confirmed,
            boundaries_surveyed,
            legal_activity,
            risk_flags,
        }
    }
}

/// Composes the sidebar summary text for a property.
pub fn system_analysis(property_title: &str, logs: &[LogEvent]) -> String {
    let signals = AnalysisSignals::from_logs(logs);

    let mut text = format!("{} shows a strong verification history.", property_title);

    if signals.ownership_confirmed {
        text.push_str(" Ownership is confirmed.");
    } else {
        text.push_str(" Ownership pending verification.");
    }

    if signals.boundaries_surveyed {
        text.push_str(" Boundaries are GPS-locked.");
    } else {
        text.push_str(" Spatial survey recommended.");
    }

    if signals.risk_flags > 0 {
        text.push_str(&format!(
            " Caution: {} risk flags detected in maintenance logs.",
            signals.risk_flags
        ));
    } else {
        text.push_str(" No major risks flagged.");
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid test date")
    }

    fn event(category: LogCategory, title: &str, description: &str) -> LogEvent {
        LogEvent::new("evt_t", date(), category, title, description)
    }

    #[test]
    fn test_ownership_requires_trust_category_and_title() {
        let confirmed = vec![event(
            LogCategory::Trust,
            "Ownership Verified",
            "Title deeds check complete.",
        )];
        assert!(AnalysisSignals::from_logs(&confirmed).ownership_confirmed);

        // Same title under another category does not count
        let wrong_category = vec![event(
            LogCategory::Legal,
            "Ownership Verified",
            "Title deeds check complete.",
        )];
        assert!(!AnalysisSignals::from_logs(&wrong_category).ownership_confirmed);

        let wrong_title = vec![event(
            LogCategory::Trust,
            "Identity Check",
            "Host identity confirmed.",
        )];
        assert!(!AnalysisSignals::from_logs(&wrong_title).ownership_confirmed);
    }

    #[test]
    fn test_risk_flags_count_once_per_event() {
        let logs = vec![
            event(
                LogCategory::Maintenance,
                "Roof Inspection Failed",
                "Major leaks detected",
            ),
            event(LogCategory::Media, "Tour Uploaded", "Clean walkthrough."),
        ];

        // One event carries two keywords but is flagged once
        assert_eq!(AnalysisSignals::from_logs(&logs).risk_flags, 1);

        // The scorer, by contrast, penalizes the same log twice
        let breakdown = crate::score::score_breakdown(&logs);
        assert_eq!(breakdown.risk_hits, 2);
    }

    #[test]
    fn test_clean_log_analysis_text() {
        let logs = vec![
            event(LogCategory::Trust, "Ownership Verified", "No liens found."),
            event(LogCategory::Spatial, "Boundary Walk Verified", "GPS path matched."),
        ];

        let text = system_analysis("Plot 452", &logs);
        assert!(text.starts_with("Plot 452 shows a strong verification history."));
        assert!(text.contains("Ownership is confirmed."));
        assert!(text.contains("Boundaries are GPS-locked."));
        assert!(text.contains("No major risks flagged."));
    }

    #[test]
    fn test_pending_log_analysis_text() {
        let logs = vec![event(
            LogCategory::Maintenance,
            "Roof Inspection Failed",
            "Major leaks detected. Rehab cost estimated at $15k.",
        )];

        let text = system_analysis("Retail Unit", &logs);
        assert!(text.contains("Ownership pending verification."));
        assert!(text.contains("Spatial survey recommended."));
        assert!(text.contains("Caution: 1 risk flags detected in maintenance logs."));
    }

    #[test]
    fn test_empty_log_signals() {
        let signals = AnalysisSignals::from_logs(&[]);
        assert!(!signals.ownership_confirmed);
        assert!(!signals.boundaries_surveyed);
        assert!(!signals.legal_activity);
        assert_eq!(signals.risk_flags, 0);
    }
}
