//! Health Score
//!
//! Fixed linear point model folding a property's event log into a bounded
//! score. Every contributing predicate is a count or existence check, so
//! the score is deterministic and independent of log order.

use serde::{Deserialize, Serialize};
use std::fmt;

use listing_events::{LogCategory, LogEvent};

/// Constants for the health score point model.
///
/// The model is fixed for compatibility with historical scores; these are
/// not tunable weights.
pub mod score_constants {
    /// Every log starts from this score, even an empty one
    pub const BASELINE: i32 = 70;
    /// Bonus per independently corroborated event, regardless of category
    pub const VERIFIED_BONUS: i32 = 3;
    /// Bonus per maintenance event
    pub const MAINTENANCE_BONUS: i32 = 5;
    /// Bonus per legal event
    pub const LEGAL_BONUS: i32 = 5;
    /// Penalty per risk keyword matched per event
    pub const RISK_PENALTY: i32 = 15;
    /// Case-insensitive keywords scanned in titles and descriptions
    pub const RISK_KEYWORDS: [&str; 5] = ["fail", "risk", "damage", "leak", "distressed"];
    /// Lower clamp of the score range
    pub const MIN_SCORE: i32 = 0;
    /// Upper clamp of the score range
    pub const MAX_SCORE: i32 = 100;
}

use score_constants::*;

/// The per-rule counts feeding the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Events with `verified = true`
    pub verified: usize,
    /// Events in the maintenance category
    pub maintenance: usize,
    /// Events in the legal category
    pub legal: usize,
    /// Risk keyword matches, counted once per keyword per event.
    ///
    /// An event matching two different keywords contributes two units; a
    /// keyword present in both title and description contributes one.
    pub risk_hits: usize,
}

impl ScoreBreakdown {
    /// Folds the counts into the clamped health score.
    pub fn score(&self) -> u8 {
        let total = BASELINE
            + self.verified as i32 * VERIFIED_BONUS
            + self.maintenance as i32 * MAINTENANCE_BONUS
            + self.legal as i32 * LEGAL_BONUS
            - self.risk_hits as i32 * RISK_PENALTY;
        total.clamp(MIN_SCORE, MAX_SCORE) as u8
    }
}

/// Tallies the point-model counts over a log.
pub fn score_breakdown(logs: &[LogEvent]) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        verified: 0,
        maintenance: 0,
        legal: 0,
        risk_hits: 0,
    };

    for event in logs {
        if event.verified {
            breakdown.verified += 1;
        }
        match event.category {
            LogCategory::Maintenance => breakdown.maintenance += 1,
            LogCategory::Legal => breakdown.legal += 1,
            _ => {}
        }

        let title = event.title.to_lowercase();
        let description = event.description.to_lowercase();
        for keyword in RISK_KEYWORDS {
            if title.contains(keyword) || description.contains(keyword) {
                breakdown.risk_hits += 1;
            }
        }
    }

    breakdown
}

/// Computes the bounded [0, 100] health score for a log.
///
/// Pure and order-independent: permuting the same multiset of events
/// yields the same score.
pub fn compute_health_score(logs: &[LogEvent]) -> u8 {
    score_breakdown(logs).score()
}

/// Three-way display banding of the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    High,
    Medium,
    Low,
}

impl HealthTier {
    /// Bands a score: 80 and above is High, 60 and above is Medium.
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            HealthTier::High
        } else if score >= 60 {
            HealthTier::Medium
        } else {
            HealthTier::Low
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            HealthTier::High => "HIGH",
            HealthTier::Medium => "MEDIUM",
            HealthTier::Low => "LOW",
        }
    }

    /// Display palette name for the tier.
    pub fn color(&self) -> &'static str {
        match self {
            HealthTier::High => "emerald",
            HealthTier::Medium => "amber",
            HealthTier::Low => "red",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
