//! Appraisal: health scoring and summary narrative over property logs.
//!
//! Everything here is a pure read of an event log. The scorer folds a log
//! into a bounded [0, 100] health score with a three-way display tier; the
//! narrative module derives the sidebar summary text from boolean
//! predicates over the same log. The two keep separate risk-keyword
//! counting rules on purpose — see the module docs.

pub mod narrative;
pub mod score;

pub use narrative::{system_analysis, AnalysisSignals};
pub use score::{compute_health_score, score_breakdown, HealthTier, ScoreBreakdown};
