//! Scenario Configuration
//!
//! A scenario is an ordered list of user actions to play back against the
//! seed store, loaded from a TOML file or built in as a default session.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use listing_core::{Channel, QuickAction};
use listing_events::{LogCategory, PropertyMode};

/// Errors from scenario loading.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// One user action to replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Raw append to one property's log
    Append {
        property: String,
        category: LogCategory,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// One-click action on a property
    QuickAction { property: String, action: QuickAction },
    /// Outbound owner-chat message
    Message {
        property: String,
        channel: Channel,
        text: String,
    },
    /// Broadcast match request to every property of a mode
    MatchRequest {
        mode: PropertyMode,
        description: String,
        budget: String,
        #[serde(default)]
        custom_area: bool,
    },
}

/// An ordered playback session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// The built-in session used when no scenario file is given: one of
    /// each action kind, against the seed properties.
    pub fn default_run() -> Self {
        Self {
            steps: vec![
                ScenarioStep::QuickAction {
                    property: "prop-2".to_string(),
                    action: QuickAction::MakeOffer,
                },
                ScenarioStep::Message {
                    property: "prop-2".to_string(),
                    channel: Channel::WhatsApp,
                    text: "Is the unit still available next month?".to_string(),
                },
                ScenarioStep::QuickAction {
                    property: "prop-3".to_string(),
                    action: QuickAction::ScheduleSiteVisit,
                },
                ScenarioStep::Append {
                    property: "prop-4".to_string(),
                    category: LogCategory::Media,
                    title: "Guest Photo Set Uploaded".to_string(),
                    description: Some("Twelve new photos from a verified stay.".to_string()),
                },
                ScenarioStep::MatchRequest {
                    mode: PropertyMode::Living,
                    description: "Furnished room near the convention center".to_string(),
                    budget: "$500/mo".to_string(),
                    custom_area: true,
                },
            ],
        }
    }
}
