//! User Actions
//!
//! Closed sets of one-click actions and outbound message channels, each of
//! which resolves to a single log append on the owning property.

use serde::{Deserialize, Serialize};
use std::fmt;

use listing_events::{LogCategory, LogEvent};

use crate::store::{PropertyStore, StoreError};

/// One-click next-step actions offered on the detail surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    /// Buyer starts the offer process
    MakeOffer,
    /// Buyer submits a digital offer
    SubmitOffer,
    /// Buyer books a zero-fee viewing
    ScheduleSiteVisit,
    /// Host commits to the no-viewing-fee policy
    CommitNoViewingFee,
}

impl QuickAction {
    /// Returns all action variants.
    pub fn all() -> &'static [QuickAction] {
        &[
            QuickAction::MakeOffer,
            QuickAction::SubmitOffer,
            QuickAction::ScheduleSiteVisit,
            QuickAction::CommitNoViewingFee,
        ]
    }

    /// Log category the action records under.
    pub fn category(&self) -> LogCategory {
        match self {
            QuickAction::MakeOffer => LogCategory::Financial,
            QuickAction::SubmitOffer => LogCategory::Legal,
            QuickAction::ScheduleSiteVisit => LogCategory::Spatial,
            QuickAction::CommitNoViewingFee => LogCategory::Policy,
        }
    }

    /// Event title recorded for the action.
    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::MakeOffer => "Offer Initiated",
            QuickAction::SubmitOffer => "Offer Submitted",
            QuickAction::ScheduleSiteVisit => "Site Visit Scheduled",
            QuickAction::CommitNoViewingFee => "No Viewing Fee Commitment",
        }
    }

    /// Event description, when the action carries its own. Actions without
    /// one fall back to the store's default placeholder.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            QuickAction::MakeOffer => Some("User started the offer process."),
            QuickAction::SubmitOffer => None,
            QuickAction::ScheduleSiteVisit => None,
            QuickAction::CommitNoViewingFee => None,
        }
    }
}

/// Outbound message channels for owner chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Sms,
    Email,
}

impl Channel {
    /// Returns all channel variants.
    pub fn all() -> &'static [Channel] {
        &[Channel::WhatsApp, Channel::Sms, Channel::Email]
    }

    /// Display tag used in event titles.
    pub fn tag(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "WHATSAPP",
            Channel::Sms => "SMS",
            Channel::Email => "EMAIL",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl PropertyStore {
    /// Records a quick action against a property's log.
    pub fn apply_quick_action(
        &mut self,
        property_id: &str,
        action: QuickAction,
    ) -> Result<LogEvent, StoreError> {
        self.append(
            property_id,
            action.category(),
            action.title(),
            action.description().map(str::to_string),
            None,
        )
    }

    /// Records an outbound chat message as a communication event.
    ///
    /// No message is actually transported anywhere; the log entry is the
    /// entire effect.
    pub fn send_message(
        &mut self,
        property_id: &str,
        channel: Channel,
        message: &str,
    ) -> Result<LogEvent, StoreError> {
        self.append(
            property_id,
            LogCategory::Communication,
            format!("Outbound {} Message", channel),
            Some(format!("User sent: \"{}\"", message)),
            None,
        )
    }
}
