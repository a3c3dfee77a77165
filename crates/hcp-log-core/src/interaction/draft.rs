//! The interaction form being filled in before submission.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{HcpLogError, Result};
use crate::hcp::HcpId;

/// Text fields of the interaction form that can be set by name.
///
/// `materials` and `samples` are lists and have their own add/remove actions;
/// the HCP selection has its own action as well.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    Date,
    Time,
    InteractionType,
    Sentiment,
    Topics,
    Outcomes,
    FollowUpActions,
    Attendees,
}

impl FormField {
    /// Parses a field name, rejecting anything outside the closed set.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| HcpLogError::UnknownField(name.to_string()))
    }
}

/// The in-progress, not-yet-confirmed interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDraft {
    /// Selected HCP. Required by the backend, but the store accepts `None`.
    pub hcp_id: Option<HcpId>,
    /// Interaction date (`YYYY-MM-DD`)
    pub date: String,
    pub time: String,
    /// e.g. "In-person", "Virtual", "Email", "Phone"
    pub interaction_type: String,
    /// e.g. "Positive", "Neutral", "Negative"
    pub sentiment: String,
    pub topics: String,
    pub outcomes: String,
    pub follow_up_actions: String,
    pub attendees: String,
    /// Materials shared, in the order they were added.
    pub materials: Vec<String>,
    /// Samples distributed, in the order they were added.
    pub samples: Vec<String>,
}

impl Default for InteractionDraft {
    fn default() -> Self {
        Self {
            hcp_id: None,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            time: String::new(),
            interaction_type: String::new(),
            sentiment: String::new(),
            topics: String::new(),
            outcomes: String::new(),
            follow_up_actions: String::new(),
            attendees: String::new(),
            materials: Vec::new(),
            samples: Vec::new(),
        }
    }
}

impl InteractionDraft {
    /// Creates a draft dated today with every other field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::InteractionType => &self.interaction_type,
            FormField::Sentiment => &self.sentiment,
            FormField::Topics => &self.topics,
            FormField::Outcomes => &self.outcomes,
            FormField::FollowUpActions => &self.follow_up_actions,
            FormField::Attendees => &self.attendees,
        }
    }

    /// Replaces the value of a text field.
    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::InteractionType => &mut self.interaction_type,
            FormField::Sentiment => &mut self.sentiment,
            FormField::Topics => &mut self.topics,
            FormField::Outcomes => &mut self.outcomes,
            FormField::FollowUpActions => &mut self.follow_up_actions,
            FormField::Attendees => &mut self.attendees,
        };
        *slot = value;
    }

    /// Whether the draft names an HCP and can be submitted.
    pub fn is_submittable(&self) -> bool {
        self.hcp_id.is_some()
    }
}

/// Removes the element at `index`; out-of-range indices leave the list untouched.
pub(crate) fn remove_at(items: &mut Vec<String>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}
