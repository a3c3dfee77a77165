//! Partial updates sent to the edit agent.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{HcpLogError, Result};

/// Interaction fields the edit agent is allowed to change.
///
/// Names match the backend's snake_case column names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum EditableField {
    InteractionType,
    Sentiment,
    Topics,
    Outcomes,
    FollowUpActions,
    Attendees,
    Materials,
    Samples,
}

impl EditableField {
    /// Parses a field name, rejecting anything outside the closed set.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| HcpLogError::UnknownField(name.to_string()))
    }
}

/// A mapping from editable field to its new value.
///
/// Only fields the caller chose to change are present. Serializes as a flat
/// JSON object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditPatch(BTreeMap<EditableField, String>);

impl EditPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: EditableField, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field, replacing any previous value for it.
    pub fn insert(&mut self, field: EditableField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Builds a patch from raw edit inputs, trimming each value and
    /// dropping fields whose trimmed value is empty.
    pub fn from_inputs<'a, I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (EditableField, &'a str)>,
    {
        let mut patch = Self::new();
        for (field, value) in inputs {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                patch.insert(field, trimmed);
            }
        }
        patch
    }

    /// Builds a patch from name/value pairs. Fails on the first unknown name.
    pub fn try_from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut patch = Self::new();
        for (name, value) in pairs {
            patch.insert(EditableField::parse(name)?, value);
        }
        Ok(patch)
    }

    pub fn get(&self, field: EditableField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EditableField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}
