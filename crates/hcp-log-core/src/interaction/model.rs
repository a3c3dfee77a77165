//! Interaction records as stored by the backend.

use serde::{Deserialize, Serialize};

use super::InteractionId;
use crate::hcp::HcpId;

/// A logged interaction, as returned by the remote API.
///
/// The backend stores `materials` and `samples` as a single comma-separated
/// string, so they stay strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    #[serde(default)]
    pub hcp_id: Option<HcpId>,
    #[serde(default)]
    pub interaction_type: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub topics: Option<String>,
    #[serde(default)]
    pub outcomes: Option<String>,
    #[serde(default)]
    pub follow_up_actions: Option<String>,
    #[serde(default)]
    pub attendees: Option<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub samples: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let interaction: Interaction = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(interaction.id, 42);
        assert!(interaction.topics.is_none());
    }

    #[test]
    fn test_deserialize_full_record() {
        let interaction: Interaction = serde_json::from_str(
            r#"{
                "id": 7,
                "hcp_id": 5,
                "interaction_type": "Virtual",
                "topics": "Product X efficacy",
                "materials": "Brochure, Leaflet",
                "created_at": "2025-01-02T10:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(interaction.hcp_id, Some(5));
        assert_eq!(interaction.materials.as_deref(), Some("Brochure, Leaflet"));
        assert_eq!(interaction.created_at.as_deref(), Some("2025-01-02T10:00:00"));
    }
}
