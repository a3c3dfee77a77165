//! Request and response bodies of the remote API.

use serde::{Deserialize, Serialize};

use crate::hcp::HcpId;
use crate::interaction::{EditPatch, Interaction, InteractionDraft, InteractionId};

/// Separator used when flattening list fields for the backend.
const LIST_SEPARATOR: &str = ", ";

/// Body of the create-interaction request.
///
/// Mirrors the full draft. The backend stores `materials` and `samples` as
/// single strings, so the lists are joined and omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInteractionRequest {
    pub hcp_id: Option<HcpId>,
    pub date: String,
    pub time: String,
    pub interaction_type: String,
    pub sentiment: String,
    pub topics: String,
    pub outcomes: String,
    pub follow_up_actions: String,
    pub attendees: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<String>,
}

impl From<&InteractionDraft> for CreateInteractionRequest {
    fn from(draft: &InteractionDraft) -> Self {
        Self {
            hcp_id: draft.hcp_id,
            date: draft.date.clone(),
            time: draft.time.clone(),
            interaction_type: draft.interaction_type.clone(),
            sentiment: draft.sentiment.clone(),
            topics: draft.topics.clone(),
            outcomes: draft.outcomes.clone(),
            follow_up_actions: draft.follow_up_actions.clone(),
            attendees: draft.attendees.clone(),
            materials: join_list(&draft.materials),
            samples: join_list(&draft.samples),
        }
    }
}

fn join_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(LIST_SEPARATOR))
    }
}

/// Body of a chat agent turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    pub message: String,
    pub hcp_id: Option<HcpId>,
}

/// Result of a chat agent turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatTurnResponse {
    /// Assistant reply text, when the agent produced one.
    #[serde(default)]
    pub reply: Option<String>,
    /// Interaction logged by this turn.
    #[serde(default)]
    pub interaction_id: Option<InteractionId>,
    #[serde(default)]
    pub suggested_followups: Option<Vec<String>>,
}

/// Body of an edit agent turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTurnRequest {
    pub interaction_id: InteractionId,
    pub patch: EditPatch,
}

/// Result of an edit agent turn. The store does not merge it back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditTurnResponse {
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub interaction: Option<Interaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::EditableField;
    use serde_json::json;

    #[test]
    fn test_create_request_flattens_lists() {
        let mut draft = InteractionDraft::new();
        draft.hcp_id = Some(5);
        draft.date = "2025-03-01".to_string();
        draft.topics = "Product X efficacy".to_string();
        draft.materials = vec!["Brochure".to_string(), "Leaflet".to_string()];

        let body = serde_json::to_value(CreateInteractionRequest::from(&draft)).unwrap();

        assert_eq!(body["hcp_id"], json!(5));
        assert_eq!(body["topics"], json!("Product X efficacy"));
        assert_eq!(body["materials"], json!("Brochure, Leaflet"));
        assert!(body.get("samples").is_none());
    }

    #[test]
    fn test_chat_response_tolerates_missing_fields() {
        let response: ChatTurnResponse = serde_json::from_str(r#"{"reply": "Done"}"#).unwrap();
        assert_eq!(response.reply.as_deref(), Some("Done"));
        assert!(response.interaction_id.is_none());
        assert!(response.suggested_followups.is_none());

        let response: ChatTurnResponse =
            serde_json::from_str(r#"{"interaction_id": null, "suggested_followups": null}"#)
                .unwrap();
        assert!(response.suggested_followups.is_none());
    }

    #[test]
    fn test_edit_request_shape() {
        let request = EditTurnRequest {
            interaction_id: 7,
            patch: EditPatch::new().with(EditableField::Topics, "New topic"),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"interaction_id": 7, "patch": {"topics": "New topic"}})
        );
    }
}
