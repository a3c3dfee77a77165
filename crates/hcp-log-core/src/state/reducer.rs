use super::{Action, LogInteractionState};
use crate::interaction::remove_at;
use crate::status::SubmissionPhase;

/// Applies an action to the state. Synchronous and infallible.
pub fn reduce(state: &mut LogInteractionState, action: Action) {
    tracing::debug!("[reduce] {}", action.name());

    match action {
        Action::SetFormField { field, value } => state.form.set_field(field, value),
        Action::SetHcpId(hcp_id) => state.form.hcp_id = hcp_id,
        Action::SetChatDraft(draft) => state.chat.draft = draft,
        Action::AppendChatMessage(message) => state.chat.messages.push(message),
        Action::ClearToolTrace => state.tool_trace.clear(),
        Action::AppendToolRuns(runs) => state.tool_trace.extend(runs),
        Action::AddMaterial(material) => state.form.materials.push(material),
        Action::RemoveMaterial(index) => remove_at(&mut state.form.materials, index),
        Action::AddSample(sample) => state.form.samples.push(sample),
        Action::RemoveSample(index) => remove_at(&mut state.form.samples, index),
        Action::SubmissionStarted(flow) => {
            state.status.phase = SubmissionPhase::saving(flow);
            state.status.error = None;
        }
        Action::FormSubmitted { interaction_id } => {
            state.status.phase = SubmissionPhase::Idle;
            state.status.last_interaction_id = Some(interaction_id);
        }
        Action::ChatSubmitted {
            interaction_id,
            suggested_followups,
        } => {
            state.status.phase = SubmissionPhase::Idle;
            // A reply without an id clears the previous one.
            state.status.last_interaction_id = interaction_id;
            state.ai_suggested_followups = suggested_followups;
        }
        Action::EditSubmitted => {
            state.status.phase = SubmissionPhase::Idle;
        }
        Action::SubmissionFailed { flow, message } => {
            if state.status.phase.flow() != Some(flow) {
                tracing::debug!(
                    "[reduce] {} failure landed while phase was {}",
                    flow,
                    state.status.phase
                );
            }
            state.status.phase = SubmissionPhase::Idle;
            state.status.error = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatMessage;
    use crate::interaction::FormField;
    use crate::status::Flow;
    use crate::tool_trace::ToolRun;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_last_value_per_field_wins_regardless_of_interleaving() {
        let mut a = LogInteractionState::new();
        let mut b = LogInteractionState::new();

        let topics = [
            Action::SetFormField {
                field: FormField::Topics,
                value: "first".to_string(),
            },
            Action::SetFormField {
                field: FormField::Topics,
                value: "second".to_string(),
            },
        ];
        let others = [
            Action::SetFormField {
                field: FormField::Sentiment,
                value: "Positive".to_string(),
            },
            Action::SetHcpId(Some(5)),
            Action::AddMaterial("Brochure".to_string()),
        ];

        for action in topics.iter().chain(others.iter()) {
            reduce(&mut a, action.clone());
        }
        // Interleave: other fields first, then topics split around them
        reduce(&mut b, topics[0].clone());
        for action in others.iter().rev() {
            reduce(&mut b, action.clone());
        }
        reduce(&mut b, topics[1].clone());

        assert_eq!(a.form, b.form);
        assert_eq!(a.form.topics, "second");
        assert_eq!(a.form.sentiment, "Positive");
        assert_eq!(a.form.hcp_id, Some(5));
    }

    #[test]
    fn test_remove_material_by_index() {
        let mut state = LogInteractionState::new();
        for m in ["A", "B", "C"] {
            reduce(&mut state, Action::AddMaterial(m.to_string()));
        }

        reduce(&mut state, Action::RemoveMaterial(1));
        assert_eq!(state.form.materials, strings(&["A", "C"]));

        reduce(&mut state, Action::RemoveMaterial(7));
        assert_eq!(state.form.materials, strings(&["A", "C"]));
    }

    #[test]
    fn test_samples_are_independent_of_materials() {
        let mut state = LogInteractionState::new();
        reduce(&mut state, Action::AddMaterial("Brochure".to_string()));
        reduce(&mut state, Action::AddSample("Product X 10mg".to_string()));
        reduce(&mut state, Action::RemoveSample(0));

        assert!(state.form.samples.is_empty());
        assert_eq!(state.form.materials, strings(&["Brochure"]));
    }

    #[test]
    fn test_chat_draft_and_messages() {
        let mut state = LogInteractionState::new();
        reduce(&mut state, Action::SetChatDraft("Met Dr. Lee".to_string()));
        reduce(
            &mut state,
            Action::AppendChatMessage(ChatMessage::user("Met Dr. Lee")),
        );
        reduce(&mut state, Action::SetChatDraft(String::new()));

        assert_eq!(state.chat.messages, vec![ChatMessage::user("Met Dr. Lee")]);
        assert!(state.chat.draft.is_empty());
    }

    #[test]
    fn test_tool_trace_append_and_clear() {
        let mut state = LogInteractionState::new();
        let run = ToolRun {
            tool: "get_hcp_profile".to_string(),
            output: json!({"name": "Dr. Lee"}),
            created_at: None,
        };
        reduce(&mut state, Action::AppendToolRuns(vec![run.clone()]));
        reduce(&mut state, Action::AppendToolRuns(vec![run]));
        assert_eq!(state.tool_trace.len(), 2);

        reduce(&mut state, Action::ClearToolTrace);
        assert!(state.tool_trace.is_empty());
    }

    #[test]
    fn test_started_clears_error_and_sets_phase() {
        let mut state = LogInteractionState::new();
        state.status.error = Some("old".to_string());

        reduce(&mut state, Action::SubmissionStarted(Flow::Form));
        assert_eq!(state.status.phase, SubmissionPhase::FormSaving);
        assert!(state.status.saving());
        assert!(state.status.error.is_none());
    }

    #[test]
    fn test_form_success_sets_last_interaction_id() {
        let mut state = LogInteractionState::new();
        reduce(&mut state, Action::SubmissionStarted(Flow::Form));
        reduce(&mut state, Action::FormSubmitted { interaction_id: 42 });

        assert!(!state.status.saving());
        assert_eq!(state.status.last_interaction_id, Some(42));
        assert!(state.status.error.is_none());
    }

    #[test]
    fn test_chat_success_overwrites_id_with_none() {
        let mut state = LogInteractionState::new();
        state.status.last_interaction_id = Some(7);
        state.ai_suggested_followups = strings(&["old"]);

        reduce(&mut state, Action::SubmissionStarted(Flow::Chat));
        reduce(
            &mut state,
            Action::ChatSubmitted {
                interaction_id: None,
                suggested_followups: Vec::new(),
            },
        );

        assert_eq!(state.status.last_interaction_id, None);
        assert!(state.ai_suggested_followups.is_empty());
    }

    #[test]
    fn test_failure_keeps_last_interaction_id() {
        let mut state = LogInteractionState::new();
        state.status.last_interaction_id = Some(3);

        reduce(&mut state, Action::SubmissionStarted(Flow::Edit));
        reduce(
            &mut state,
            Action::SubmissionFailed {
                flow: Flow::Edit,
                message: "Edit failed".to_string(),
            },
        );

        assert!(!state.status.saving());
        assert_eq!(state.status.last_interaction_id, Some(3));
        assert_eq!(state.status.error.as_deref(), Some("Edit failed"));
    }
}
