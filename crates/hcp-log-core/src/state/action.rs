//! Actions accepted by the interaction draft reducer.

use crate::chat::ChatMessage;
use crate::hcp::HcpId;
use crate::interaction::{FormField, InteractionId};
use crate::status::Flow;
use crate::tool_trace::ToolRun;

/// A state transition request.
///
/// The first group are synchronous user intents. The second group is emitted
/// by the submission flows around each remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ============================================================================
    // Field mutations
    // ============================================================================
    SetFormField { field: FormField, value: String },
    SetHcpId(Option<HcpId>),
    SetChatDraft(String),
    AppendChatMessage(ChatMessage),
    ClearToolTrace,
    AppendToolRuns(Vec<ToolRun>),
    AddMaterial(String),
    /// Remove by position; out of range is a no-op.
    RemoveMaterial(usize),
    AddSample(String),
    /// Remove by position; out of range is a no-op.
    RemoveSample(usize),

    // ============================================================================
    // Submission lifecycle
    // ============================================================================
    SubmissionStarted(Flow),
    FormSubmitted {
        interaction_id: InteractionId,
    },
    ChatSubmitted {
        interaction_id: Option<InteractionId>,
        suggested_followups: Vec<String>,
    },
    EditSubmitted,
    SubmissionFailed {
        flow: Flow,
        message: String,
    },
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetFormField { .. } => "set_form_field",
            Self::SetHcpId(_) => "set_hcp_id",
            Self::SetChatDraft(_) => "set_chat_draft",
            Self::AppendChatMessage(_) => "append_chat_message",
            Self::ClearToolTrace => "clear_tool_trace",
            Self::AppendToolRuns(_) => "append_tool_runs",
            Self::AddMaterial(_) => "add_material",
            Self::RemoveMaterial(_) => "remove_material",
            Self::AddSample(_) => "add_sample",
            Self::RemoveSample(_) => "remove_sample",
            Self::SubmissionStarted(_) => "submission_started",
            Self::FormSubmitted { .. } => "form_submitted",
            Self::ChatSubmitted { .. } => "chat_submitted",
            Self::EditSubmitted => "edit_submitted",
            Self::SubmissionFailed { .. } => "submission_failed",
        }
    }
}
