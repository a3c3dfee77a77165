//! Interaction draft store.
//!
//! Owns the `LogInteractionState` and runs the three submission flows (form,
//! chat, edit) against the remote API. Every state change goes through
//! `hcp_log_core::state::reduce`.

use hcp_log_core::api::{
    ChatTurnRequest, ChatTurnResponse, CreateInteractionRequest, EditTurnRequest,
    EditTurnResponse, RemoteApi,
};
use hcp_log_core::chat::ChatMessage;
use hcp_log_core::error::{FailureText, HcpLogError, Result};
use hcp_log_core::hcp::HcpId;
use hcp_log_core::interaction::{EditPatch, FormField, InteractionId};
use hcp_log_core::state::{Action, LogInteractionState, reduce};
use hcp_log_core::status::{ConcurrencyMode, Flow};
use std::sync::Arc;
use tokio::sync::RwLock;

const FORM_FAILED: &str = "Submission failed";
const CHAT_FAILED: &str = "Chat failed";
const EDIT_FAILED: &str = "Edit failed";

/// Store for the interaction form, chat transcript, tool trace and submission status.
///
/// Cloning is cheap and yields a handle to the same state.
#[derive(Clone)]
pub struct InteractionDraftStore {
    state: Arc<RwLock<LogInteractionState>>,
    api: Arc<dyn RemoteApi>,
    mode: ConcurrencyMode,
}

impl InteractionDraftStore {
    /// Creates a store with a fresh draft.
    pub fn new(api: Arc<dyn RemoteApi>, mode: ConcurrencyMode) -> Self {
        Self::with_state(api, mode, LogInteractionState::new())
    }

    /// Creates a store starting from the given state.
    pub fn with_state(
        api: Arc<dyn RemoteApi>,
        mode: ConcurrencyMode,
        state: LogInteractionState,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            api,
            mode,
        }
    }

    pub fn mode(&self) -> ConcurrencyMode {
        self.mode
    }

    /// Returns a copy of the current state for rendering.
    pub async fn snapshot(&self) -> LogInteractionState {
        self.state.read().await.clone()
    }

    /// Applies an action synchronously.
    pub async fn dispatch(&self, action: Action) {
        tracing::debug!("[InteractionDraftStore] Dispatch {}", action.name());
        let mut state = self.state.write().await;
        reduce(&mut state, action);
    }

    // ============================================================================
    // Field mutations
    // ============================================================================

    pub async fn set_form_field(&self, field: FormField, value: impl Into<String>) {
        self.dispatch(Action::SetFormField {
            field,
            value: value.into(),
        })
        .await;
    }

    pub async fn set_hcp_id(&self, hcp_id: Option<HcpId>) {
        self.dispatch(Action::SetHcpId(hcp_id)).await;
    }

    pub async fn set_chat_draft(&self, draft: impl Into<String>) {
        self.dispatch(Action::SetChatDraft(draft.into())).await;
    }

    pub async fn append_chat_message(&self, message: ChatMessage) {
        self.dispatch(Action::AppendChatMessage(message)).await;
    }

    pub async fn clear_tool_trace(&self) {
        self.dispatch(Action::ClearToolTrace).await;
    }

    pub async fn add_material(&self, material: impl Into<String>) {
        self.dispatch(Action::AddMaterial(material.into())).await;
    }

    pub async fn remove_material(&self, index: usize) {
        self.dispatch(Action::RemoveMaterial(index)).await;
    }

    pub async fn add_sample(&self, sample: impl Into<String>) {
        self.dispatch(Action::AddSample(sample.into())).await;
    }

    pub async fn remove_sample(&self, index: usize) {
        self.dispatch(Action::RemoveSample(index)).await;
    }

    // ============================================================================
    // Submission flows
    // ============================================================================

    /// Sends the current draft as a new interaction.
    ///
    /// The tool trace is not cleared here; see [`Self::log_form`].
    ///
    /// # Returns
    ///
    /// - `Ok(id)`: The backend stored the interaction; `last_interaction_id` is now `id`
    /// - `Err(_)`: The failure text is also stored in the state's `error`
    pub async fn submit_form(&self) -> Result<InteractionId> {
        let request = self.begin(Flow::Form, |state| {
            CreateInteractionRequest::from(&state.form)
        })
        .await?;
        tracing::info!(
            "[InteractionDraftStore] Submitting form for hcp_id={:?}",
            request.hcp_id
        );

        match self.api.create_interaction(&request).await {
            Ok(interaction) => {
                tracing::info!(
                    "[InteractionDraftStore] Form saved as interaction {}",
                    interaction.id
                );
                self.dispatch(Action::FormSubmitted {
                    interaction_id: interaction.id,
                })
                .await;
                Ok(interaction.id)
            }
            Err(err) => {
                self.fail(Flow::Form, &err, FailureText::DetailOnly, FORM_FAILED)
                    .await;
                Err(err)
            }
        }
    }

    /// Clears the tool trace, then submits the form.
    pub async fn log_form(&self) -> Result<InteractionId> {
        self.clear_tool_trace().await;
        self.submit_form().await
    }

    /// Sends a chat message to the chat agent.
    ///
    /// The transcript is not touched; see [`Self::submit_chat_draft`]. On success
    /// `last_interaction_id` takes the response's id even when it is absent,
    /// and the suggested follow-ups are replaced.
    pub async fn submit_chat(&self, message: impl Into<String>) -> Result<ChatTurnResponse> {
        let message = message.into();
        let request = self
            .begin(Flow::Chat, |state| ChatTurnRequest {
                message,
                hcp_id: state.form.hcp_id,
            })
            .await?;
        self.run_chat(request).await
    }

    /// Sends the chat draft as a user message.
    ///
    /// Under one write lock the draft is trimmed, the submission is admitted,
    /// the user message is appended, the draft is cleared and the chat flow is
    /// marked as started. A blank draft or a rejected submission leaves the
    /// transcript and the draft untouched.
    ///
    /// # Returns
    ///
    /// - `Ok(None)`: The draft was blank, nothing was sent
    /// - `Ok(Some(response))`: The chat agent answered
    /// - `Err(_)`: The submission was rejected or the chat flow failed
    pub async fn submit_chat_draft(&self) -> Result<Option<ChatTurnResponse>> {
        let request = {
            let mut state = self.state.write().await;
            let message = state.chat.draft.trim().to_string();
            if message.is_empty() {
                return Ok(None);
            }
            self.admit(&state, Flow::Chat)?;
            reduce(
                &mut state,
                Action::AppendChatMessage(ChatMessage::user(message.clone())),
            );
            reduce(&mut state, Action::SetChatDraft(String::new()));
            let request = ChatTurnRequest {
                message,
                hcp_id: state.form.hcp_id,
            };
            reduce(&mut state, Action::SubmissionStarted(Flow::Chat));
            request
        };

        self.run_chat(request).await.map(Some)
    }

    async fn run_chat(&self, request: ChatTurnRequest) -> Result<ChatTurnResponse> {
        tracing::info!(
            "[InteractionDraftStore] Sending chat turn for hcp_id={:?}",
            request.hcp_id
        );

        match self.api.chat_turn(&request).await {
            Ok(response) => {
                if response.interaction_id.is_none() {
                    tracing::warn!(
                        "[InteractionDraftStore] Chat response carried no interaction_id; clearing last_interaction_id"
                    );
                }
                self.dispatch(Action::ChatSubmitted {
                    interaction_id: response.interaction_id,
                    suggested_followups: response.suggested_followups.clone().unwrap_or_default(),
                })
                .await;
                Ok(response)
            }
            Err(err) => {
                self.fail(Flow::Chat, &err, FailureText::DetailThenMessage, CHAT_FAILED)
                    .await;
                Err(err)
            }
        }
    }

    /// Applies a patch to an existing interaction through the edit agent.
    ///
    /// Only the status is touched on success; the edited values are not merged
    /// back into the local draft.
    pub async fn submit_edit(
        &self,
        interaction_id: InteractionId,
        patch: EditPatch,
    ) -> Result<EditTurnResponse> {
        let request = self
            .begin(Flow::Edit, |_| EditTurnRequest {
                interaction_id,
                patch,
            })
            .await?;
        tracing::info!(
            "[InteractionDraftStore] Editing interaction {} ({} field(s))",
            interaction_id,
            request.patch.len()
        );

        match self.api.edit_turn(&request).await {
            Ok(response) => {
                self.dispatch(Action::EditSubmitted).await;
                Ok(response)
            }
            Err(err) => {
                self.fail(Flow::Edit, &err, FailureText::DetailThenMessage, EDIT_FAILED)
                    .await;
                Err(err)
            }
        }
    }

    /// Edits the interaction created by the last successful form or chat submission.
    pub async fn edit_last_interaction(&self, patch: EditPatch) -> Result<EditTurnResponse> {
        let interaction_id = self
            .state
            .read()
            .await
            .status
            .last_interaction_id
            .ok_or_else(|| HcpLogError::not_found("Interaction", "last_interaction_id"))?;
        self.submit_edit(interaction_id, patch).await
    }

    /// Fetches recent backend tool runs and appends them to the trace, oldest first.
    ///
    /// Does not touch the submission status.
    pub async fn refresh_tool_trace(&self) -> Result<usize> {
        let mut runs = self.api.list_tool_runs().await.inspect_err(|err| {
            tracing::warn!("[InteractionDraftStore] Failed to fetch tool runs: {}", err);
        })?;
        runs.reverse();
        let count = runs.len();
        self.dispatch(Action::AppendToolRuns(runs)).await;
        Ok(count)
    }

    /// Marks `flow` as started and builds its request from the same state.
    ///
    /// Holding the write lock for both keeps earlier dispatches visible to the
    /// payload and, in exclusive mode, makes the in-flight check atomic.
    async fn begin<T, F>(&self, flow: Flow, payload: F) -> Result<T>
    where
        F: FnOnce(&LogInteractionState) -> T,
    {
        let mut state = self.state.write().await;
        self.admit(&state, flow)?;
        let request = payload(&state);
        reduce(&mut state, Action::SubmissionStarted(flow));
        Ok(request)
    }

    fn admit(&self, state: &LogInteractionState, flow: Flow) -> Result<()> {
        state.ensure_can_submit(self.mode).inspect_err(|err| {
            tracing::warn!(
                "[InteractionDraftStore] Refusing {} submission: {}",
                flow,
                err
            );
        })
    }

    async fn fail(&self, flow: Flow, err: &HcpLogError, chain: FailureText, generic: &str) {
        let message = err.failure_text(chain, generic);
        tracing::warn!(
            "[InteractionDraftStore] {} submission failed: {}",
            flow,
            message
        );
        self.dispatch(Action::SubmissionFailed { flow, message }).await;
    }
}
