//! Remote API contract.
//!
//! Defines the interface the stores use to talk to the backend, decoupling
//! the state machine from the transport (HTTP, in-memory mock, ...).

mod dto;

pub use dto::{
    ChatTurnRequest, ChatTurnResponse, CreateInteractionRequest, EditTurnRequest,
    EditTurnResponse,
};

use async_trait::async_trait;

use crate::error::Result;
use crate::hcp::{Hcp, HcpId};
use crate::interaction::{Interaction, InteractionId};
use crate::tool_trace::ToolRun;

/// An abstract client for the HCP CRM backend.
///
/// # Implementation Notes
///
/// Implementations should map non-success responses to
/// `HcpLogError::Api`, keeping the server's `detail` when there is one, and
/// connection-level failures to `HcpLogError::Transport`.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Lists every known HCP.
    async fn list_hcps(&self) -> Result<Vec<Hcp>>;

    /// Fetches a single HCP.
    async fn get_hcp(&self, hcp_id: HcpId) -> Result<Hcp>;

    /// Creates an interaction from a submitted form.
    ///
    /// # Returns
    ///
    /// - `Ok(Interaction)`: The stored record, including its new `id`
    /// - `Err(_)`: The backend rejected the form or could not be reached
    async fn create_interaction(&self, request: &CreateInteractionRequest) -> Result<Interaction>;

    /// Fetches a single interaction.
    async fn get_interaction(&self, interaction_id: InteractionId) -> Result<Interaction>;

    /// Lists the most recent interactions.
    async fn list_interactions(&self) -> Result<Vec<Interaction>>;

    /// Runs one turn of the chat agent, which may log an interaction.
    async fn chat_turn(&self, request: &ChatTurnRequest) -> Result<ChatTurnResponse>;

    /// Runs the edit agent against an existing interaction.
    async fn edit_turn(&self, request: &EditTurnRequest) -> Result<EditTurnResponse>;

    /// Lists the most recent backend tool runs, newest first.
    async fn list_tool_runs(&self) -> Result<Vec<ToolRun>>;
}
