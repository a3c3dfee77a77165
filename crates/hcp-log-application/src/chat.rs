//! Chat panel helpers.

use hcp_log_core::api::ChatTurnResponse;
use hcp_log_core::chat::ChatMessage;
use hcp_log_core::error::Result;

use crate::draft_store::InteractionDraftStore;

/// Sends the current chat draft.
///
/// Trims the draft and does nothing when it is empty. Otherwise the store
/// appends it as a user message, clears the draft and runs the chat flow.
/// When the agent replied, the reply is appended as an assistant message.
/// If the submission is rejected because another one is in flight, the draft
/// is kept for a later retry.
///
/// # Returns
///
/// - `Ok(None)`: The draft was blank, nothing was sent
/// - `Ok(Some(response))`: The chat agent answered
/// - `Err(_)`: The flow failed (the error text is in the store's status)
pub async fn send_chat(store: &InteractionDraftStore) -> Result<Option<ChatTurnResponse>> {
    let Some(response) = store.submit_chat_draft().await? else {
        return Ok(None);
    };

    if let Some(reply) = response.reply.as_deref().filter(|r| !r.trim().is_empty()) {
        store.append_chat_message(ChatMessage::assistant(reply)).await;
    }

    Ok(Some(response))
}
