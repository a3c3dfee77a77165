#![allow(dead_code)]

use hcp_log_core::api::{
    ChatTurnRequest, ChatTurnResponse, CreateInteractionRequest, EditTurnRequest,
    EditTurnResponse, RemoteApi,
};
use hcp_log_core::error::{HcpLogError, Result};
use hcp_log_core::hcp::{Hcp, HcpId};
use hcp_log_core::interaction::{Interaction, InteractionId};
use hcp_log_core::tool_trace::ToolRun;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted `RemoteApi` for tests.
///
/// Each method pops the next scripted result; unscripted calls fail.
/// Requests are recorded for inspection.
#[derive(Default)]
pub struct MockRemoteApi {
    hcps: Mutex<VecDeque<Result<Vec<Hcp>>>>,
    creates: Mutex<VecDeque<Result<Interaction>>>,
    chats: Mutex<VecDeque<Result<ChatTurnResponse>>>,
    edits: Mutex<VecDeque<Result<EditTurnResponse>>>,
    tool_runs: Mutex<VecDeque<Result<Vec<ToolRun>>>>,

    pub create_requests: Mutex<Vec<CreateInteractionRequest>>,
    pub chat_requests: Mutex<Vec<ChatTurnRequest>>,
    pub edit_requests: Mutex<Vec<EditTurnRequest>>,

    /// When set, `create_interaction` waits for a notification before answering.
    create_gate: Option<Arc<Notify>>,
}

impl MockRemoteApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `create_interaction` block until the returned `Notify` fires.
    pub fn with_create_gate(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.create_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn push_hcps(&self, result: Result<Vec<Hcp>>) {
        self.hcps.lock().unwrap().push_back(result);
    }

    pub fn push_create(&self, result: Result<Interaction>) {
        self.creates.lock().unwrap().push_back(result);
    }

    pub fn push_chat(&self, result: Result<ChatTurnResponse>) {
        self.chats.lock().unwrap().push_back(result);
    }

    pub fn push_edit(&self, result: Result<EditTurnResponse>) {
        self.edits.lock().unwrap().push_back(result);
    }

    pub fn push_tool_runs(&self, result: Result<Vec<ToolRun>>) {
        self.tool_runs.lock().unwrap().push_back(result);
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T>>>, method: &str) -> Result<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(HcpLogError::internal(format!("unscripted call: {method}"))))
}

#[async_trait::async_trait]
impl RemoteApi for MockRemoteApi {
    async fn list_hcps(&self) -> Result<Vec<Hcp>> {
        next(&self.hcps, "list_hcps")
    }

    async fn get_hcp(&self, hcp_id: HcpId) -> Result<Hcp> {
        Err(HcpLogError::not_found("Hcp", hcp_id.to_string()))
    }

    async fn create_interaction(&self, request: &CreateInteractionRequest) -> Result<Interaction> {
        self.create_requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.create_gate {
            gate.notified().await;
        }
        next(&self.creates, "create_interaction")
    }

    async fn get_interaction(&self, interaction_id: InteractionId) -> Result<Interaction> {
        Err(HcpLogError::not_found("Interaction", interaction_id.to_string()))
    }

    async fn list_interactions(&self) -> Result<Vec<Interaction>> {
        Ok(Vec::new())
    }

    async fn chat_turn(&self, request: &ChatTurnRequest) -> Result<ChatTurnResponse> {
        self.chat_requests.lock().unwrap().push(request.clone());
        next(&self.chats, "chat_turn")
    }

    async fn edit_turn(&self, request: &EditTurnRequest) -> Result<EditTurnResponse> {
        self.edit_requests.lock().unwrap().push(request.clone());
        next(&self.edits, "edit_turn")
    }

    async fn list_tool_runs(&self) -> Result<Vec<ToolRun>> {
        next(&self.tool_runs, "list_tool_runs")
    }
}

pub fn hcp(id: HcpId, name: &str) -> Hcp {
    Hcp {
        id,
        name: name.to_string(),
        specialty: None,
        organization: None,
    }
}

pub fn stored(id: InteractionId) -> Interaction {
    Interaction {
        id,
        hcp_id: None,
        interaction_type: None,
        sentiment: None,
        topics: None,
        outcomes: None,
        follow_up_actions: None,
        attendees: None,
        materials: None,
        samples: None,
        created_at: None,
        updated_at: None,
    }
}
