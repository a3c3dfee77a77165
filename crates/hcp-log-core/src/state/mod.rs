//! The interaction draft state machine.
//!
//! `LogInteractionState` is the single source of truth for the log-interaction
//! screen. It is only changed through [`reduce`] with an [`Action`].

mod action;
mod reducer;

pub use action::Action;
pub use reducer::reduce;

use serde::{Deserialize, Serialize};

use crate::chat::ChatTranscript;
use crate::error::{HcpLogError, Result};
use crate::interaction::InteractionDraft;
use crate::status::{ConcurrencyMode, SubmissionStatus};
use crate::tool_trace::ToolRun;

/// Everything the log-interaction screen reads and writes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogInteractionState {
    pub form: InteractionDraft,
    pub chat: ChatTranscript,
    pub tool_trace: Vec<ToolRun>,
    pub ai_suggested_followups: Vec<String>,
    pub status: SubmissionStatus,
}

impl LogInteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a new submission may start under the given mode.
    pub fn ensure_can_submit(&self, mode: ConcurrencyMode) -> Result<()> {
        match mode {
            ConcurrencyMode::Exclusive if self.status.saving() => {
                Err(HcpLogError::SubmissionInFlight(self.status.phase))
            }
            _ => Ok(()),
        }
    }
}
