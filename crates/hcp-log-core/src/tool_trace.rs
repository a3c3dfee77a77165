//! Backend tool invocations surfaced for inspection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tool run recorded by the backend agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRun {
    /// Tool name (e.g., "log_interaction")
    pub tool: String,
    /// Whatever the tool produced. The backend may store JSON as a string.
    #[serde(default)]
    pub output: Value,
    /// Timestamp (ISO 8601 format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ToolRun {
    /// The output as structured JSON, decoding it when the backend sent a JSON string.
    pub fn structured_output(&self) -> Value {
        match &self.output {
            Value::String(raw) => serde_json::from_str(raw).unwrap_or_else(|_| self.output.clone()),
            other => other.clone(),
        }
    }
}
