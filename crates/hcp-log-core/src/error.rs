//! Error types for the HCP interaction logger.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::SubmissionPhase;

/// A shared error type for the entire workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HcpLogError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The remote API answered with a non-success status.
    ///
    /// `detail` carries the server-provided explanation when the body had one,
    /// `message` is the transport-level summary that always exists.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or(.message))]
    Api {
        status: u16,
        detail: Option<String>,
        message: String,
    },

    /// The request never produced a response (connection, timeout, TLS...)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A field name outside the closed set of editable/form fields
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    /// Another submission is still running and the store runs exclusively
    #[error("A submission is already in flight ({0})")]
    SubmissionInFlight(SubmissionPhase),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Which parts of an error feed the user-visible failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureText {
    /// Server detail, then the generic fallback.
    DetailOnly,
    /// Server detail, then the error message, then the generic fallback.
    DetailThenMessage,
    /// Error message, then the generic fallback. The server detail is ignored.
    MessageOnly,
}

impl HcpLogError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Api error from a status code and an optional server detail
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api {
            status,
            detail,
            message: format!("Request failed with status code {}", status),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error, or an API 404
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Api { status: 404, .. }
        )
    }

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if the store refused to start a submission
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::SubmissionInFlight(_))
    }

    // ============================================================================
    // Failure text
    // ============================================================================

    /// The server-provided detail, if the remote API sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }

    /// The transport-level message for errors that came from a request.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } | Self::Transport { message } => {
                Some(message.as_str()).filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }

    /// Resolves the human-readable failure string through the given chain.
    pub fn failure_text(&self, chain: FailureText, generic: &str) -> String {
        let resolved = match chain {
            FailureText::DetailOnly => self.detail(),
            FailureText::DetailThenMessage => self.detail().or_else(|| self.message()),
            FailureText::MessageOnly => self.message(),
        };
        resolved.unwrap_or(generic).to_string()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HcpLogError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for HcpLogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HcpLogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for HcpLogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, HcpLogError>`.
pub type Result<T> = std::result::Result<T, HcpLogError>;
