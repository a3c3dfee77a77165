//! Domain layer of the HCP interaction logger.
//!
//! Holds the interaction draft state machine (`state`), the data it works
//! on, and the `RemoteApi` contract the application layer drives it through.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod hcp;
pub mod interaction;
pub mod state;
pub mod status;
pub mod tool_trace;

// Re-export common error type
pub use error::{HcpLogError, Result};
