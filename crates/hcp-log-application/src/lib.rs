//! Application layer of the HCP interaction logger.
//!
//! This crate provides the stores that coordinate the domain state machine
//! with the remote API, and the composition root that wires them.

pub mod app_store;
pub mod chat;
pub mod directory_store;
pub mod draft_store;

pub use app_store::AppStore;
pub use chat::send_chat;
pub use directory_store::HcpDirectoryStore;
pub use draft_store::InteractionDraftStore;
