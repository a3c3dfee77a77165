//! Composition root.

use hcp_log_core::api::RemoteApi;
use hcp_log_core::config::ClientConfig;
use hcp_log_core::error::Result;
use hcp_log_core::status::ConcurrencyMode;
use hcp_log_infrastructure::HttpRemoteApi;
use std::sync::Arc;

use crate::directory_store::HcpDirectoryStore;
use crate::draft_store::InteractionDraftStore;

/// All stores of a session, sharing one remote API client.
#[derive(Clone)]
pub struct AppStore {
    pub hcps: HcpDirectoryStore,
    pub interaction: InteractionDraftStore,
}

impl AppStore {
    /// Wires the stores around the given API client.
    pub fn new(api: Arc<dyn RemoteApi>, mode: ConcurrencyMode) -> Self {
        Self {
            hcps: HcpDirectoryStore::new(api.clone()),
            interaction: InteractionDraftStore::new(api, mode),
        }
    }

    /// Builds the HTTP client from configuration and wires the stores around it.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = HttpRemoteApi::from_config(config)?;
        tracing::info!(
            "[AppStore] Using backend at {} ({} submissions)",
            api.base_url(),
            config.concurrency
        );
        Ok(Self::new(Arc::new(api), config.concurrency))
    }
}
