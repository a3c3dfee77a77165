//! HCP directory store.

use hcp_log_core::api::RemoteApi;
use hcp_log_core::error::{FailureText, Result};
use hcp_log_core::hcp::{DirectoryAction, Hcp, HcpDirectory, HcpId, reduce_directory};
use std::sync::Arc;
use tokio::sync::RwLock;

const LOAD_FAILED: &str = "Failed to fetch HCPs";

/// Holds the list of known HCPs.
///
/// The list is loaded once on startup; a failed load keeps the previous list
/// and can be retried by calling [`HcpDirectoryStore::load`] again.
#[derive(Clone)]
pub struct HcpDirectoryStore {
    directory: Arc<RwLock<HcpDirectory>>,
    api: Arc<dyn RemoteApi>,
}

impl HcpDirectoryStore {
    pub fn new(api: Arc<dyn RemoteApi>) -> Self {
        Self {
            directory: Arc::new(RwLock::new(HcpDirectory::new())),
            api,
        }
    }

    /// Returns a copy of the directory for rendering.
    pub async fn snapshot(&self) -> HcpDirectory {
        self.directory.read().await.clone()
    }

    /// Looks up an HCP by id in the loaded list.
    pub async fn find(&self, hcp_id: HcpId) -> Option<Hcp> {
        self.directory.read().await.find(hcp_id).cloned()
    }

    /// Issues one read request for the HCP list.
    ///
    /// # Returns
    ///
    /// - `Ok(count)`: Number of HCPs now in the directory
    /// - `Err(_)`: The failure text is also stored in the directory's `error`
    pub async fn load(&self) -> Result<usize> {
        self.apply(DirectoryAction::LoadStarted).await;
        tracing::info!("[HcpDirectoryStore] Loading HCPs");

        match self.api.list_hcps().await {
            Ok(items) => {
                let count = items.len();
                tracing::info!("[HcpDirectoryStore] Loaded {} HCP(s)", count);
                self.apply(DirectoryAction::Loaded(items)).await;
                Ok(count)
            }
            Err(err) => {
                let message = err.failure_text(FailureText::MessageOnly, LOAD_FAILED);
                tracing::warn!("[HcpDirectoryStore] Load failed: {}", message);
                self.apply(DirectoryAction::LoadFailed(message)).await;
                Err(err)
            }
        }
    }

    async fn apply(&self, action: DirectoryAction) {
        let mut directory = self.directory.write().await;
        reduce_directory(&mut directory, action);
    }
}
