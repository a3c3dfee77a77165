//! Healthcare providers and the directory of known providers.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Backend identifier of an HCP.
pub type HcpId = i64;

/// A healthcare provider known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hcp {
    pub id: HcpId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// Load state of the HCP directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DirectoryStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// The list of known HCPs plus its load state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HcpDirectory {
    pub items: Vec<Hcp>,
    pub status: DirectoryStatus,
    pub error: Option<String>,
}

impl HcpDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.status == DirectoryStatus::Loading
    }

    /// Looks up an HCP by id.
    pub fn find(&self, id: HcpId) -> Option<&Hcp> {
        self.items.iter().find(|hcp| hcp.id == id)
    }
}

/// Transitions of the directory load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAction {
    LoadStarted,
    Loaded(Vec<Hcp>),
    LoadFailed(String),
}

/// Applies a directory transition.
pub fn reduce_directory(directory: &mut HcpDirectory, action: DirectoryAction) {
    match action {
        DirectoryAction::LoadStarted => {
            directory.status = DirectoryStatus::Loading;
            directory.error = None;
        }
        DirectoryAction::Loaded(items) => {
            directory.status = DirectoryStatus::Loaded;
            directory.items = items;
            directory.error = None;
        }
        DirectoryAction::LoadFailed(message) => {
            // Previous items survive a failed reload.
            directory.status = DirectoryStatus::Failed;
            directory.error = Some(message);
        }
    }
}
