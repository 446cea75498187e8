use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage::{load_json, save_json, StorageError};

/// Page id + access token obtained by connecting a Facebook page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookCredentials {
    #[serde(default)]
    pub fb_page_id: String,
    #[serde(default)]
    pub access_token: String,
}

impl FacebookCredentials {
    pub fn new(fb_page_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            fb_page_id: fb_page_id.into(),
            access_token: access_token.into(),
        }
    }

    /// True when both the page id and the token are present.
    pub fn is_connected(&self) -> bool {
        !self.fb_page_id.trim().is_empty() && !self.access_token.trim().is_empty()
    }
}

/// Credentials file plus an in-memory copy loaded at construction.
pub struct CredentialStore {
    path: PathBuf,
    current: RwLock<FacebookCredentials>,
}

impl CredentialStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let current: FacebookCredentials = load_json(&path)?;
        info!(
            "Loaded Facebook credentials from {} (connected: {})",
            path.display(),
            current.is_connected()
        );
        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    pub fn current(&self) -> FacebookCredentials {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Persists `credentials`, replacing whatever was stored before.
    pub fn save(&self, credentials: &FacebookCredentials) -> Result<(), StorageError> {
        save_json(&self.path, credentials)?;
        match self.current.write() {
            Ok(mut guard) => *guard = credentials.clone(),
            Err(poisoned) => *poisoned.into_inner() = credentials.clone(),
        }
        Ok(())
    }
}
