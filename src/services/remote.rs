//! Remote service — a mock server with simulated latency.
//!
//! DESIGN
//! ======
//! Save and load each sleep for a random delay, then read or write the full
//! collection under a key separate from the local mirror. Calls are not
//! cancelled or de-duplicated; two overlapping calls simply both complete.

use std::sync::Arc;

use board::doc::Note;
use tracing::info;

use crate::config::DelayRange;
use crate::services::persistence::decode_notes;
use crate::storage::{Storage, StorageError};

/// Storage key for the mock server's copy.
pub const SERVER_KEY: &str = "mock-server:notes:v1";

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}

impl crate::session::ErrorCode for RemoteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "E_REMOTE_STORAGE",
            Self::Encode(_) => "E_REMOTE_ENCODE",
        }
    }
}

/// Coarse state of the remote connection shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteStatus {
    #[default]
    Idle,
    Saving,
    Loading,
    Error,
}

#[derive(Clone)]
pub struct MockRemote {
    storage: Arc<dyn Storage>,
    save_delay: DelayRange,
    load_delay: DelayRange,
}

impl MockRemote {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, save_delay: DelayRange, load_delay: DelayRange) -> Self {
        Self { storage, save_delay, load_delay }
    }

    /// Store `notes` on the mock server after a simulated delay.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails.
    pub async fn save(&self, notes: &[Note]) -> Result<(), RemoteError> {
        let raw = serde_json::to_string(notes)?;
        tokio::time::sleep(self.save_delay.sample()).await;
        self.storage.set(SERVER_KEY, &raw)?;
        info!(count = notes.len(), "saved notes to mock server");
        Ok(())
    }

    /// Fetch the mock server's notes after a simulated delay. Absent or
    /// malformed data loads as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read fails.
    pub async fn load(&self) -> Result<Vec<Note>, RemoteError> {
        tokio::time::sleep(self.load_delay.sample()).await;
        let raw = self.storage.get(SERVER_KEY)?;
        let notes = decode_notes(raw.as_deref());
        info!(count = notes.len(), "loaded notes from mock server");
        Ok(notes)
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
