//! Persistence service — local mirror of the full note collection.
//!
//! DESIGN
//! ======
//! After every mutating action the whole collection is serialized and
//! written under one key. There are no deltas. On startup a missing or
//! malformed value is treated as an empty board; corrupt data is never
//! surfaced to the user.

use std::sync::Arc;

use board::doc::Note;
use tracing::debug;

use crate::storage::{Storage, StorageError};

/// Storage key for the local note mirror.
pub const LOCAL_KEY: &str = "sticky-notes:v1";

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Decode a stored collection, treating anything unreadable as empty.
#[must_use]
pub fn decode_notes(raw: Option<&str>) -> Vec<Note> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Note>>(raw) {
        Ok(notes) => notes,
        Err(e) => {
            debug!(error = %e, "ignoring malformed note data");
            Vec::new()
        }
    }
}

/// Local mirror bound to one storage backend.
#[derive(Clone)]
pub struct LocalMirror {
    storage: Arc<dyn Storage>,
}

impl LocalMirror {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Load the mirrored notes. Storage failures also degrade to an empty board.
    #[must_use]
    pub fn load(&self) -> Vec<Note> {
        match self.storage.get(LOCAL_KEY) {
            Ok(raw) => decode_notes(raw.as_deref()),
            Err(e) => {
                debug!(error = %e, "local mirror unreadable; starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the mirror with `notes`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails.
    pub fn save(&self, notes: &[Note]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(notes)?;
        self.storage.set(LOCAL_KEY, &raw)?;
        debug!(count = notes.len(), "mirrored notes");
        Ok(())
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
