//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` owns the board engine plus the two places notes are kept
//! outside memory: the local mirror and the mock remote. Every batch of
//! engine actions is followed by a full mirror write, so storage always
//! holds the latest collection.
//!
//! Board mutation happens on the session task only. Remote calls run on
//! spawned tasks and report back through an outcome channel, so the status
//! reads `saving`/`loading` while a call is in flight and the board keeps
//! accepting input. Overlapping calls are neither cancelled nor ordered.

use std::sync::Arc;

use board::doc::Note;
use board::engine::{Action, BoardEngine};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::services::persistence::LocalMirror;
use crate::services::remote::{MockRemote, RemoteError, RemoteStatus};
use crate::session::ErrorCode;
use crate::storage::Storage;

/// Result of a background remote call, delivered back to the session loop.
#[derive(Debug)]
pub enum RemoteOutcome {
    Saved(Result<(), RemoteError>),
    Loaded(Result<Vec<Note>, RemoteError>),
}

impl RemoteOutcome {
    /// Name of the call that finished.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::Saved(_) => "save",
            Self::Loaded(_) => "load",
        }
    }
}

pub struct AppState {
    pub engine: BoardEngine,
    pub mirror: LocalMirror,
    pub remote: MockRemote,
    pub status: RemoteStatus,
    /// Remote calls started but not yet finished.
    pub in_flight: usize,
    outcomes: mpsc::UnboundedSender<RemoteOutcome>,
}

impl AppState {
    /// Build state over `storage` and hydrate the board from the local mirror.
    ///
    /// Also returns the receiver on which finished remote calls arrive; the
    /// session loop feeds them back through [`AppState::finish_remote`].
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: &Config) -> (Self, mpsc::UnboundedReceiver<RemoteOutcome>) {
        let mirror = LocalMirror::new(storage.clone());
        let remote = MockRemote::new(storage, config.save_delay, config.load_delay);
        let mut engine = BoardEngine::new();
        engine.load_snapshot(mirror.load());
        info!(count = engine.notes().len(), "board hydrated from local mirror");
        let (outcomes, rx) = mpsc::unbounded_channel();
        let state = Self { engine, mirror, remote, status: RemoteStatus::Idle, in_flight: 0, outcomes };
        (state, rx)
    }

    /// Persist after a batch of engine actions. Returns the batch unchanged.
    pub fn commit(&mut self, actions: Vec<Action>) -> Vec<Action> {
        if !actions.is_empty() {
            self.persist();
        }
        actions
    }

    fn persist(&self) {
        if let Err(e) = self.mirror.save(self.engine.notes()) {
            error!(error = %e, count = self.engine.notes().len(), "local mirror write failed");
        }
    }

    /// Start sending a snapshot of the current notes to the mock server.
    /// Must be called inside a tokio runtime.
    pub fn start_save(&mut self) -> RemoteStatus {
        self.status = RemoteStatus::Saving;
        self.in_flight += 1;
        let remote = self.remote.clone();
        let notes = self.engine.notes().to_vec();
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let result = remote.save(&notes).await;
            if outcomes.send(RemoteOutcome::Saved(result)).is_err() {
                debug!("session closed before save finished");
            }
        });
        self.status
    }

    /// Start fetching the mock server's notes. Must be called inside a tokio runtime.
    pub fn start_load(&mut self) -> RemoteStatus {
        self.status = RemoteStatus::Loading;
        self.in_flight += 1;
        let remote = self.remote.clone();
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let result = remote.load().await;
            if outcomes.send(RemoteOutcome::Loaded(result)).is_err() {
                debug!("session closed before load finished");
            }
        });
        self.status
    }

    /// Apply a finished remote call. A successful load replaces the board
    /// and is mirrored locally; any failure flips the status to error.
    pub fn finish_remote(&mut self, outcome: RemoteOutcome) -> (RemoteStatus, Vec<Action>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let op = outcome.op();
        let actions = match outcome {
            RemoteOutcome::Saved(Ok(())) => Ok(Vec::new()),
            RemoteOutcome::Loaded(Ok(notes)) => {
                let action = self.engine.load_snapshot(notes);
                Ok(self.commit(vec![action]))
            }
            RemoteOutcome::Saved(Err(e)) | RemoteOutcome::Loaded(Err(e)) => Err(e),
        };
        match actions {
            Ok(actions) => {
                self.status = RemoteStatus::Idle;
                (self.status, actions)
            }
            Err(e) => {
                warn!(op, code = e.error_code(), error = %e, "remote call failed");
                self.status = RemoteStatus::Error;
                (self.status, Vec::new())
            }
        }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
