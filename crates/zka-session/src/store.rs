//! # Persistence Collaborator
//!
//! The session does not know where its state lives. A [`SessionStore`]
//! implementation is injected at construction: state loads once at init
//! and saves after every mutation. The file-backed store mirrors the
//! localStorage behavior this replaces — a missing or corrupt file reads
//! as an empty session rather than an error.

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::session::SessionState;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted state could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where session state is persisted between runs.
pub trait SessionStore: Send + Sync {
    /// Load the persisted state. A store with nothing persisted yet
    /// returns the default (empty) state, not an error.
    fn load(&self) -> Result<SessionState, StoreError>;

    /// Persist the current state.
    fn save(&self, state: &SessionState) -> Result<(), StoreError>;
}

/// Volatile store for tests and one-shot invocations.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<SessionState>,
}

impl SessionStore for InMemoryStore {
    fn load(&self) -> Result<SessionState, StoreError> {
        Ok(self.state.lock().map(|s| s.clone()).unwrap_or_default())
    }

    fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.state.lock() {
            *guard = state.clone();
        }
        Ok(())
    }
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the given file path. The file is created on
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<SessionState, StoreError> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "session file unreadable; starting empty"
                );
                Ok(SessionState::default())
            }
        }
    }

    fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
