//! Durable-storage adapter for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two keys are written:
//! - `token`: the bare bearer token, read by the network layer.
//! - `auth-storage`: JSON snapshot `{"state": {...}, "version": 0}` of the
//!   persisted session subset, read once at startup.
//!
//! ERROR HANDLING
//! ==============
//! Every backend call returns `Result`; callers decide how to degrade. The
//! store treats any load failure as "no session".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::model::User;
use crate::state::StorageEffect;

pub const TOKEN_KEY: &str = "token";
pub const SNAPSHOT_KEY: &str = "auth-storage";
pub const SNAPSHOT_VERSION: u32 = 0;

/// Error returned by [`KeyValueStore`] backends and [`SessionPersistence`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (private mode, server render, ...).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The snapshot could not be parsed or encoded.
    #[error("malformed session snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The snapshot was written by an incompatible client version.
    #[error("unsupported session snapshot version {0}")]
    Version(u32),
}

/// Minimal string key-value persistence surviving a restart.
pub trait KeyValueStore {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Persisted subset of [`crate::Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

#[derive(Serialize, Deserialize)]
struct SnapshotEnvelope {
    state: PersistedSession,
    #[serde(default)]
    version: u32,
}

/// In-process store used by tests and the server render.
///
/// Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Arc::new(Mutex::new(map)) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("memory store lock poisoned".to_owned()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Maps session snapshots and [`StorageEffect`]s onto a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionPersistence<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionPersistence<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted snapshot. `Ok(None)` when nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails, the JSON is malformed, or the
    /// snapshot version is unknown.
    pub fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let Some(raw) = self.backend.get(SNAPSHOT_KEY)? else {
            return Ok(None);
        };
        let envelope: SnapshotEnvelope = serde_json::from_str(&raw)?;
        if envelope.version != SNAPSHOT_VERSION {
            return Err(StorageError::Version(envelope.version));
        }
        Ok(Some(envelope.state))
    }

    /// Apply one storage effect produced by the reducer.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails or the snapshot cannot be
    /// encoded.
    pub fn apply(&self, effect: &StorageEffect) -> Result<(), StorageError> {
        match effect {
            StorageEffect::WriteToken(token) => self.backend.set(TOKEN_KEY, token),
            StorageEffect::RemoveToken => self.backend.remove(TOKEN_KEY),
            StorageEffect::WriteSnapshot(state) => {
                let raw = serde_json::to_string(&SnapshotEnvelope { state: state.clone(), version: SNAPSHOT_VERSION })?;
                self.backend.set(SNAPSHOT_KEY, &raw)
            }
        }
    }

    /// Current bearer token, if one is stored.
    pub fn bearer_token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
}
