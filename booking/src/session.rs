//! Persisted session for the current identity.
//!
//! DESIGN
//! ======
//! The session is an explicit value handed to whoever needs it rather than
//! module-level state. Durable storage sits behind [`IdentityStorage`] so the
//! browser (`localStorage`), the CLI (a JSON file) and tests (memory) share
//! the same load/save/clear lifecycle.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;
use crate::types::Identity;

/// Storage key holding the serialized identity record.
pub const SESSION_STORAGE_KEY: &str = "movieUser";

/// Durable client-local key/value storage.
pub trait IdentityStorage {
    fn read(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the key could not be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl IdentityStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// The current identity plus the storage it is persisted in.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    identity: Option<Identity>,
}

impl<S: IdentityStorage> SessionStore<S> {
    /// Read the persisted identity, if any. Never touches the network.
    ///
    /// Unreadable or malformed records are treated as no identity.
    pub fn load(storage: S) -> Self {
        let identity = storage
            .read(SESSION_STORAGE_KEY)
            .and_then(|raw| match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding malformed stored identity");
                    None
                }
            });
        tracing::debug!(present = identity.is_some(), "session loaded");
        Self { storage, identity }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Replace the current identity in memory and in durable storage.
    pub fn save(&mut self, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(e) = self.storage.write(SESSION_STORAGE_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist identity");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize identity"),
        }
        tracing::debug!(user = %identity.id, "session saved");
        self.identity = Some(identity);
    }

    /// Remove the identity from memory and durable storage.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to remove stored identity");
        }
        tracing::debug!("session cleared");
        self.identity = None;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
