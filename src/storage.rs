//! Durable key-value persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly two records survive reloads: the raw credential string under
//! [`AUTH_TOKEN_KEY`] and the JSON-serialized identity under
//! [`USER_DATA_KEY`]. The persisted copies are a write-through cache owned by
//! the session store — they are read once during hydration and mirrored after
//! every mutation, never treated as the source of truth afterwards.
//!
//! Reads and writes are modeled async so backends can be swapped: browser
//! `localStorage` under the `hydrate` feature, an in-memory map natively and
//! in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the raw bearer credential string.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Key holding the JSON-serialized identity record.
pub const USER_DATA_KEY: &str = "userData";

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors produced by storage backends.
#[derive(Clone, Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists in this environment.
    #[error("storage backend unavailable")]
    Unavailable,

    /// The backend rejected the operation.
    #[error("storage access failed: {0}")]
    Access(String),
}

// =============================================================================
// STORAGE TRAIT
// =============================================================================

/// Async seam over durable string records.
#[async_trait::async_trait(?Send)]
pub trait KeyValueStorage {
    /// Read the record under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record under `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait(?Send)]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// LOCAL STORAGE BACKEND (browser)
// =============================================================================

/// Browser `localStorage` backend. Requires a window; environments without
/// one (workers, detached contexts) surface [`StorageError::Unavailable`].
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl KeyValueStorage for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::backend()?
            .get_item(key)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::backend()?
            .set_item(key, value)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::backend()?
            .remove_item(key)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}
