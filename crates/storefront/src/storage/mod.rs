//! Local key-value storage.
//!
//! Values are opaque strings (the auth service stores JSON in them) and are
//! always read and written wholesale. Read-modify-write goes through
//! [`KeyValueStore::update_item`], which holds the store's exclusive lock from
//! the read until the write lands.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, used by tests and ephemeral runs
//! - [`FileStore`] - a single JSON object on disk mapping keys to values

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::future::Future;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium holds something other than a key-value map.
    #[error("storage contents are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Async string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str)
    -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Atomically read `key`, run `apply` on its current value and store
    /// the replacement it returns.
    ///
    /// `apply` returns `(Some(value), out)` to write `value`, or
    /// `(None, out)` to leave the key untouched. An `Err` from `apply` aborts
    /// without writing. No other writer on the same backing medium runs
    /// between the read and the write.
    fn update_item<T, E, F>(
        &self,
        key: &str,
        apply: F,
    ) -> impl Future<Output = Result<T, E>> + Send
    where
        T: Send,
        E: From<StorageError> + Send,
        F: FnOnce(Option<String>) -> Result<(Option<String>, T), E> + Send;
}
