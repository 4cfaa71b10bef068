//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError};

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.items.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().await.remove(key);
        Ok(())
    }

    async fn update_item<T, E, F>(&self, key: &str, apply: F) -> Result<T, E>
    where
        T: Send,
        E: From<StorageError> + Send,
        F: FnOnce(Option<String>) -> Result<(Option<String>, T), E> + Send,
    {
        let mut items = self.items.write().await;
        let (replacement, out) = apply(items.get(key).cloned())?;
        if let Some(value) = replacement {
            items.insert(key.to_owned(), value);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("@users").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set_item("k", "1".to_owned()).await.unwrap();
        store.set_item("k", "2".to_owned()).await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item("k", "v".to_owned()).await.unwrap();
        assert_eq!(other.get_item("k").await.unwrap().as_deref(), Some("v"));

        other.remove_item("k").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_item_writes_replacement() {
        let store = MemoryStore::new();
        store.set_item("n", "1".to_owned()).await.unwrap();

        let previous = store
            .update_item("n", |current| {
                let n: u32 = current.unwrap().parse().unwrap();
                Ok::<_, StorageError>((Some((n + 1).to_string()), n))
            })
            .await
            .unwrap();

        assert_eq!(previous, 1);
        assert_eq!(store.get_item("n").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_update_item_error_leaves_value() {
        let store = MemoryStore::new();
        store.set_item("n", "1".to_owned()).await.unwrap();

        let result: Result<(), StorageError> = store
            .update_item("n", |_| {
                Err(StorageError::Io(std::io::Error::other("rejected")))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.get_item("n").await.unwrap().as_deref(), Some("1"));
    }
}
