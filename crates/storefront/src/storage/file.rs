//! On-disk key-value store.
//!
//! The whole store lives in one JSON object (`{"key": "value", ...}`).
//! Writes go to a uniquely named temp file in the same directory, which is
//! then renamed over the store, so a crash mid-write leaves the previous
//! contents intact.
//!
//! Every write holds an exclusive advisory lock on a sidecar `<path>.lock`
//! file from the read until the rename. Separate `FileStore` values and
//! separate processes on the same path therefore never interleave their
//! read-modify-write cycles.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::{KeyValueStore, StorageError};

type Items = BTreeMap<String, String>;

/// File-backed store. Clones share the same in-process write lock.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

/// Exclusive lock on the sidecar lock file, released on drop.
struct FileLock {
    file: File,
}

impl FileLock {
    /// Block (on the blocking pool) until the lock at `path` is held.
    async fn acquire(path: PathBuf) -> Result<Self, StorageError> {
        let file = tokio::task::spawn_blocking(move || -> std::io::Result<File> {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)?;
            FileExt::lock_exclusive(&file)?;
            Ok(file)
        })
        .await
        .map_err(std::io::Error::other)??;

        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }

    fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    async fn load(&self) -> Result<Items, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Items::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Items::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, items: &Items) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(items)?;
        let directory = self.directory();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&directory)?;
            tmp.write_all(&body)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;

        debug!(path = %self.path.display(), keys = items.len(), "Store persisted");
        Ok(())
    }

    /// Run one locked read-modify-write cycle over the whole map.
    async fn locked<T, E>(
        &self,
        apply: impl FnOnce(&mut Items) -> Result<(bool, T), E> + Send,
    ) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let _guard = self.write_lock.lock().await;

        tokio::fs::create_dir_all(self.directory())
            .await
            .map_err(StorageError::from)?;
        let _lock = FileLock::acquire(self.sibling(".lock")).await?;

        let mut items = self.load().await?;
        let (changed, out) = apply(&mut items)?;
        if changed {
            self.persist(&items).await?;
        }
        Ok(out)
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.locked(|items| {
            items.insert(key.to_owned(), value);
            Ok::<_, StorageError>((true, ()))
        })
        .await
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.locked(|items| Ok::<_, StorageError>((items.remove(key).is_some(), ())))
            .await
    }

    #[instrument(skip(self, apply), fields(path = %self.path.display()))]
    async fn update_item<T, E, F>(&self, key: &str, apply: F) -> Result<T, E>
    where
        T: Send,
        E: From<StorageError> + Send,
        F: FnOnce(Option<String>) -> Result<(Option<String>, T), E> + Send,
    {
        self.locked(|items| {
            let (replacement, out) = apply(items.get(key).cloned())?;
            match replacement {
                Some(value) => {
                    items.insert(key.to_owned(), value);
                    Ok((true, out))
                }
                None => Ok((false, out)),
            }
        })
        .await
    }
}
