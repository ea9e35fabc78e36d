//! File-based Key-Value Store Adapter
//!
//! Persists client state as a single JSON object on disk. The file and its
//! parent directory are created on first write.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{KeyValueStore, KeyValueStoreError};

/// File-backed key-value store
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store backed by `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/client_state.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, KeyValueStoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;

        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&json)
            .map_err(|e| KeyValueStoreError::DeserializationFailed(e.to_string()))
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), KeyValueStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| KeyValueStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await
    }

    async fn clear(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        if entries.remove(key).is_some() {
            self.write_all(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileKeyValueStore {
        FileKeyValueStore::new(dir.path().join("nested").join("state.json"))
    }

    #[tokio::test]
    async fn test_file_store_get_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("access_token").await.unwrap(), None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set("access_token", "tok-123").await.unwrap();
        store_in(&dir).set("user", "{\"id\":\"u1\"}").await.unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("access_token").await.unwrap(), Some("tok-123".into()));
        assert_eq!(reopened.get("user").await.unwrap(), Some("{\"id\":\"u1\"}".into()));
    }

    #[tokio::test]
    async fn test_file_store_clear_removes_only_that_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        store.clear("a").await.unwrap();
        store.clear("missing").await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("b").await.unwrap(), Some("2".into()));
    }

    #[tokio::test]
    async fn test_file_store_reports_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileKeyValueStore::new(&path);
        assert!(matches!(
            store.get("a").await,
            Err(KeyValueStoreError::DeserializationFailed(_))
        ));
    }
}
