//! File-based Snapshot Store Adapter
//!
//! Stores each wizard snapshot as a pretty-printed JSON file under a base
//! directory, one file per key. Good enough for a single-operator desktop
//! deployment; the key becomes the file name.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::wizard::WizardSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// File-based snapshot store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSnapshotStore::new("./data/quotations");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        // Keys are caller-chosen; keep the file name flat and predictable
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{safe}.json"))
    }

    async fn ensure_base_dir(&self) -> Result<(), SnapshotStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn save(&self, key: &str, snapshot: &WizardSnapshot) -> Result<(), SnapshotStoreError> {
        self.ensure_base_dir().await?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.snapshot_path(key), json)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, key: &str) -> Result<WizardSnapshot, SnapshotStoreError> {
        let path = self.snapshot_path(key);

        if !path.exists() {
            return Err(SnapshotStoreError::NotFound(key.to_string()));
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| SnapshotStoreError::Corrupted(e.to_string()))
    }

    async fn exists(&self, key: &str) -> Result<bool, SnapshotStoreError> {
        Ok(self.snapshot_path(key).exists())
    }

    async fn delete(&self, key: &str) -> Result<(), SnapshotStoreError> {
        let path = self.snapshot_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnapshotStoreError::IoError(e.to_string())),
        }
    }
}
