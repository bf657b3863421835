//! In-Memory Snapshot Store Adapter
//!
//! Keeps wizard snapshots in a process-local map. Useful for tests and
//! development; nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::wizard::WizardSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// In-memory snapshot store keyed by caller-chosen strings.
///
/// Snapshots are held as serialized JSON so the adapter exercises the same
/// round-trip the file-backed store does.
#[derive(Debug, Clone)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored snapshots (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored snapshots
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, key: &str, snapshot: &WizardSnapshot) -> Result<(), SnapshotStoreError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), json);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<WizardSnapshot, SnapshotStoreError> {
        let entries = self.entries.read().await;
        let json = entries
            .get(key)
            .ok_or_else(|| SnapshotStoreError::NotFound(key.to_string()))?;

        serde_json::from_str(json).map_err(|e| SnapshotStoreError::Corrupted(e.to_string()))
    }

    async fn exists(&self, key: &str) -> Result<bool, SnapshotStoreError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<(), SnapshotStoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
