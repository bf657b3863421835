//! Snapshot Store Port - Interface for persisting wizard state.
//!
//! The wizard's whole state (`quotation`, `step_data`, `current_step`) is
//! saved and loaded as one opaque blob under a caller-chosen key, with
//! last-write-wins semantics. Any key-value store that can hold JSON can
//! implement this port.

use async_trait::async_trait;

use crate::domain::wizard::WizardSnapshot;

/// Errors that can occur during snapshot store operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("No snapshot stored under key: {0}")]
    NotFound(String),

    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Stored snapshot is corrupted: {0}")]
    Corrupted(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading wizard snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Save a snapshot under the given key, replacing any previous value.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError` if serialization or the write fails
    async fn save(&self, key: &str, snapshot: &WizardSnapshot) -> Result<(), SnapshotStoreError>;

    /// Load the snapshot stored under the given key.
    ///
    /// # Errors
    /// - `NotFound` if no snapshot exists under the key
    /// - `Corrupted` if the stored blob fails to parse
    async fn load(&self, key: &str) -> Result<WizardSnapshot, SnapshotStoreError>;

    /// Check whether a snapshot exists under the given key.
    async fn exists(&self, key: &str) -> Result<bool, SnapshotStoreError>;

    /// Delete the snapshot under the given key; missing keys are a no-op.
    async fn delete(&self, key: &str) -> Result<(), SnapshotStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_names_the_key() {
        let err = SnapshotStoreError::NotFound("draft-42".to_string());
        assert!(err.to_string().contains("draft-42"));
    }

    #[test]
    fn corrupted_error_describes_the_problem() {
        let err = SnapshotStoreError::Corrupted("unexpected end of input".to_string());
        assert!(err.to_string().contains("corrupted"));
    }

    #[test]
    fn snapshot_store_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn SnapshotStore) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn SnapshotStore>>();
    }
}
