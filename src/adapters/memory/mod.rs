//! In-memory adapters for tests and development.

mod snapshot;

pub use snapshot::InMemorySnapshotStore;
