//! File-system adapters.

mod snapshot;

pub use snapshot::FileSnapshotStore;
