//! Outbound ports.
//!
//! Traits the application core depends on, implemented by adapters.

pub mod auth_provider;
pub mod catalogue;
pub mod snapshot_store;

pub use auth_provider::{AuthError, AuthProvider, AuthSession, AuthenticatedUser, Credentials, Role};
pub use catalogue::{CatalogueError, ServiceCatalogue};
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};
