//! Authentication adapters.

mod mock;

pub use mock::MockAuthProvider;
