//! Catalogue adapters.

mod fixtures;

pub use fixtures::StaticCatalogue;
