//! Adapters implementing the outbound ports.

pub mod auth;
pub mod catalogue;
pub mod fs;
pub mod memory;
