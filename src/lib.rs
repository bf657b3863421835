//! Tourcraft - Quotation State and Pricing Engine
//!
//! Back-office core for a travel agency: priced service lines, a quotation
//! aggregate with synchronous pricing, what-if scenario projection, and a
//! five-step quotation wizard with staged form state and snapshot
//! persistence.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
