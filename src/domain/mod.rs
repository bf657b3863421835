//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `quotation` - The quotation aggregate and its owned entities
//! - `pricing` - Pure pricing, breakdown, and what-if projection services
//! - `wizard` - Step sequencing, staged form state, and navigation gating

pub mod foundation;
pub mod pricing;
pub mod quotation;
pub mod wizard;
