//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Tourcraft domain.

mod errors;
mod ids;
mod quotation_status;
mod timestamp;
mod version;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuotationId, RequirementId, ServiceLineId, UserId};
pub use quotation_status::QuotationStatus;
pub use timestamp::Timestamp;
pub use version::VersionLabel;
