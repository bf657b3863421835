//! Quotation module - the aggregate root and its owned entities.
//!
//! - `aggregate` - the `Quotation` root
//! - `service_line` - priced line items and catalogue templates
//! - `requirement` - customer wishes and constraints
//! - `customer` / `trip` - snapshot value objects
//! - `template` - whole-quotation starting templates

mod aggregate;
mod customer;
mod requirement;
mod service_line;
mod template;
mod trip;

pub use aggregate::Quotation;
pub use customer::{CustomerSnapshot, CustomerType};
pub use requirement::{
    Priority, RequirementCategory, RequirementItem, RequirementPatch, RequirementStatus,
};
pub use service_line::{ServiceCategory, ServiceLine, ServiceLinePatch, ServiceTemplate};
pub use template::QuotationTemplate;
pub use trip::TripDetails;
