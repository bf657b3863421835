//! Application layer - orchestrates the wizard over the domain.

mod session;

pub use session::QuotationSession;
