//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Tax rate must be between 0 and 1")]
    InvalidTaxRate,

    #[error("Currency must be a three-letter code")]
    InvalidCurrency,

    #[error("Validity window must be at least one day")]
    InvalidValidityWindow,
}
