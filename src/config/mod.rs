//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOURCRAFT` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use tourcraft::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Quoting in {}", config.pricing.currency);
//! ```

mod error;
mod features;
mod pricing;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use pricing::PricingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Pricing defaults (tax rate, currency, validity window)
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `TOURCRAFT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TOURCRAFT__PRICING__TAX_RATE=0.21` -> `pricing.tax_rate = 0.21`
    /// - `TOURCRAFT__PRICING__CURRENCY=EUR` -> `pricing.currency = "EUR"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOURCRAFT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_deserializes_nested_sections() {
        let json = r#"{
            "pricing": { "tax_rate": 0.21, "currency": "EUR", "validity_days": 14 },
            "features": { "day_by_day_planning": true }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pricing.tax_rate, 0.21);
        assert_eq!(config.pricing.currency, "EUR");
        assert_eq!(config.pricing.validity_days, 14);
        assert!(config.features.day_by_day_planning);
    }
}
