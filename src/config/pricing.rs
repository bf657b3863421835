//! Pricing configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::pricing::DEFAULT_TAX_RATE;

/// Defaults fed into quotation initialization and the pricing calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Tax rate as a fraction, e.g. 0.10 for 10%
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// ISO 4217 currency code for new quotations
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Days a new quotation stays valid
    #[serde(default = "default_validity_days")]
    pub validity_days: i64,
}

impl PricingConfig {
    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ValidationError::InvalidTaxRate);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency);
        }
        if self.validity_days < 1 {
            return Err(ValidationError::InvalidValidityWindow);
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            currency: default_currency(),
            validity_days: default_validity_days(),
        }
    }
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_validity_days() -> i64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tax_rate, 0.10);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.validity_days, 30);
    }

    #[test]
    fn default_tax_rate_matches_the_calculator_default() {
        assert_eq!(PricingConfig::default().tax_rate, DEFAULT_TAX_RATE);
    }

    #[test]
    fn negative_tax_rate_fails_validation() {
        let config = PricingConfig {
            tax_rate: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTaxRate)
        ));
    }

    #[test]
    fn lowercase_currency_fails_validation() {
        let config = PricingConfig {
            currency: "usd".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCurrency)
        ));
    }

    #[test]
    fn zero_validity_window_fails_validation() {
        let config = PricingConfig {
            validity_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidValidityWindow)
        ));
    }
}
