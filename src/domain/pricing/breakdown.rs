//! PricingBreakdown value object - the computed price card of a quotation.

use serde::{Deserialize, Serialize};

use crate::domain::quotation::ServiceCategory;

/// Per-category subtotals, one slot per [`ServiceCategory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryTotals {
    pub accommodation: f64,
    pub transport: f64,
    pub guides: f64,
    pub meals: f64,
    pub activities: f64,
    pub sightseeing: f64,
    pub other: f64,
}

impl CategoryTotals {
    /// Returns the subtotal accumulated for one category.
    pub fn get(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Accommodation => self.accommodation,
            ServiceCategory::Transport => self.transport,
            ServiceCategory::Guides => self.guides,
            ServiceCategory::Meals => self.meals,
            ServiceCategory::Activities => self.activities,
            ServiceCategory::Sightseeing => self.sightseeing,
            ServiceCategory::Other => self.other,
        }
    }

    /// Adds an amount to one category's slot.
    pub fn add(&mut self, category: ServiceCategory, amount: f64) {
        let slot = match category {
            ServiceCategory::Accommodation => &mut self.accommodation,
            ServiceCategory::Transport => &mut self.transport,
            ServiceCategory::Guides => &mut self.guides,
            ServiceCategory::Meals => &mut self.meals,
            ServiceCategory::Activities => &mut self.activities,
            ServiceCategory::Sightseeing => &mut self.sightseeing,
            ServiceCategory::Other => &mut self.other,
        };
        *slot += amount;
    }

    /// Sum over all category slots; equals the breakdown subtotal.
    pub fn sum(&self) -> f64 {
        ServiceCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Computed pricing for a quotation.
///
/// Always a cache of the calculator output over the current service lines;
/// the aggregate overwrites it synchronously after every line mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Sum of final prices over in-scope lines.
    pub subtotal: f64,
    /// Margin portion already folded into `subtotal`.
    pub markup: f64,
    pub taxes: f64,
    /// Requested discount amount (pre-clamp; see calculator).
    pub discounts: f64,
    /// `max(0, subtotal + taxes - discounts)`.
    pub total: f64,
    pub currency: String,
    pub per_person_price: Option<f64>,
    pub breakdown: CategoryTotals,
}

impl PricingBreakdown {
    /// An all-zero breakdown in the given currency.
    pub fn zeroed(currency: impl Into<String>) -> Self {
        Self {
            subtotal: 0.0,
            markup: 0.0,
            taxes: 0.0,
            discounts: 0.0,
            total: 0.0,
            currency: currency.into(),
            per_person_price: None,
            breakdown: CategoryTotals::default(),
        }
    }
}

impl Default for PricingBreakdown {
    fn default() -> Self {
        Self::zeroed("USD")
    }
}
