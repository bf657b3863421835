//! PricingCalculator - pure derivation of a PricingBreakdown from line items.
//!
//! The calculator has no side effects; the aggregate stores the result and
//! touches its `updated_at`. Flat service lines and the day-by-day plan are
//! mutually exclusive accumulation paths: when a day plan is supplied, only
//! its activities are counted.

use tracing::warn;

use super::{CategoryTotals, DayPlan, PricingBreakdown};
use crate::domain::quotation::ServiceLine;

/// Tax rate applied when no rate is configured.
pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// Stateless pricing computation over service lines and day plans.
pub struct PricingCalculator;

impl PricingCalculator {
    /// Computes the full breakdown.
    ///
    /// Only lines and activities with `is_included == true` count toward the
    /// client-facing subtotal; excluded entries are costed internally and
    /// skipped here.
    ///
    /// # Edge Cases
    /// - `participants == 0`: `per_person_price` is None
    /// - discounts exceeding `subtotal + taxes`: total clamps to 0 with a
    ///   logged warning; the requested discount figure is kept in the result
    pub fn compute(
        lines: &[ServiceLine],
        day_plan: Option<&DayPlan>,
        participants: u32,
        discounts: f64,
        tax_rate: f64,
        currency: &str,
    ) -> PricingBreakdown {
        let mut breakdown = CategoryTotals::default();
        let mut subtotal = 0.0;
        let mut markup = 0.0;

        match day_plan {
            Some(plan) => {
                for activity in plan.activities().filter(|a| a.is_included) {
                    subtotal += activity.price;
                    breakdown.add(activity.category, activity.price);
                }
            }
            None => {
                for line in lines.iter().filter(|l| l.is_included()) {
                    subtotal += line.final_price();
                    markup += line.markup_amount();
                    breakdown.add(line.category(), line.final_price());
                }
            }
        }

        let taxes = subtotal * tax_rate;
        let gross = subtotal + taxes;
        let total = if discounts > gross {
            warn!(
                discounts,
                gross, "discounts exceed subtotal plus taxes; clamping total to zero"
            );
            0.0
        } else {
            gross - discounts
        };

        let per_person_price = if participants > 0 {
            Some(total / f64::from(participants))
        } else {
            None
        };

        PricingBreakdown {
            subtotal,
            markup,
            taxes,
            discounts,
            total,
            currency: currency.to_string(),
            per_person_price,
            breakdown,
        }
    }
}
