//! Pricing module - pure derivation of totals, margins, and projections.
//!
//! - `breakdown` - the computed price card (`PricingBreakdown`)
//! - `calculator` - subtotal/tax/discount computation over line items
//! - `day_plan` - day-by-day itinerary model (alternative accumulation path)
//! - `scenario` - what-if projection under hypothetical trip changes

mod breakdown;
mod calculator;
mod day_plan;
mod scenario;

pub use breakdown::{CategoryTotals, PricingBreakdown};
pub use calculator::{PricingCalculator, DEFAULT_TAX_RATE};
pub use day_plan::{DayActivity, DayPlan, ItineraryDay};
pub use scenario::{AdjustedLine, ScenarioProjection, ScenarioProjector, TripShape};
