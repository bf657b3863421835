//! ScenarioProjector - "what-if" re-pricing under hypothetical trip changes.
//!
//! Given the baseline lines and a hypothetical traveler count and duration,
//! each line's cost is re-derived with a category-specific scaling rule and
//! aggregated into an adjusted total. The projector is read-only: baseline
//! lines are borrowed, never mutated, and nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ServiceLineId;
use crate::domain::quotation::{ServiceCategory, ServiceLine};

/// Traveler-scaling cap for fixed-capacity transport.
const TRANSPORT_TRAVELER_CAP: f64 = 1.5;

/// The committed trip a projection starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripShape {
    pub travelers: u32,
    pub duration_days: u32,
}

/// One line's baseline and adjusted price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedLine {
    pub id: ServiceLineId,
    pub name: String,
    pub category: ServiceCategory,
    pub baseline_price: f64,
    pub adjusted_price: f64,
}

/// Result of a what-if projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub adjusted_total: f64,
    /// 0 when the hypothetical has no travelers.
    pub price_per_person: f64,
    /// Percent change of the adjusted total versus baseline; 0 when the
    /// baseline total is 0.
    pub margin_impact_percent: f64,
    pub lines: Vec<AdjustedLine>,
}

/// Stateless what-if projection over a quotation's service lines.
pub struct ScenarioProjector;

impl ScenarioProjector {
    /// Projects the baseline lines onto a hypothetical trip shape.
    ///
    /// Zero-guards: a zero baseline traveler count makes the traveler ratio
    /// 1. For the per-day rules (accommodation, transport, guides) a zero
    /// baseline duration skips only the division, so the full line price
    /// counts as one day and the hypothetical-duration multiplier still
    /// applies; the plain duration ratio used by the remaining rules falls
    /// back to 1.
    pub fn project(
        lines: &[ServiceLine],
        baseline: TripShape,
        hypothetical: TripShape,
    ) -> ScenarioProjection {
        let traveler_ratio = ratio(hypothetical.travelers, baseline.travelers);
        let duration_ratio = ratio(hypothetical.duration_days, baseline.duration_days);
        // (price / baseline.duration) × hypothetical.duration, with the
        // division skipped when the baseline has no duration
        let duration_scale = if baseline.duration_days == 0 {
            f64::from(hypothetical.duration_days)
        } else {
            duration_ratio
        };
        let room_ratio = ratio(
            rooms_for(hypothetical.travelers),
            rooms_for(baseline.travelers),
        );

        let mut baseline_total = 0.0;
        let mut adjusted_total = 0.0;
        let mut adjusted_lines = Vec::with_capacity(lines.len());

        for line in lines {
            let price = line.final_price();
            let adjusted = match line.category() {
                // Nights scale with duration; rooms assume double occupancy
                ServiceCategory::Accommodation => price * duration_scale * room_ratio,
                // Vehicles have fixed capacity; traveler scaling caps at 1.5x
                ServiceCategory::Transport => {
                    price * duration_scale * traveler_ratio.min(TRANSPORT_TRAVELER_CAP)
                }
                // Guide cost is per-day regardless of group size
                ServiceCategory::Guides => price * duration_scale,
                ServiceCategory::Meals | ServiceCategory::Activities => {
                    price * traveler_ratio * duration_ratio
                }
                ServiceCategory::Sightseeing | ServiceCategory::Other => {
                    price * traveler_ratio.max(duration_ratio)
                }
            };

            baseline_total += price;
            adjusted_total += adjusted;
            adjusted_lines.push(AdjustedLine {
                id: line.id(),
                name: line.name().to_string(),
                category: line.category(),
                baseline_price: price,
                adjusted_price: adjusted,
            });
        }

        let price_per_person = if hypothetical.travelers > 0 {
            adjusted_total / f64::from(hypothetical.travelers)
        } else {
            0.0
        };

        let margin_impact_percent = if baseline_total > 0.0 {
            (adjusted_total - baseline_total) / baseline_total * 100.0
        } else {
            0.0
        };

        ScenarioProjection {
            adjusted_total,
            price_per_person,
            margin_impact_percent,
            lines: adjusted_lines,
        }
    }
}

/// `hypothetical / baseline`, treating a zero baseline as ratio 1.
fn ratio(hypothetical: u32, baseline: u32) -> f64 {
    if baseline == 0 {
        1.0
    } else {
        f64::from(hypothetical) / f64::from(baseline)
    }
}

/// Rooms needed under double occupancy.
fn rooms_for(travelers: u32) -> u32 {
    travelers.div_ceil(2)
}
