//! StepValidator - gating predicates for wizard navigation.
//!
//! Validity is computed fresh on every call from the current quotation and
//! staged step data (never cached), since the wizard shell enables and
//! disables its navigation controls from this vector on every render.
//!
//! Staged form state takes precedence over the committed quotation: a field
//! the agent has filled in but not yet committed still counts toward its
//! step's validity.

use crate::domain::quotation::Quotation;

use super::{StepDataStore, StepSequence, WizardStep};

/// Stateless validity computation over quotation + staged step data.
pub struct StepValidator;

impl StepValidator {
    /// Returns whether the given step's predicate currently holds.
    ///
    /// - `TemplateChoice`: always valid (a blank start is allowed)
    /// - `CustomerTrip`: customer name + email, trip name, a destination,
    ///   both dates, and a positive participant count
    /// - `Services`: at least one service line; in day-by-day mode, at least
    ///   one day with at least one activity
    /// - `PricingTerms`: a validity deadline has been chosen on the step
    /// - `ReviewSend`: always valid (review only)
    pub fn validate_step(step: WizardStep, quotation: &Quotation, staged: &StepDataStore) -> bool {
        match step {
            WizardStep::TemplateChoice => true,
            WizardStep::CustomerTrip => {
                let customer = staged
                    .customer_trip
                    .customer
                    .as_ref()
                    .unwrap_or_else(|| quotation.customer());
                let trip = staged
                    .customer_trip
                    .trip
                    .as_ref()
                    .unwrap_or_else(|| quotation.trip());
                customer.is_complete() && trip.is_complete()
            }
            WizardStep::Services => {
                let day_mode = staged
                    .services
                    .use_day_plan
                    .unwrap_or_else(|| quotation.uses_day_plan());
                if day_mode {
                    staged
                        .services
                        .day_plan
                        .as_ref()
                        .or_else(|| quotation.day_plan())
                        .is_some_and(|plan| plan.has_activities())
                } else {
                    let line_count = staged
                        .services
                        .services
                        .as_ref()
                        .map(|lines| lines.len())
                        .unwrap_or_else(|| quotation.services().len());
                    line_count > 0
                }
            }
            WizardStep::PricingTerms => staged.pricing_terms.valid_until.is_some(),
            WizardStep::ReviewSend => true,
        }
    }

    /// The full validity vector, one flag per step in canonical order.
    pub fn validation_vector(
        quotation: &Quotation,
        staged: &StepDataStore,
    ) -> [bool; StepSequence::LEN] {
        let mut vector = [false; StepSequence::LEN];
        for (slot, step) in vector.iter_mut().zip(StepSequence::ORDER) {
            *slot = Self::validate_step(step, quotation, staged);
        }
        vector
    }
}
