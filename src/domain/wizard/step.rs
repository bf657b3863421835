//! WizardStep - the five stations of the quotation builder.
//!
//! 0. TemplateChoice → 1. CustomerTrip → 2. Services → 3. PricingTerms →
//! 4. ReviewSend
//!
//! All ordering logic lives in [`StepSequence`] so navigation, validation,
//! and persistence agree on one canonical order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the quotation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    TemplateChoice,
    CustomerTrip,
    Services,
    PricingTerms,
    ReviewSend,
}

impl WizardStep {
    /// Returns the display title used by the wizard shell.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::TemplateChoice => "Choose template",
            WizardStep::CustomerTrip => "Customer & trip",
            WizardStep::Services => "Services",
            WizardStep::PricingTerms => "Pricing & terms",
            WizardStep::ReviewSend => "Review & send",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Central location for step ordering logic.
pub struct StepSequence;

impl StepSequence {
    /// The canonical order of wizard steps.
    pub const ORDER: [WizardStep; 5] = [
        WizardStep::TemplateChoice,
        WizardStep::CustomerTrip,
        WizardStep::Services,
        WizardStep::PricingTerms,
        WizardStep::ReviewSend,
    ];

    /// Number of steps in the wizard.
    pub const LEN: usize = Self::ORDER.len();

    /// Returns all steps in order.
    pub fn all() -> &'static [WizardStep; 5] {
        &Self::ORDER
    }

    /// Returns the 0-based index of a step.
    #[inline]
    pub fn order_index(step: WizardStep) -> usize {
        Self::ORDER
            .iter()
            .position(|&s| s == step)
            .expect("All WizardStep variants must be in ORDER")
    }

    /// Returns the step at a 0-based index, if in range.
    pub fn at_index(index: usize) -> Option<WizardStep> {
        Self::ORDER.get(index).copied()
    }

    /// Returns the next step, or None if at the end.
    pub fn next(step: WizardStep) -> Option<WizardStep> {
        let idx = Self::order_index(step);
        Self::ORDER.get(idx + 1).copied()
    }

    /// Returns the previous step, or None if at the start.
    pub fn previous(step: WizardStep) -> Option<WizardStep> {
        let idx = Self::order_index(step);
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// Returns the first step.
    pub fn first() -> WizardStep {
        Self::ORDER[0]
    }

    /// Returns the last step.
    pub fn last() -> WizardStep {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// Returns true if this is the last step.
    pub fn is_last(step: WizardStep) -> bool {
        step == Self::last()
    }
}
