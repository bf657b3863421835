//! Step data - in-progress wizard form state, staged per step.
//!
//! Each step has its own typed payload; the store keeps one payload per step
//! independent of the committed quotation. Merging is shallow: a `Some`
//! field in an incoming payload replaces the stored field wholesale (arrays
//! included), a `None` field leaves the stored value untouched.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::pricing::DayPlan;
use crate::domain::quotation::{CustomerSnapshot, RequirementItem, ServiceLine, TripDetails};

use super::WizardStep;

/// Step 0 - template choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TemplateChoiceData {
    /// Catalogue key of the chosen template; None for a blank start.
    pub template_key: Option<String>,
}

impl TemplateChoiceData {
    fn merge_from(&mut self, other: Self) {
        if other.template_key.is_some() {
            self.template_key = other.template_key;
        }
    }
}

/// Step 1 - customer, trip, and requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerTripData {
    pub customer: Option<CustomerSnapshot>,
    pub trip: Option<TripDetails>,
    pub requirements: Option<Vec<RequirementItem>>,
}

impl CustomerTripData {
    fn merge_from(&mut self, other: Self) {
        if other.customer.is_some() {
            self.customer = other.customer;
        }
        if other.trip.is_some() {
            self.trip = other.trip;
        }
        if other.requirements.is_some() {
            self.requirements = other.requirements;
        }
    }
}

/// Step 2 - service lines or a day-by-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServicesData {
    pub services: Option<Vec<ServiceLine>>,
    pub day_plan: Option<DayPlan>,
    pub use_day_plan: Option<bool>,
}

impl ServicesData {
    fn merge_from(&mut self, other: Self) {
        if other.services.is_some() {
            self.services = other.services;
        }
        if other.day_plan.is_some() {
            self.day_plan = other.day_plan;
        }
        if other.use_day_plan.is_some() {
            self.use_day_plan = other.use_day_plan;
        }
    }
}

/// Step 3 - pricing, terms, and validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PricingTermsData {
    pub discounts: Option<f64>,
    pub tax_rate: Option<f64>,
    pub valid_until: Option<Timestamp>,
    pub payment_terms: Option<String>,
    pub terms_and_conditions: Option<String>,
}

impl PricingTermsData {
    fn merge_from(&mut self, other: Self) {
        if other.discounts.is_some() {
            self.discounts = other.discounts;
        }
        if other.tax_rate.is_some() {
            self.tax_rate = other.tax_rate;
        }
        if other.valid_until.is_some() {
            self.valid_until = other.valid_until;
        }
        if other.payment_terms.is_some() {
            self.payment_terms = other.payment_terms;
        }
        if other.terms_and_conditions.is_some() {
            self.terms_and_conditions = other.terms_and_conditions;
        }
    }
}

/// Step 4 - notes and send options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReviewSendData {
    pub internal_notes: Option<String>,
    pub client_message: Option<String>,
    pub send_copy_to_self: Option<bool>,
}

impl ReviewSendData {
    fn merge_from(&mut self, other: Self) {
        if other.internal_notes.is_some() {
            self.internal_notes = other.internal_notes;
        }
        if other.client_message.is_some() {
            self.client_message = other.client_message;
        }
        if other.send_copy_to_self.is_some() {
            self.send_copy_to_self = other.send_copy_to_self;
        }
    }
}

/// One step's staged payload, tagged by step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepData {
    TemplateChoice(TemplateChoiceData),
    CustomerTrip(CustomerTripData),
    Services(ServicesData),
    PricingTerms(PricingTermsData),
    ReviewSend(ReviewSendData),
}

impl StepData {
    /// The step this payload belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            StepData::TemplateChoice(_) => WizardStep::TemplateChoice,
            StepData::CustomerTrip(_) => WizardStep::CustomerTrip,
            StepData::Services(_) => WizardStep::Services,
            StepData::PricingTerms(_) => WizardStep::PricingTerms,
            StepData::ReviewSend(_) => WizardStep::ReviewSend,
        }
    }
}

/// All staged form state, one slot per wizard step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StepDataStore {
    pub template_choice: TemplateChoiceData,
    pub customer_trip: CustomerTripData,
    pub services: ServicesData,
    pub pricing_terms: PricingTermsData,
    pub review_send: ReviewSendData,
}

impl StepDataStore {
    /// Merges a payload into its step's slot (shallow, field-wise).
    pub fn merge(&mut self, data: StepData) {
        match data {
            StepData::TemplateChoice(d) => self.template_choice.merge_from(d),
            StepData::CustomerTrip(d) => self.customer_trip.merge_from(d),
            StepData::Services(d) => self.services.merge_from(d),
            StepData::PricingTerms(d) => self.pricing_terms.merge_from(d),
            StepData::ReviewSend(d) => self.review_send.merge_from(d),
        }
    }

    /// Drops all staged data.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
