//! Wizard module - step ordering, staged form state, and navigation gating.

mod snapshot;
mod step;
mod step_data;
mod validator;

pub use snapshot::WizardSnapshot;
pub use step::{StepSequence, WizardStep};
pub use step_data::{
    CustomerTripData, PricingTermsData, ReviewSendData, ServicesData, StepData, StepDataStore,
    TemplateChoiceData,
};
pub use validator::StepValidator;
