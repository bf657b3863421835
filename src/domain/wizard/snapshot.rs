//! WizardSnapshot - the exact state handed to the persistence port.
//!
//! Only `{quotation, step_data, current_step}` is persisted; transient
//! session concerns (in-flight errors, saving flags) never cross this
//! boundary. Everything here is JSON-representable, with dates as ISO-8601
//! strings.

use serde::{Deserialize, Serialize};

use crate::domain::quotation::Quotation;

use super::{StepDataStore, WizardStep};

/// Serializable wizard state for the key-value snapshot store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub quotation: Quotation,
    pub step_data: StepDataStore,
    pub current_step: WizardStep,
}
