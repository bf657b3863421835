//! Quotation template - pre-built defaults a new quotation can start from.

use serde::{Deserialize, Serialize};

use super::ServiceTemplate;

/// A reusable starting point for the wizard's template-choice step.
///
/// Templates are supplied read-only by the catalogue collaborator; applying
/// one overlays its defaults onto a freshly initialized quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationTemplate {
    /// Stable catalogue key, e.g. "andes-classic".
    pub key: String,
    pub name: String,
    pub description: String,
    pub trip_name: Option<String>,
    pub destinations: Vec<String>,
    /// Lines pre-added to the quotation when the template is applied.
    pub services: Vec<ServiceTemplate>,
}
