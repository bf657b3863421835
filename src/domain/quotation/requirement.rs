//! RequirementItem entity - a customer wish or constraint tracked on a quotation.
//!
//! Requirements carry no pricing weight; `estimated_cost` is advisory and
//! never feeds the pricing calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::RequirementId;

/// What area of the trip a requirement concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Accommodation,
    Transport,
    Activities,
    Dining,
    SpecialNeeds,
    #[default]
    Other,
}

/// How urgently a requirement must be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether a requirement has been dealt with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    #[default]
    Pending,
    Addressed,
    NotApplicable,
}

impl RequirementStatus {
    /// Returns true if the requirement still needs attention.
    pub fn is_open(&self) -> bool {
        matches!(self, RequirementStatus::Pending)
    }
}

/// Partial update for a requirement; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<RequirementCategory>,
    pub priority: Option<Priority>,
    pub status: Option<RequirementStatus>,
    pub notes: Option<Option<String>>,
    pub estimated_cost: Option<Option<f64>>,
}

/// One customer requirement on a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementItem {
    id: RequirementId,
    title: String,
    description: String,
    category: RequirementCategory,
    priority: Priority,
    status: RequirementStatus,
    notes: Option<String>,
    estimated_cost: Option<f64>,
}

impl RequirementItem {
    /// Creates a new pending requirement with a fresh id.
    pub fn new(
        title: impl Into<String>,
        category: RequirementCategory,
        priority: Priority,
    ) -> Self {
        Self {
            id: RequirementId::new(),
            title: title.into(),
            description: String::new(),
            category,
            priority,
            status: RequirementStatus::Pending,
            notes: None,
            estimated_cost: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the advisory cost estimate.
    pub fn with_estimated_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = Some(cost);
        self
    }

    pub fn id(&self) -> RequirementId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> RequirementCategory {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> RequirementStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn estimated_cost(&self) -> Option<f64> {
        self.estimated_cost
    }

    /// Applies a partial update.
    pub fn apply_patch(&mut self, patch: RequirementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(estimated_cost) = patch.estimated_cost {
            self.estimated_cost = estimated_cost;
        }
    }
}
