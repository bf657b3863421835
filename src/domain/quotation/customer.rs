//! Customer snapshot value object.
//!
//! A quotation captures a copy of the customer's details at drafting time
//! rather than referencing a live CRM record.

use serde::{Deserialize, Serialize};

/// Kind of customer the quotation is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    #[default]
    Individual,
    Company,
    Agency,
}

/// Snapshot of the customer a quotation is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerSnapshot {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub customer_type: CustomerType,
}

impl CustomerSnapshot {
    /// Creates a snapshot with just name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Returns true when both name and email are filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}
