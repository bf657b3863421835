//! ServiceLine entity - one priced, categorized item on a quotation.
//!
//! # Invariants
//!
//! - `total_cost = quantity * unit_price`
//! - `markup_amount = total_cost * markup_percent / 100`
//! - `final_price = total_cost + markup_amount`
//!
//! Derived fields are recomputed by every constructor and mutator; no code
//! path leaves them stale. Field edits never fail; negative inputs are
//! clamped to zero (validity is enforced at the wizard seam, not here).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ServiceLineId;

/// Sellable service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Accommodation,
    Transport,
    Guides,
    Meals,
    Activities,
    Sightseeing,
    #[default]
    Other,
}

impl ServiceCategory {
    /// All categories, in display order.
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::Accommodation,
        ServiceCategory::Transport,
        ServiceCategory::Guides,
        ServiceCategory::Meals,
        ServiceCategory::Activities,
        ServiceCategory::Sightseeing,
        ServiceCategory::Other,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Accommodation => "Accommodation",
            ServiceCategory::Transport => "Transport",
            ServiceCategory::Guides => "Guides",
            ServiceCategory::Meals => "Meals",
            ServiceCategory::Activities => "Activities",
            ServiceCategory::Sightseeing => "Sightseeing",
            ServiceCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Read-only catalogue record a new line can be copied from.
///
/// Templates and supplier entries share this shape; "add from template"
/// copies the fields into a fresh line with a newly generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTemplate {
    pub category: ServiceCategory,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub unit_price: f64,
    pub markup_percent: f64,
    /// Supplier name for catalogue entries; None for house templates.
    pub supplier: Option<String>,
}

/// Partial update for a service line; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceLinePatch {
    pub category: Option<ServiceCategory>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub markup_percent: Option<f64>,
    pub is_included: Option<bool>,
    pub notes: Option<Option<String>>,
}

/// One priced line item on a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    id: ServiceLineId,
    category: ServiceCategory,
    name: String,
    description: String,
    /// Billing unit label, e.g. "room-nights" or "transfers".
    unit: String,
    quantity: f64,
    unit_price: f64,
    markup_percent: f64,
    /// True when the line is in client-facing scope (counted toward the
    /// client subtotal); false when costed internally only.
    is_included: bool,
    notes: Option<String>,
    total_cost: f64,
    markup_amount: f64,
    final_price: f64,
}

impl ServiceLine {
    /// Creates a new line with a fresh id and recomputed totals.
    pub fn new(
        category: ServiceCategory,
        name: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        markup_percent: f64,
    ) -> Self {
        let mut line = Self {
            id: ServiceLineId::new(),
            category,
            name: name.into(),
            description: String::new(),
            unit: String::new(),
            quantity,
            unit_price,
            markup_percent,
            is_included: true,
            notes: None,
            total_cost: 0.0,
            markup_amount: 0.0,
            final_price: 0.0,
        };
        line.recalculate();
        line
    }

    /// Copies a catalogue record into a fresh line (new id, quantity 1).
    pub fn from_template(template: &ServiceTemplate) -> Self {
        let mut line = Self::new(
            template.category,
            template.name.clone(),
            1.0,
            template.unit_price,
            template.markup_percent,
        );
        line.description = template.description.clone();
        line.unit = template.unit.clone();
        line
    }

    /// Sets the billing unit label.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the line as out of client-facing scope.
    pub fn excluded(mut self) -> Self {
        self.is_included = false;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ServiceLineId {
        self.id
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn markup_percent(&self) -> f64 {
        self.markup_percent
    }

    pub fn is_included(&self) -> bool {
        self.is_included
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Net cost: `quantity * unit_price`.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Margin on top of net cost: `total_cost * markup_percent / 100`.
    pub fn markup_amount(&self) -> f64 {
        self.markup_amount
    }

    /// Client-facing price: `total_cost + markup_amount`.
    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update, then recomputes derived totals.
    pub fn apply_patch(&mut self, patch: ServiceLinePatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(markup_percent) = patch.markup_percent {
            self.markup_percent = markup_percent;
        }
        if let Some(is_included) = patch.is_included {
            self.is_included = is_included;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.recalculate();
    }

    /// Recomputes `total_cost`, `markup_amount`, and `final_price`.
    ///
    /// Negative quantity, price, or markup inputs are clamped to zero first.
    fn recalculate(&mut self) {
        self.quantity = self.quantity.max(0.0);
        self.unit_price = self.unit_price.max(0.0);
        self.markup_percent = self.markup_percent.max(0.0);

        self.total_cost = self.quantity * self.unit_price;
        self.markup_amount = self.total_cost * self.markup_percent / 100.0;
        self.final_price = self.total_cost + self.markup_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel_line() -> ServiceLine {
        ServiceLine::new(ServiceCategory::Accommodation, "Hotel Andino", 3.0, 80.0, 10.0)
            .with_unit("room-nights")
    }

    #[test]
    fn new_line_computes_derived_totals() {
        let line = hotel_line();
        assert_eq!(line.total_cost(), 240.0);
        assert_eq!(line.markup_amount(), 24.0);
        assert_eq!(line.final_price(), 264.0);
    }

    #[test]
    fn new_line_is_included_by_default() {
        assert!(hotel_line().is_included());
    }

    #[test]
    fn patch_quantity_recomputes_totals() {
        let mut line = hotel_line();
        line.apply_patch(ServiceLinePatch {
            quantity: Some(5.0),
            ..Default::default()
        });
        assert_eq!(line.total_cost(), 400.0);
        assert_eq!(line.final_price(), 440.0);
    }

    #[test]
    fn patch_markup_recomputes_totals() {
        let mut line = hotel_line();
        line.apply_patch(ServiceLinePatch {
            markup_percent: Some(50.0),
            ..Default::default()
        });
        assert_eq!(line.markup_amount(), 120.0);
        assert_eq!(line.final_price(), 360.0);
    }

    #[test]
    fn markup_may_exceed_one_hundred_percent() {
        let line = ServiceLine::new(ServiceCategory::Guides, "Alpine guide", 1.0, 100.0, 150.0);
        assert_eq!(line.final_price(), 250.0);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let mut line = hotel_line();
        line.apply_patch(ServiceLinePatch {
            quantity: Some(-2.0),
            ..Default::default()
        });
        assert_eq!(line.quantity(), 0.0);
        assert_eq!(line.final_price(), 0.0);
    }

    #[test]
    fn patch_can_clear_notes() {
        let mut line = hotel_line();
        line.apply_patch(ServiceLinePatch {
            notes: Some(Some("sea view".to_string())),
            ..Default::default()
        });
        assert_eq!(line.notes(), Some("sea view"));

        line.apply_patch(ServiceLinePatch {
            notes: Some(None),
            ..Default::default()
        });
        assert_eq!(line.notes(), None);
    }

    #[test]
    fn from_template_copies_fields_with_fresh_id() {
        let template = ServiceTemplate {
            category: ServiceCategory::Transport,
            name: "Airport transfer".to_string(),
            description: "Private van, both ways".to_string(),
            unit: "transfers".to_string(),
            unit_price: 45.0,
            markup_percent: 12.0,
            supplier: Some("Andes Mobility".to_string()),
        };

        let a = ServiceLine::from_template(&template);
        let b = ServiceLine::from_template(&template);

        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), "Airport transfer");
        assert_eq!(a.unit(), "transfers");
        assert_eq!(a.quantity(), 1.0);
        assert_eq!(a.final_price(), 45.0 * 1.12);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&ServiceCategory::Sightseeing).unwrap();
        assert_eq!(json, "\"sightseeing\"");
    }
}
