//! Quotation aggregate root.
//!
//! The quotation exclusively owns its `services` and `requirements` lists.
//! `pricing` is a cache of the calculator output over the current lines:
//! every service mutation recomputes it synchronously before returning, so a
//! caller can never observe a quotation whose pricing disagrees with its
//! lines. All mutations touch `updated_at`.
//!
//! Field constraints here are advisory; free-form editing never fails. The
//! wizard's step validator gates navigation instead. The only fallible
//! operations are id-keyed update/remove (unknown id) and versioning
//! (suffix overflow, non-draft transitions).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, QuotationId, QuotationStatus, RequirementId, ServiceLineId, Timestamp,
    VersionLabel,
};
use crate::domain::pricing::{DayPlan, PricingBreakdown, PricingCalculator};

use super::{
    CustomerSnapshot, QuotationTemplate, RequirementItem, RequirementPatch, ServiceLine,
    ServiceLinePatch, TripDetails,
};

/// Root entity for one client-facing travel proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    id: QuotationId,
    quotation_number: Option<String>,
    version: VersionLabel,
    status: QuotationStatus,
    customer: CustomerSnapshot,
    trip: TripDetails,
    requirements: Vec<RequirementItem>,
    services: Vec<ServiceLine>,
    /// Day-by-day plan; when present it replaces the flat service list as the
    /// pricing accumulation path.
    day_plan: Option<DayPlan>,
    pricing: PricingBreakdown,
    /// Flat discount amount subtracted from subtotal + taxes.
    discounts: f64,
    tax_rate: f64,
    currency: String,
    valid_until: Timestamp,
    created_at: Timestamp,
    updated_at: Timestamp,
    cloned_from: Option<QuotationId>,
}

impl Quotation {
    /// Creates a fresh draft: `v1`, empty lists, zeroed pricing, validity
    /// window of `validity_days` from now.
    pub fn initialize(tax_rate: f64, currency: impl Into<String>, validity_days: i64) -> Self {
        let now = Timestamp::now();
        let currency = currency.into();
        Self {
            id: QuotationId::new(),
            quotation_number: None,
            version: VersionLabel::initial(),
            status: QuotationStatus::Draft,
            customer: CustomerSnapshot::default(),
            trip: TripDetails::default(),
            requirements: Vec::new(),
            services: Vec::new(),
            day_plan: None,
            pricing: PricingBreakdown::zeroed(currency.clone()),
            discounts: 0.0,
            tax_rate,
            currency,
            valid_until: now.plus_days(validity_days),
            created_at: now,
            updated_at: now,
            cloned_from: None,
        }
    }

    /// Copies every business field from `source` while stripping identity:
    /// fresh id, no quotation number, version back to `v1`, status draft,
    /// new timestamps and validity window.
    pub fn clone_from(source: &Quotation, validity_days: i64) -> Self {
        let now = Timestamp::now();
        Self {
            id: QuotationId::new(),
            quotation_number: None,
            version: VersionLabel::initial(),
            status: QuotationStatus::Draft,
            customer: source.customer.clone(),
            trip: source.trip.clone(),
            requirements: source.requirements.clone(),
            services: source.services.clone(),
            day_plan: source.day_plan.clone(),
            pricing: source.pricing.clone(),
            discounts: source.discounts,
            tax_rate: source.tax_rate,
            currency: source.currency.clone(),
            valid_until: now.plus_days(validity_days),
            created_at: now,
            updated_at: now,
            cloned_from: Some(source.id),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> QuotationId {
        self.id
    }

    pub fn quotation_number(&self) -> Option<&str> {
        self.quotation_number.as_deref()
    }

    pub fn version(&self) -> &VersionLabel {
        &self.version
    }

    pub fn status(&self) -> QuotationStatus {
        self.status
    }

    pub fn customer(&self) -> &CustomerSnapshot {
        &self.customer
    }

    pub fn trip(&self) -> &TripDetails {
        &self.trip
    }

    pub fn requirements(&self) -> &[RequirementItem] {
        &self.requirements
    }

    pub fn services(&self) -> &[ServiceLine] {
        &self.services
    }

    pub fn day_plan(&self) -> Option<&DayPlan> {
        self.day_plan.as_ref()
    }

    /// Returns true when pricing accumulates from the day plan instead of
    /// the flat service list.
    pub fn uses_day_plan(&self) -> bool {
        self.day_plan.is_some()
    }

    pub fn pricing(&self) -> &PricingBreakdown {
        &self.pricing
    }

    pub fn discounts(&self) -> f64 {
        self.discounts
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn valid_until(&self) -> &Timestamp {
        &self.valid_until
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn cloned_from(&self) -> Option<QuotationId> {
        self.cloned_from
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field patches
    // ─────────────────────────────────────────────────────────────────────────

    /// Overlays template defaults: trip name and destinations when provided,
    /// plus one fresh line per template service.
    pub fn apply_template(&mut self, template: &QuotationTemplate) {
        if let Some(trip_name) = &template.trip_name {
            self.trip.trip_name = trip_name.clone();
        }
        if !template.destinations.is_empty() {
            self.trip.destinations = template.destinations.clone();
        }
        for service in &template.services {
            self.services.push(ServiceLine::from_template(service));
        }
        self.reprice();
        self.touch();
    }

    /// Replaces the customer snapshot.
    pub fn set_customer(&mut self, customer: CustomerSnapshot) {
        self.customer = customer;
        self.touch();
    }

    /// Replaces the trip details and reprices (participants feed the
    /// per-person price).
    pub fn set_trip(&mut self, trip: TripDetails) {
        self.trip = trip;
        self.reprice();
        self.touch();
    }

    /// Switches the day-by-day plan on (Some) or off (None) and reprices.
    pub fn set_day_plan(&mut self, day_plan: Option<DayPlan>) {
        self.day_plan = day_plan;
        self.reprice();
        self.touch();
    }

    /// Sets the flat discount amount and reprices.
    pub fn set_discounts(&mut self, discounts: f64) {
        self.discounts = discounts.max(0.0);
        self.reprice();
        self.touch();
    }

    /// Sets the tax rate and reprices.
    pub fn set_tax_rate(&mut self, tax_rate: f64) {
        self.tax_rate = tax_rate.max(0.0);
        self.reprice();
        self.touch();
    }

    /// Sets the validity deadline.
    pub fn set_valid_until(&mut self, valid_until: Timestamp) {
        self.valid_until = valid_until;
        self.touch();
    }

    /// Assigns the outbound quotation number.
    pub fn set_quotation_number(&mut self, number: impl Into<String>) {
        self.quotation_number = Some(number.into());
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Requirement CRUD
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a requirement and returns its id.
    pub fn add_requirement(&mut self, item: RequirementItem) -> RequirementId {
        let id = item.id();
        self.requirements.push(item);
        self.touch();
        id
    }

    /// Applies a partial update to the requirement with the given id.
    ///
    /// # Errors
    ///
    /// - `RequirementNotFound` if no requirement has that id
    pub fn update_requirement(
        &mut self,
        id: RequirementId,
        patch: RequirementPatch,
    ) -> Result<(), DomainError> {
        let item = self
            .requirements
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DomainError::requirement_not_found(id))?;
        item.apply_patch(patch);
        self.touch();
        Ok(())
    }

    /// Removes the requirement with the given id.
    ///
    /// # Errors
    ///
    /// - `RequirementNotFound` if no requirement has that id
    pub fn remove_requirement(&mut self, id: RequirementId) -> Result<(), DomainError> {
        let before = self.requirements.len();
        self.requirements.retain(|r| r.id() != id);
        if self.requirements.len() == before {
            return Err(DomainError::requirement_not_found(id));
        }
        self.touch();
        Ok(())
    }

    /// Replaces the whole requirement list, as when committing staged wizard
    /// data back into the aggregate.
    pub fn replace_requirements(&mut self, requirements: Vec<RequirementItem>) {
        self.requirements = requirements;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Service CRUD (every mutation reprices before returning)
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a service line, reprices, and returns the line's id.
    pub fn add_service(&mut self, line: ServiceLine) -> ServiceLineId {
        let id = line.id();
        self.services.push(line);
        self.reprice();
        self.touch();
        id
    }

    /// Applies a partial update to the line with the given id, then reprices.
    ///
    /// # Errors
    ///
    /// - `ServiceLineNotFound` if no line has that id
    pub fn update_service(
        &mut self,
        id: ServiceLineId,
        patch: ServiceLinePatch,
    ) -> Result<(), DomainError> {
        let line = self
            .services
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| DomainError::service_line_not_found(id))?;
        line.apply_patch(patch);
        self.reprice();
        self.touch();
        Ok(())
    }

    /// Removes the line with the given id, then reprices.
    ///
    /// # Errors
    ///
    /// - `ServiceLineNotFound` if no line has that id
    pub fn remove_service(&mut self, id: ServiceLineId) -> Result<(), DomainError> {
        let before = self.services.len();
        self.services.retain(|s| s.id() != id);
        if self.services.len() == before {
            return Err(DomainError::service_line_not_found(id));
        }
        self.reprice();
        self.touch();
        Ok(())
    }

    /// Replaces the whole service list and reprices.
    pub fn replace_services(&mut self, services: Vec<ServiceLine>) {
        self.services = services;
        self.reprice();
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the quotation as sent to the customer.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the quotation is a draft
    pub fn mark_sent(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuotationStatus::Sent)
    }

    /// Records customer approval.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuotationStatus::Approved)
    }

    /// Records customer rejection.
    pub fn reject(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuotationStatus::Rejected)
    }

    /// Re-opens a sent or resolved quotation as the next draft revision.
    ///
    /// Services and pricing are retained; only the version label and status
    /// change. This models the informal revision scheme, not a persisted
    /// multi-version history.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if already a draft
    /// - `VersionOverflow` if the letter suffix is already `Z`
    pub fn create_new_version(&mut self) -> Result<&VersionLabel, DomainError> {
        if self.status == QuotationStatus::Draft {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Quotation is already an editable draft",
            ));
        }
        self.version = self.version.next()?;
        self.status = QuotationStatus::Draft;
        self.touch();
        Ok(&self.version)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn transition_to(&mut self, target: QuotationStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move quotation from {} to {}", self.status, target),
            ));
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    fn reprice(&mut self) {
        self.pricing = PricingCalculator::compute(
            &self.services,
            self.day_plan.as_ref(),
            self.trip.participants,
            self.discounts,
            self.tax_rate,
            &self.currency,
        );
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
