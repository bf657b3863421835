//! QuotationSession - the application-layer wizard state machine.
//!
//! One session owns one quotation draft, the staged step data, and the
//! active wizard step. Navigation is gated by the step validator: `next`
//! first commits the current step's staged fields into the aggregate, so the
//! quotation a later step reads always reflects everything entered before
//! it. Boundary moves and moves off an invalid step are no-ops, never
//! errors.

use tracing::{debug, error, info};

use crate::config::PricingConfig;
use crate::domain::foundation::{DomainError, RequirementId, ServiceLineId, VersionLabel};
use crate::domain::pricing::{DayPlan, ScenarioProjection, ScenarioProjector, TripShape};
use crate::domain::quotation::{
    Quotation, QuotationTemplate, RequirementItem, RequirementPatch, ServiceLine,
    ServiceLinePatch, ServiceTemplate,
};
use crate::domain::wizard::{
    StepData, StepDataStore, StepSequence, StepValidator, WizardSnapshot, WizardStep,
};
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// One editing session over a single quotation draft.
#[derive(Debug, Clone)]
pub struct QuotationSession {
    quotation: Quotation,
    step_data: StepDataStore,
    current_step: WizardStep,
    pricing_config: PricingConfig,
}

impl QuotationSession {
    /// Opens a session on a fresh draft, optionally overlaying a template's
    /// defaults.
    pub fn initialize(config: &PricingConfig, template: Option<&QuotationTemplate>) -> Self {
        let mut quotation = Quotation::initialize(
            config.tax_rate,
            config.currency.clone(),
            config.validity_days,
        );
        let mut step_data = StepDataStore::default();

        if let Some(template) = template {
            quotation.apply_template(template);
            step_data.template_choice.template_key = Some(template.key.clone());
            debug!(template = %template.key, "applied quotation template");
        }

        Self {
            quotation,
            step_data,
            current_step: StepSequence::first(),
            pricing_config: config.clone(),
        }
    }

    /// Opens a session on a copy of an existing quotation, identity stripped
    /// back to a fresh `v1` draft. Staged data and the step pointer reset.
    pub fn clone_quotation(&self) -> Self {
        let copy = Quotation::clone_from(&self.quotation, self.pricing_config.validity_days);
        debug!(source = %self.quotation.id(), copy = %copy.id(), "cloned quotation");
        Self {
            quotation: copy,
            step_data: StepDataStore::default(),
            current_step: StepSequence::first(),
            pricing_config: self.pricing_config.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn quotation(&self) -> &Quotation {
        &self.quotation
    }

    pub fn step_data(&self) -> &StepDataStore {
        &self.step_data
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// Validity of the active step.
    pub fn current_step_valid(&self) -> bool {
        StepValidator::validate_step(self.current_step, &self.quotation, &self.step_data)
    }

    /// Per-step validity vector in canonical order.
    pub fn step_validation(&self) -> [bool; StepSequence::LEN] {
        StepValidator::validation_vector(&self.quotation, &self.step_data)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Stages a partial step payload without touching the aggregate.
    pub fn update_step_data(&mut self, data: StepData) {
        debug!(step = ?data.step(), "staged step data");
        self.step_data.merge(data);
    }

    /// Commits the active step and advances to the next one.
    ///
    /// Returns `false` without moving when the active step is invalid or
    /// already the last step.
    pub fn handle_next(&mut self) -> bool {
        if !self.current_step_valid() {
            debug!(step = ?self.current_step, "next blocked by invalid step");
            return false;
        }
        let Some(next) = StepSequence::next(self.current_step) else {
            return false;
        };
        self.commit_step(self.current_step);
        debug!(from = ?self.current_step, to = ?next, "advanced wizard step");
        self.current_step = next;
        true
    }

    /// Moves to the previous step; a no-op on the first step. Staged data is
    /// kept so nothing typed so far is lost.
    pub fn handle_back(&mut self) -> bool {
        let Some(previous) = StepSequence::previous(self.current_step) else {
            return false;
        };
        self.current_step = previous;
        true
    }

    /// Folds the staged fields of one step into the aggregate.
    fn commit_step(&mut self, step: WizardStep) {
        match step {
            // Template defaults were applied when the session opened
            WizardStep::TemplateChoice => {}
            WizardStep::CustomerTrip => {
                let staged = &self.step_data.customer_trip;
                if let Some(customer) = staged.customer.clone() {
                    self.quotation.set_customer(customer);
                }
                if let Some(trip) = staged.trip.clone() {
                    self.quotation.set_trip(trip);
                }
                if let Some(requirements) = staged.requirements.clone() {
                    self.quotation.replace_requirements(requirements);
                }
            }
            WizardStep::Services => {
                let staged = &self.step_data.services;
                if let Some(services) = staged.services.clone() {
                    self.quotation.replace_services(services);
                }
                match staged.use_day_plan {
                    Some(true) => {
                        if let Some(plan) = staged.day_plan.clone() {
                            self.quotation.set_day_plan(Some(plan));
                        }
                    }
                    Some(false) => self.quotation.set_day_plan(None),
                    None => {}
                }
            }
            WizardStep::PricingTerms => {
                let staged = &self.step_data.pricing_terms;
                if let Some(discounts) = staged.discounts {
                    self.quotation.set_discounts(discounts);
                }
                if let Some(tax_rate) = staged.tax_rate {
                    self.quotation.set_tax_rate(tax_rate);
                }
                if let Some(valid_until) = staged.valid_until {
                    self.quotation.set_valid_until(valid_until);
                }
            }
            // Notes and the client message stay session-local
            WizardStep::ReviewSend => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quotation editing
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_service(&mut self, line: ServiceLine) -> ServiceLineId {
        self.quotation.add_service(line)
    }

    /// Copies a catalogue entry into a fresh line with quantity 1.
    pub fn add_service_from_template(&mut self, template: &ServiceTemplate) -> ServiceLineId {
        self.quotation.add_service(ServiceLine::from_template(template))
    }

    pub fn update_service(
        &mut self,
        id: ServiceLineId,
        patch: ServiceLinePatch,
    ) -> Result<(), DomainError> {
        self.quotation.update_service(id, patch)
    }

    pub fn remove_service(&mut self, id: ServiceLineId) -> Result<(), DomainError> {
        self.quotation.remove_service(id)
    }

    pub fn add_requirement(&mut self, item: RequirementItem) -> RequirementId {
        self.quotation.add_requirement(item)
    }

    pub fn update_requirement(
        &mut self,
        id: RequirementId,
        patch: RequirementPatch,
    ) -> Result<(), DomainError> {
        self.quotation.update_requirement(id, patch)
    }

    pub fn remove_requirement(&mut self, id: RequirementId) -> Result<(), DomainError> {
        self.quotation.remove_requirement(id)
    }

    pub fn set_day_plan(&mut self, day_plan: Option<DayPlan>) {
        self.quotation.set_day_plan(day_plan);
    }

    /// Projects the current lines onto a hypothetical trip shape. The
    /// baseline comes from the quotation's own trip details; missing dates
    /// leave the baseline duration at 0, in which case the projector's
    /// per-day rules treat each line's full price as one day of cost.
    pub fn project_scenario(&self, hypothetical: TripShape) -> ScenarioProjection {
        let trip = self.quotation.trip();
        let baseline = TripShape {
            travelers: trip.participants,
            duration_days: trip.duration_days().unwrap_or(0),
        };
        ScenarioProjector::project(self.quotation.services(), baseline, hypothetical)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Sends the quotation: commits any staged pricing terms, assigns an
    /// outbound number on first send, and transitions the status.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the quotation is a draft
    pub fn send(&mut self) -> Result<(), DomainError> {
        self.commit_step(WizardStep::PricingTerms);
        if self.quotation.quotation_number().is_none() {
            let number = outbound_number(&self.quotation);
            self.quotation.set_quotation_number(number);
        }
        self.quotation.mark_sent()?;
        info!(
            quotation = %self.quotation.id(),
            number = ?self.quotation.quotation_number(),
            total = self.quotation.pricing().total,
            "quotation sent"
        );
        Ok(())
    }

    /// Re-opens a sent or resolved quotation as the next draft revision.
    pub fn create_new_version(&mut self) -> Result<VersionLabel, DomainError> {
        let label = self.quotation.create_new_version()?.clone();
        info!(quotation = %self.quotation.id(), version = %label, "new version opened");
        Ok(label)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// The exact state handed to the snapshot store.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            quotation: self.quotation.clone(),
            step_data: self.step_data.clone(),
            current_step: self.current_step,
        }
    }

    /// Rebuilds a session from a stored snapshot.
    pub fn from_snapshot(config: &PricingConfig, snapshot: WizardSnapshot) -> Self {
        Self {
            quotation: snapshot.quotation,
            step_data: snapshot.step_data,
            current_step: snapshot.current_step,
            pricing_config: config.clone(),
        }
    }

    /// Saves the session under `key`, replacing any previous snapshot.
    pub async fn persist(
        &self,
        store: &dyn SnapshotStore,
        key: &str,
    ) -> Result<(), SnapshotStoreError> {
        store.save(key, &self.snapshot()).await?;
        debug!(key, "session persisted");
        Ok(())
    }

    /// Resumes the session stored under `key`; a missing or unreadable
    /// snapshot falls back to a fresh draft rather than failing.
    pub async fn resume(config: &PricingConfig, store: &dyn SnapshotStore, key: &str) -> Self {
        match store.load(key).await {
            Ok(snapshot) => {
                debug!(key, "session resumed from snapshot");
                Self::from_snapshot(config, snapshot)
            }
            Err(SnapshotStoreError::NotFound(_)) => Self::initialize(config, None),
            Err(e) => {
                error!(key, error = %e, "snapshot unreadable, starting fresh");
                Self::initialize(config, None)
            }
        }
    }
}

/// Outbound number derived from the send date and the quotation id.
fn outbound_number(quotation: &Quotation) -> String {
    let date = quotation.updated_at().as_datetime().format("%Y%m%d");
    let id = quotation.id().to_string();
    let short = id.split('-').next().unwrap_or(&id);
    format!("Q-{date}-{}", short.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySnapshotStore;
    use crate::domain::foundation::{ErrorCode, QuotationStatus, Timestamp};
    use crate::domain::quotation::{CustomerSnapshot, ServiceCategory, TripDetails};
    use crate::domain::wizard::{CustomerTripData, PricingTermsData, ServicesData};
    use chrono::NaiveDate;

    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    fn date(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn complete_trip() -> TripDetails {
        TripDetails {
            trip_name: "Atacama Stars".to_string(),
            destinations: vec!["San Pedro de Atacama".to_string()],
            start_date: Some(date(2026, 10, 5)),
            end_date: Some(date(2026, 10, 12)),
            participants: 4,
            number_of_groups: None,
            group_size: None,
        }
    }

    fn stage_customer_trip(session: &mut QuotationSession) {
        session.update_step_data(StepData::CustomerTrip(CustomerTripData {
            customer: Some(CustomerSnapshot::new("Ana Torres", "ana@example.com")),
            trip: Some(complete_trip()),
            requirements: None,
        }));
    }

    fn stage_services(session: &mut QuotationSession) {
        session.update_step_data(StepData::Services(ServicesData {
            services: Some(vec![ServiceLine::new(
                ServiceCategory::Accommodation,
                "Desert lodge",
                3.0,
                80.0,
                10.0,
            )]),
            day_plan: None,
            use_day_plan: Some(false),
        }));
    }

    fn stage_pricing_terms(session: &mut QuotationSession) {
        session.update_step_data(StepData::PricingTerms(PricingTermsData {
            discounts: None,
            tax_rate: None,
            valid_until: Some(date(2026, 9, 30)),
            payment_terms: None,
            terms_and_conditions: None,
        }));
    }

    fn session_at_review() -> QuotationSession {
        let mut session = QuotationSession::initialize(&config(), None);
        assert!(session.handle_next());
        stage_customer_trip(&mut session);
        assert!(session.handle_next());
        stage_services(&mut session);
        assert!(session.handle_next());
        stage_pricing_terms(&mut session);
        assert!(session.handle_next());
        assert_eq!(session.current_step(), WizardStep::ReviewSend);
        session
    }

    #[test]
    fn fresh_session_starts_on_first_step_with_bookend_validity() {
        let session = QuotationSession::initialize(&config(), None);
        assert_eq!(session.current_step(), WizardStep::TemplateChoice);
        assert_eq!(session.step_validation(), [true, false, false, false, true]);
    }

    #[test]
    fn next_is_blocked_until_the_step_is_filled() {
        let mut session = QuotationSession::initialize(&config(), None);
        assert!(session.handle_next());
        assert_eq!(session.current_step(), WizardStep::CustomerTrip);

        // Customer and trip are still empty
        assert!(!session.handle_next());
        assert_eq!(session.current_step(), WizardStep::CustomerTrip);

        stage_customer_trip(&mut session);
        assert!(session.handle_next());
        assert_eq!(session.current_step(), WizardStep::Services);
    }

    #[test]
    fn next_commits_staged_data_into_the_aggregate() {
        let mut session = QuotationSession::initialize(&config(), None);
        session.handle_next();
        stage_customer_trip(&mut session);
        session.handle_next();

        assert_eq!(session.quotation().customer().name, "Ana Torres");
        assert_eq!(session.quotation().trip().participants, 4);

        stage_services(&mut session);
        session.handle_next();

        assert_eq!(session.quotation().services().len(), 1);
        // 3 × 80 × 1.10 markup = 264; subtotal carries the markup
        assert!((session.quotation().pricing().subtotal - 264.0).abs() < 1e-9);
    }

    #[test]
    fn back_is_a_no_op_on_the_first_step() {
        let mut session = QuotationSession::initialize(&config(), None);
        assert!(!session.handle_back());
        assert_eq!(session.current_step(), WizardStep::TemplateChoice);

        session.handle_next();
        assert!(session.handle_back());
        assert_eq!(session.current_step(), WizardStep::TemplateChoice);
    }

    #[test]
    fn next_is_a_no_op_on_the_last_step() {
        let mut session = session_at_review();
        assert!(!session.handle_next());
        assert_eq!(session.current_step(), WizardStep::ReviewSend);
    }

    #[test]
    fn template_session_preloads_services_and_trip_defaults() {
        let template = QuotationTemplate {
            key: "andes-classic".to_string(),
            name: "Andes Classic".to_string(),
            description: String::new(),
            trip_name: Some("Andes Classic Circuit".to_string()),
            destinations: vec!["Cusco".to_string()],
            services: vec![ServiceTemplate {
                category: ServiceCategory::Guides,
                name: "Guide".to_string(),
                description: String::new(),
                unit: "days".to_string(),
                unit_price: 120.0,
                markup_percent: 20.0,
                supplier: None,
            }],
        };

        let session = QuotationSession::initialize(&config(), Some(&template));

        assert_eq!(session.quotation().trip().trip_name, "Andes Classic Circuit");
        assert_eq!(session.quotation().services().len(), 1);
        assert_eq!(
            session.step_data().template_choice.template_key.as_deref(),
            Some("andes-classic")
        );
    }

    #[test]
    fn send_assigns_a_number_and_transitions_to_sent() {
        let mut session = session_at_review();

        session.send().unwrap();

        assert_eq!(session.quotation().status(), QuotationStatus::Sent);
        let number = session.quotation().quotation_number().unwrap().to_string();
        assert!(number.starts_with("Q-"));

        // Sending again from Sent is rejected
        let err = session.send().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        // The original number survives the failed attempt
        assert_eq!(session.quotation().quotation_number(), Some(number.as_str()));
    }

    #[test]
    fn new_version_reopens_a_sent_quotation_as_draft() {
        let mut session = session_at_review();
        session.send().unwrap();

        let label = session.create_new_version().unwrap();

        assert_eq!(label.as_str(), "v2");
        assert_eq!(session.quotation().status(), QuotationStatus::Draft);
    }

    #[test]
    fn new_version_on_a_draft_is_rejected() {
        let mut session = QuotationSession::initialize(&config(), None);
        let err = session.create_new_version().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn clone_resets_identity_and_wizard_position() {
        let mut session = session_at_review();
        session.send().unwrap();

        let copy = session.clone_quotation();

        assert_ne!(copy.quotation().id(), session.quotation().id());
        assert_eq!(copy.quotation().status(), QuotationStatus::Draft);
        assert_eq!(copy.quotation().version().as_str(), "v1");
        assert_eq!(copy.quotation().quotation_number(), None);
        assert_eq!(copy.current_step(), WizardStep::TemplateChoice);
        assert_eq!(
            copy.quotation().cloned_from(),
            Some(session.quotation().id())
        );
        // Business content carries over
        assert_eq!(copy.quotation().services().len(), 1);
    }

    #[test]
    fn scenario_projection_uses_the_trip_as_baseline() {
        let mut session = QuotationSession::initialize(&config(), None);
        session.handle_next();
        stage_customer_trip(&mut session);
        session.handle_next();
        stage_services(&mut session);
        session.handle_next();

        let trip = session.quotation().trip();
        let baseline = TripShape {
            travelers: trip.participants,
            duration_days: trip.duration_days().unwrap_or(0),
        };
        let projection = session.project_scenario(baseline);

        // Identical shape leaves every line unscaled
        let total: f64 = session
            .quotation()
            .services()
            .iter()
            .map(|s| s.final_price())
            .sum();
        assert!((projection.adjusted_total - total).abs() < 1e-9);
    }

    #[tokio::test]
    async fn persist_and_resume_round_trip() {
        let store = InMemorySnapshotStore::new();
        let mut session = QuotationSession::initialize(&config(), None);
        session.handle_next();
        stage_customer_trip(&mut session);
        session.handle_next();

        session.persist(&store, "draft-1").await.unwrap();

        let resumed = QuotationSession::resume(&config(), &store, "draft-1").await;

        assert_eq!(resumed.quotation(), session.quotation());
        assert_eq!(resumed.current_step(), WizardStep::Services);
    }

    #[tokio::test]
    async fn resume_without_snapshot_starts_fresh() {
        let store = InMemorySnapshotStore::new();

        let session = QuotationSession::resume(&config(), &store, "never-saved").await;

        assert_eq!(session.current_step(), WizardStep::TemplateChoice);
        assert!(session.quotation().services().is_empty());
    }
}
