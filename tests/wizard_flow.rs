//! End-to-end wizard flow over the public crate surface: template to send,
//! pricing arithmetic, what-if projection, validation gating, versioning,
//! and snapshot persistence.

use chrono::NaiveDate;
use tempfile::TempDir;

use tourcraft::adapters::catalogue::StaticCatalogue;
use tourcraft::adapters::fs::FileSnapshotStore;
use tourcraft::adapters::memory::InMemorySnapshotStore;
use tourcraft::application::QuotationSession;
use tourcraft::config::PricingConfig;
use tourcraft::domain::foundation::{ErrorCode, QuotationStatus, Timestamp, VersionLabel};
use tourcraft::domain::pricing::TripShape;
use tourcraft::domain::quotation::{
    CustomerSnapshot, ServiceCategory, ServiceLine, TripDetails,
};
use tourcraft::domain::wizard::{
    CustomerTripData, PricingTermsData, ServicesData, StepData, WizardStep,
};
use tourcraft::ports::ServiceCatalogue;

const EPSILON: f64 = 1e-9;

fn config() -> PricingConfig {
    PricingConfig::default()
}

fn date(y: i32, m: u32, d: u32) -> Timestamp {
    Timestamp::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn trip(participants: u32, nights: i64) -> TripDetails {
    let start = date(2026, 10, 5);
    TripDetails {
        trip_name: "Andes Classic Circuit".to_string(),
        destinations: vec!["Cusco".to_string()],
        start_date: Some(start),
        end_date: Some(start.plus_days(nights)),
        participants,
        number_of_groups: None,
        group_size: None,
    }
}

fn drive_to_review(session: &mut QuotationSession, services: Vec<ServiceLine>) {
    assert!(session.handle_next());

    session.update_step_data(StepData::CustomerTrip(CustomerTripData {
        customer: Some(CustomerSnapshot::new("Ana Torres", "ana@example.com")),
        trip: Some(trip(4, 7)),
        requirements: None,
    }));
    assert!(session.handle_next());

    session.update_step_data(StepData::Services(ServicesData {
        services: Some(services),
        day_plan: None,
        use_day_plan: Some(false),
    }));
    assert!(session.handle_next());

    session.update_step_data(StepData::PricingTerms(PricingTermsData {
        discounts: None,
        tax_rate: None,
        valid_until: Some(date(2026, 9, 30)),
        payment_terms: None,
        terms_and_conditions: None,
    }));
    assert!(session.handle_next());
    assert_eq!(session.current_step(), WizardStep::ReviewSend);
}

// One accommodation line {quantity: 3, unit price: 80, markup: 10%} must
// price to 240 cost, 24 markup, 264 final, with tax on top of the subtotal.
#[test]
fn single_line_pricing_arithmetic() {
    let mut session = QuotationSession::initialize(&config(), None);

    session.add_service(ServiceLine::new(
        ServiceCategory::Accommodation,
        "3* hotel, double room",
        3.0,
        80.0,
        10.0,
    ));

    let line = &session.quotation().services()[0];
    assert!((line.total_cost() - 240.0).abs() < EPSILON);
    assert!((line.markup_amount() - 24.0).abs() < EPSILON);
    assert!((line.final_price() - 264.0).abs() < EPSILON);

    let pricing = session.quotation().pricing();
    assert!((pricing.subtotal - 264.0).abs() < EPSILON);
    assert!((pricing.taxes - 26.4).abs() < EPSILON);
    assert!((pricing.total - 290.4).abs() < EPSILON);
}

// Halving travelers halves the room count under double occupancy:
// 612 × ceil(15/2)/ceil(30/2) = 612 × 8/15 = 326.4.
#[test]
fn halving_travelers_scales_accommodation_by_room_count() {
    let mut session = QuotationSession::initialize(&config(), None);
    session.handle_next();
    session.update_step_data(StepData::CustomerTrip(CustomerTripData {
        customer: Some(CustomerSnapshot::new("Ops", "ops@example.com")),
        trip: Some(trip(30, 5)),
        requirements: None,
    }));
    session.handle_next();

    // 5 nights at 102 + 20% markup = 612 final
    session.add_service(ServiceLine::new(
        ServiceCategory::Accommodation,
        "Hotel block",
        5.0,
        102.0,
        20.0,
    ));

    let projection = session.project_scenario(TripShape {
        travelers: 15,
        duration_days: 5,
    });

    assert!((projection.adjusted_total - 326.4).abs() < 1e-6);
    assert!((projection.price_per_person - 326.4 / 15.0).abs() < 1e-6);
    assert!(projection.margin_impact_percent < 0.0);
}

// A fresh quotation validates only the bookend steps.
#[test]
fn fresh_session_validation_vector() {
    let session = QuotationSession::initialize(&config(), None);
    assert_eq!(session.step_validation(), [true, false, false, false, true]);
}

// The suffix scheme ends at Z; bumping past it is a reported error.
#[test]
fn version_suffix_overflow_is_reported() {
    let label = VersionLabel::parse("v1-Z").unwrap();
    let err = label.next().unwrap_err();
    assert_eq!(err.code, ErrorCode::VersionOverflow);
}

#[test]
fn full_flow_from_template_to_sent_and_revised() {
    let mut session = QuotationSession::initialize(&config(), None);
    drive_to_review(
        &mut session,
        vec![
            ServiceLine::new(ServiceCategory::Accommodation, "Lodge", 7.0, 90.0, 15.0),
            ServiceLine::new(ServiceCategory::Guides, "Guide", 7.0, 120.0, 20.0),
        ],
    );

    session.send().unwrap();
    assert_eq!(session.quotation().status(), QuotationStatus::Sent);
    assert!(session.quotation().quotation_number().is_some());

    let label = session.create_new_version().unwrap();
    assert_eq!(label.as_str(), "v2");
    assert_eq!(session.quotation().status(), QuotationStatus::Draft);

    // The revision keeps its lines and pricing
    assert_eq!(session.quotation().services().len(), 2);
    assert!(session.quotation().pricing().total > 0.0);
}

#[tokio::test]
async fn catalogue_template_feeds_the_wizard() {
    let catalogue = StaticCatalogue::new();
    let template = catalogue.template_by_key("andes-classic").await.unwrap();

    let session = QuotationSession::initialize(&config(), Some(&template));

    assert_eq!(session.quotation().trip().trip_name, "Andes Classic Circuit");
    assert!(!session.quotation().services().is_empty());
    // Template lines are priced immediately
    assert!(session.quotation().pricing().subtotal > 0.0);
}

#[tokio::test]
async fn session_survives_a_file_snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileSnapshotStore::new(dir.path());

    let mut session = QuotationSession::initialize(&config(), None);
    drive_to_review(
        &mut session,
        vec![ServiceLine::new(ServiceCategory::Meals, "Half board", 28.0, 28.0, 10.0)],
    );
    session.persist(&store, "draft-review").await.unwrap();

    let resumed = QuotationSession::resume(&config(), &store, "draft-review").await;

    assert_eq!(resumed.quotation(), session.quotation());
    assert_eq!(resumed.current_step(), WizardStep::ReviewSend);
    assert_eq!(resumed.step_validation(), session.step_validation());
}

#[tokio::test]
async fn resume_from_missing_key_starts_a_fresh_draft() {
    let store = InMemorySnapshotStore::new();

    let session = QuotationSession::resume(&config(), &store, "absent").await;

    assert_eq!(session.current_step(), WizardStep::TemplateChoice);
    assert_eq!(session.quotation().version().as_str(), "v1");
}
