//! Demo binary: walks one quotation through the wizard against the built-in
//! catalogue and a file-backed snapshot store, then prints the price card.

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tourcraft::adapters::catalogue::StaticCatalogue;
use tourcraft::adapters::fs::FileSnapshotStore;
use tourcraft::application::QuotationSession;
use tourcraft::config::AppConfig;
use tourcraft::domain::foundation::Timestamp;
use tourcraft::domain::pricing::TripShape;
use tourcraft::domain::quotation::{CustomerSnapshot, TripDetails};
use tourcraft::domain::wizard::{CustomerTripData, PricingTermsData, StepData};
use tourcraft::ports::ServiceCatalogue;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tourcraft=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    if config.features.enable_tracing {
        init_tracing();
    }
    config.validate()?;

    let catalogue = StaticCatalogue::new();
    let store = FileSnapshotStore::new("./data/quotations");

    // Step 1: start from a catalogue template
    let template = catalogue.template_by_key("andes-classic").await?;
    let mut session = QuotationSession::initialize(&config.pricing, Some(&template));
    session.handle_next();

    // Step 2: customer and trip
    session.update_step_data(StepData::CustomerTrip(CustomerTripData {
        customer: Some(CustomerSnapshot::new("Ana Torres", "ana@example.com")),
        trip: Some(TripDetails {
            trip_name: "Andes Classic Circuit".to_string(),
            destinations: vec!["Cusco".to_string(), "Sacred Valley".to_string()],
            start_date: date(2026, 10, 5),
            end_date: date(2026, 10, 12),
            participants: 4,
            number_of_groups: None,
            group_size: None,
        }),
        requirements: None,
    }));
    session.handle_next();

    // Step 3: the template's services are already on the quotation
    session.handle_next();

    // Step 4: validity deadline
    session.update_step_data(StepData::PricingTerms(PricingTermsData {
        discounts: None,
        tax_rate: None,
        valid_until: date(2026, 9, 30),
        payment_terms: Some("50% deposit, balance 30 days before departure".to_string()),
        terms_and_conditions: None,
    }));
    session.handle_next();

    // Step 5: review and send
    session.send()?;
    session.persist(&store, "demo-quotation").await?;

    let quotation = session.quotation();
    let pricing = quotation.pricing();
    println!(
        "Quotation {} ({}) - {}",
        quotation.quotation_number().unwrap_or("unnumbered"),
        quotation.version(),
        quotation.trip().trip_name
    );
    println!("  subtotal   {:>10.2} {}", pricing.subtotal, pricing.currency);
    println!("  taxes      {:>10.2}", pricing.taxes);
    println!("  total      {:>10.2}", pricing.total);
    if let Some(per_person) = pricing.per_person_price {
        println!("  per person {:>10.2}", per_person);
    }

    // What would six travelers cost?
    let projection = session.project_scenario(TripShape {
        travelers: 6,
        duration_days: 7,
    });
    println!(
        "What-if for 6 travelers: total {:.2}, per person {:.2} ({:+.1}% margin impact)",
        projection.adjusted_total, projection.price_per_person, projection.margin_impact_percent
    );

    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Option<Timestamp> {
    NaiveDate::from_ymd_opt(y, m, d).map(Timestamp::from_date)
}
