//! Static catalogue adapter.
//!
//! Serves a fixed set of quotation templates and supplier services from
//! in-process fixtures. Stands in for a real product database during
//! development and drives the demo binary.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::quotation::{QuotationTemplate, ServiceCategory, ServiceTemplate};
use crate::ports::{CatalogueError, ServiceCatalogue};

fn service(
    category: ServiceCategory,
    name: &str,
    unit: &str,
    unit_price: f64,
    markup_percent: f64,
    supplier: Option<&str>,
) -> ServiceTemplate {
    ServiceTemplate {
        category,
        name: name.to_string(),
        description: String::new(),
        unit: unit.to_string(),
        unit_price,
        markup_percent,
        supplier: supplier.map(str::to_string),
    }
}

static TEMPLATES: Lazy<Vec<QuotationTemplate>> = Lazy::new(|| {
    vec![
        QuotationTemplate {
            key: "andes-classic".to_string(),
            name: "Andes Classic".to_string(),
            description: "Seven-day circuit through Cusco and the Sacred Valley".to_string(),
            trip_name: Some("Andes Classic Circuit".to_string()),
            destinations: vec!["Cusco".to_string(), "Sacred Valley".to_string()],
            services: vec![
                service(ServiceCategory::Accommodation, "3* hotel, double room", "room-nights", 65.0, 15.0, None),
                service(ServiceCategory::Transport, "Private minibus", "days", 180.0, 10.0, None),
                service(ServiceCategory::Guides, "English-speaking guide", "days", 120.0, 20.0, None),
                service(ServiceCategory::Meals, "Half board", "person-days", 28.0, 10.0, None),
            ],
        },
        QuotationTemplate {
            key: "city-break".to_string(),
            name: "City Break".to_string(),
            description: "Three-day urban getaway with guided sightseeing".to_string(),
            trip_name: None,
            destinations: vec![],
            services: vec![
                service(ServiceCategory::Accommodation, "4* city hotel", "room-nights", 110.0, 12.0, None),
                service(ServiceCategory::Sightseeing, "Hop-on city tour", "persons", 35.0, 25.0, None),
                service(ServiceCategory::Transport, "Airport transfers", "transfers", 45.0, 15.0, None),
            ],
        },
        QuotationTemplate {
            key: "blank".to_string(),
            name: "Blank quotation".to_string(),
            description: "Start from an empty service list".to_string(),
            trip_name: None,
            destinations: vec![],
            services: vec![],
        },
    ]
});

static SUPPLIER_SERVICES: Lazy<Vec<ServiceTemplate>> = Lazy::new(|| {
    vec![
        service(ServiceCategory::Accommodation, "Eco-lodge bungalow", "room-nights", 95.0, 18.0, Some("Selva Lodges")),
        service(ServiceCategory::Transport, "4x4 with driver", "days", 220.0, 12.0, Some("Andes Wheels")),
        service(ServiceCategory::Guides, "Mountain guide (certified)", "days", 160.0, 20.0, Some("Summit Crew")),
        service(ServiceCategory::Meals, "Picnic lunch box", "persons", 12.0, 30.0, Some("Camp Kitchen")),
        service(ServiceCategory::Activities, "Rafting half-day", "persons", 55.0, 25.0, Some("River Runners")),
        service(ServiceCategory::Sightseeing, "Museum pass", "persons", 18.0, 20.0, Some("City Culture")),
        service(ServiceCategory::Other, "Travel insurance", "persons", 22.0, 10.0, Some("SafeTrip")),
    ]
});

/// Catalogue backed by compiled-in fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue;

impl StaticCatalogue {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceCatalogue for StaticCatalogue {
    async fn templates(&self) -> Result<Vec<QuotationTemplate>, CatalogueError> {
        Ok(TEMPLATES.clone())
    }

    async fn template_by_key(&self, key: &str) -> Result<QuotationTemplate, CatalogueError> {
        TEMPLATES
            .iter()
            .find(|t| t.key == key)
            .cloned()
            .ok_or_else(|| CatalogueError::TemplateNotFound(key.to_string()))
    }

    async fn supplier_services(&self) -> Result<Vec<ServiceTemplate>, CatalogueError> {
        Ok(SUPPLIER_SERVICES.clone())
    }
}
