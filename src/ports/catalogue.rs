//! Service catalogue port.
//!
//! Templates and supplier service entries are read-only reference data for
//! the quotation builder. Managing the catalogue itself is out of scope.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::quotation::{QuotationTemplate, ServiceTemplate};

#[derive(Debug, Clone, Error)]
pub enum CatalogueError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Catalogue unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to quotation templates and supplier services.
#[async_trait]
pub trait ServiceCatalogue: Send + Sync {
    /// Lists every available quotation template.
    async fn templates(&self) -> Result<Vec<QuotationTemplate>, CatalogueError>;

    /// Looks a template up by its key.
    ///
    /// # Errors
    /// - `TemplateNotFound` when no template carries the key
    async fn template_by_key(&self, key: &str) -> Result<QuotationTemplate, CatalogueError>;

    /// Lists supplier service entries for the service picker.
    async fn supplier_services(&self) -> Result<Vec<ServiceTemplate>, CatalogueError>;
}
