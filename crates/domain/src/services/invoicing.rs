//! Invoice creation and pricing.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::models::invoice::{CreateInvoiceRequest, QuoteRequest, QuoteResponse};
use crate::models::{Invoice, NewInvoice, Package};
use crate::services::invoice_draft::{CustomerDetails, InvoiceDraft};
use crate::services::pricing;

/// Errors raised while pricing or creating an invoice.
///
/// Every variant except `Store` is raised before anything is written.
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Customer name and email are required")]
    MissingCustomer,

    #[error("Please select a package")]
    MissingPackage,

    #[error("Package not found: {0}")]
    PackageNotFound(Uuid),

    #[error("Feature is not part of the selected package: {0}")]
    UnknownFeature(String),

    #[error("GST percentage must be between 0 and 100, got {0}")]
    InvalidGst(f64),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Storage used by invoice creation.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn find_package(&self, id: Uuid) -> Result<Option<Package>, sqlx::Error>;

    /// Inserts the invoice and returns the stored row, including the
    /// generated id and invoice number.
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, sqlx::Error>;
}

/// Validates the request and inserts exactly one invoice.
///
/// Checks run in this order: customer name and email present, package
/// selected, field formats, package exists, features belong to the package.
pub async fn submit_invoice(
    store: &dyn InvoiceStore,
    request: CreateInvoiceRequest,
    created_by: Option<Uuid>,
) -> Result<Invoice, InvoiceError> {
    let request = request.trimmed();
    if shared::validation::is_blank(&request.customer_name)
        || shared::validation::is_blank(&request.customer_email)
    {
        return Err(InvoiceError::MissingCustomer);
    }
    let package_id = request.package_id.ok_or(InvoiceError::MissingPackage)?;

    request.validate()?;

    let package = store
        .find_package(package_id)
        .await?
        .ok_or(InvoiceError::PackageNotFound(package_id))?;

    let mut draft = InvoiceDraft::new(CustomerDetails {
        name: request.customer_name,
        email: request.customer_email,
        phone: request.customer_phone,
        company: request.customer_company,
    });
    draft.gst_percentage = request.gst_percentage;
    draft.notes = request.notes;
    draft.select_package(package);
    if let Some(features) = request.selected_features.as_deref() {
        draft.set_selected_features(features)?;
    }

    let new_invoice = draft.to_new_invoice(created_by)?;
    debug!(
        package_id = %package_id,
        features = new_invoice.selected_features.len(),
        total_amount = new_invoice.total_amount,
        "Inserting invoice"
    );

    let invoice = store.insert_invoice(&new_invoice).await?;

    info!(
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        package_id = %invoice.package_id,
        "Invoice created"
    );

    Ok(invoice)
}

/// Prices a package at the requested GST percentage. Writes nothing.
pub async fn quote(
    store: &dyn InvoiceStore,
    request: QuoteRequest,
) -> Result<QuoteResponse, InvoiceError> {
    request.validate()?;
    shared::validation::validate_percentage(request.gst_percentage)
        .map_err(|_| InvoiceError::InvalidGst(request.gst_percentage))?;

    let package = store
        .find_package(request.package_id)
        .await?
        .ok_or(InvoiceError::PackageNotFound(request.package_id))?;

    let total_amount = pricing::total_amount(package.price_inr, request.gst_percentage);

    Ok(QuoteResponse {
        package_id: package.id,
        package_name: package.name,
        price_inr: package.price_inr,
        gst_percentage: request.gst_percentage,
        gst_amount: pricing::gst_amount(package.price_inr, request.gst_percentage),
        total_amount,
        display_total: pricing::format_rupees(total_amount),
    })
}
