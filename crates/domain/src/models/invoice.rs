//! Invoice domain model.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::pricing::{format_rupees, format_invoice_date};

/// GST percentage applied when the request does not name one.
pub const DEFAULT_GST_PERCENTAGE: f64 = 18.0;

fn default_gst_percentage() -> f64 {
    DEFAULT_GST_PERCENTAGE
}

/// A stored invoice. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_company: Option<String>,
    pub package_id: Uuid,
    pub selected_features: Vec<String>,
    pub gst_percentage: f64,
    pub notes: Option<String>,
    pub total_amount: f64,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new invoice row. The invoice number and timestamps
/// are assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_company: Option<String>,
    pub package_id: Uuid,
    pub selected_features: Vec<String>,
    pub gst_percentage: f64,
    pub notes: Option<String>,
    pub total_amount: f64,
    pub created_by: Option<Uuid>,
}

/// Request payload for creating an invoice.
///
/// Customer name, email and package are checked for presence before the
/// derive-based format validation runs, so that a missing field reports
/// the form-level message rather than a format error.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Customer name must be at most 200 characters"))]
    pub customer_name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub customer_email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub customer_phone: Option<String>,

    #[validate(length(max = 200, message = "Company name must be at most 200 characters"))]
    pub customer_company: Option<String>,

    pub package_id: Option<Uuid>,

    /// Subset of the package features. Absent means every feature.
    pub selected_features: Option<Vec<String>>,

    #[serde(default = "default_gst_percentage")]
    #[validate(range(min = 0.0, max = 100.0, message = "GST percentage must be between 0 and 100"))]
    pub gst_percentage: f64,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

impl CreateInvoiceRequest {
    /// Trims the text fields so format checks see what will be stored.
    /// Blank optional fields become `None`.
    pub fn trimmed(self) -> Self {
        Self {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            customer_phone: shared::validation::non_blank(self.customer_phone.as_deref()),
            customer_company: shared::validation::non_blank(self.customer_company.as_deref()),
            notes: shared::validation::non_blank(self.notes.as_deref()),
            ..self
        }
    }
}

/// Request payload for pricing a package without creating an invoice.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteRequest {
    pub package_id: Uuid,

    #[serde(default = "default_gst_percentage")]
    #[validate(range(min = 0.0, max = 100.0, message = "GST percentage must be between 0 and 100"))]
    pub gst_percentage: f64,
}

/// Pricing breakdown for a package at a given GST percentage.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub package_id: Uuid,
    pub package_name: String,
    pub price_inr: f64,
    pub gst_percentage: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
    pub display_total: String,
}

/// Full invoice returned after creation and by lookup.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_company: Option<String>,
    pub package_id: Uuid,
    pub selected_features: Vec<String>,
    pub gst_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_amount: f64,
    pub display_total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            display_total: format_rupees(invoice.total_amount),
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            customer_name: invoice.customer_name,
            customer_email: invoice.customer_email,
            customer_phone: invoice.customer_phone,
            customer_company: invoice.customer_company,
            package_id: invoice.package_id,
            selected_features: invoice.selected_features,
            gst_percentage: invoice.gst_percentage,
            notes: invoice.notes,
            total_amount: invoice.total_amount,
            created_by: invoice.created_by,
            created_at: invoice.created_at,
        }
    }
}

/// Compact invoice row for lists.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
    pub id: Uuid,
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: f64,
    pub display_total: String,
    pub created_at: DateTime<Utc>,
    pub display_date: String,
}

impl InvoiceSummary {
    /// Builds the summary, rendering the date in the display offset.
    pub fn from_invoice(invoice: &Invoice, offset: FixedOffset) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number.clone(),
            customer_name: invoice.customer_name.clone(),
            customer_email: invoice.customer_email.clone(),
            total_amount: invoice.total_amount,
            display_total: format_rupees(invoice.total_amount),
            created_at: invoice.created_at,
            display_date: format_invoice_date(invoice.created_at, offset),
        }
    }
}

/// Query parameters for listing invoices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInvoicesQuery {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for the recent invoices list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentInvoicesQuery {
    pub limit: Option<i64>,
}

/// Page of invoices, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ListInvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: "INV-000042".to_string(),
            customer_name: "John Doe".to_string(),
            customer_email: "john@example.com".to_string(),
            customer_phone: None,
            customer_company: Some("Acme".to_string()),
            package_id: Uuid::new_v4(),
            selected_features: vec!["SEO audit".to_string()],
            gst_percentage: 18.0,
            notes: None,
            total_amount: 11_800.0,
            created_by: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, 5, 22, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_create_invoice_request_defaults() {
        let json = r#"{
            "customer_name": "John Doe",
            "customer_email": "john@example.com",
            "package_id": "550e8400-e29b-41d4-a716-446655440000"
        }"#;

        let request: CreateInvoiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.gst_percentage, DEFAULT_GST_PERCENTAGE);
        assert!(request.selected_features.is_none());
        assert!(request.notes.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_invoice_request_missing_fields_deserialize_empty() {
        let request: CreateInvoiceRequest = serde_json::from_str("{}").unwrap();
        assert!(request.customer_name.is_empty());
        assert!(request.customer_email.is_empty());
        assert!(request.package_id.is_none());
    }

    #[test]
    fn test_create_invoice_request_rejects_bad_email() {
        let json = r#"{"customer_name": "John", "customer_email": "not-an-email"}"#;
        let request: CreateInvoiceRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_email"));
    }

    #[test]
    fn test_trimmed_request_passes_format_checks() {
        let json = r#"{
            "customer_name": "  John Doe ",
            "customer_email": " john@example.com ",
            "customer_company": "   ",
            "notes": " Call after 5 "
        }"#;
        let request: CreateInvoiceRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());

        let request = request.trimmed();
        assert_eq!(request.customer_name, "John Doe");
        assert_eq!(request.customer_email, "john@example.com");
        assert_eq!(request.customer_company, None);
        assert_eq!(request.notes.as_deref(), Some("Call after 5"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_invoice_request_rejects_gst_out_of_range() {
        let json = r#"{"customer_name": "John", "customer_email": "john@example.com", "gst_percentage": 120}"#;
        let request: CreateInvoiceRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("gst_percentage"));
    }

    #[test]
    fn test_invoice_response_from_invoice() {
        let invoice = sample_invoice();
        let response: InvoiceResponse = invoice.clone().into();
        assert_eq!(response.id, invoice.id);
        assert_eq!(response.display_total, "₹11,800");

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("customer_phone"));
        assert!(json.contains("customer_company"));
    }

    #[test]
    fn test_invoice_summary_uses_display_offset() {
        let invoice = sample_invoice();
        let utc = FixedOffset::east_opt(0).unwrap();
        let ist = FixedOffset::east_opt(330 * 60).unwrap();

        assert_eq!(InvoiceSummary::from_invoice(&invoice, utc).display_date, "5/3/2026");
        assert_eq!(InvoiceSummary::from_invoice(&invoice, ist).display_date, "6/3/2026");
    }
}
