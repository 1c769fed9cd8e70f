//! Invoice entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the invoices table.
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceEntity {
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

impl From<InvoiceEntity> for domain::models::Invoice {
    fn from(entity: InvoiceEntity) -> Self {
        Self {
            id: entity.id,
            invoice_number: entity.invoice_number,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            customer_phone: entity.customer_phone,
            customer_company: entity.customer_company,
            package_id: entity.package_id,
            selected_features: entity.selected_features,
            gst_percentage: entity.gst_percentage,
            notes: entity.notes,
            total_amount: entity.total_amount,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }
}
