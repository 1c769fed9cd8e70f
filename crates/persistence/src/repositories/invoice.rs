//! Invoice repository for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::models::{Invoice, NewInvoice, Package};
use domain::services::InvoiceStore;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::InvoiceEntity;
use crate::metrics::QueryTimer;
use crate::repositories::PackageRepository;

const INVOICE_COLUMNS: &str = r#"
    id, invoice_number, customer_name, customer_email, customer_phone,
    customer_company, package_id, selected_features, gst_percentage, notes,
    total_amount, created_by, created_at
"#;

/// Keyset position in the newest-first invoice list.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceCursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

/// Repository for invoice database operations. Invoices are insert-only.
#[derive(Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts an invoice. The invoice number comes from the database sequence.
    pub async fn insert(&self, invoice: &NewInvoice) -> Result<InvoiceEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_invoice");
        let query = format!(
            r#"
            INSERT INTO invoices (
                customer_name, customer_email, customer_phone, customer_company,
                package_id, selected_features, gst_percentage, notes, total_amount, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {INVOICE_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, InvoiceEntity>(&query)
            .bind(&invoice.customer_name)
            .bind(&invoice.customer_email)
            .bind(&invoice.customer_phone)
            .bind(&invoice.customer_company)
            .bind(invoice.package_id)
            .bind(&invoice.selected_features)
            .bind(invoice.gst_percentage)
            .bind(&invoice.notes)
            .bind(invoice.total_amount)
            .bind(invoice.created_by)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<InvoiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_invoice_by_id");
        let query = format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1");
        let result = sqlx::query_as::<_, InvoiceEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Most recent invoices, newest first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<InvoiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_recent_invoices");
        let query = format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        let result = sqlx::query_as::<_, InvoiceEntity>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// One page of invoices, newest first, starting after `cursor`.
    /// Returns the page and whether more rows follow.
    pub async fn list_page(
        &self,
        cursor: Option<InvoiceCursor>,
        limit: i64,
    ) -> Result<(Vec<InvoiceEntity>, bool), sqlx::Error> {
        let timer = QueryTimer::new("list_invoices_page");

        // Fetch limit + 1 to determine if more results exist
        let query = format!(
            r#"
            SELECT {INVOICE_COLUMNS}
            FROM invoices
            WHERE ($1::timestamptz IS NULL OR (created_at, id) < ($1, $2))
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            "#
        );
        let mut rows = sqlx::query_as::<_, InvoiceEntity>(&query)
            .bind(cursor.map(|c| c.created_at))
            .bind(cursor.map(|c| c.id).unwrap_or_else(|| Uuid::from_bytes([0xff; 16])))
            .bind(limit + 1)
            .fetch_all(&self.pool)
            .await?;
        timer.record();

        let has_more = rows.len() as i64 > limit;
        if has_more {
            rows.pop();
        }
        Ok((rows, has_more))
    }
}

#[async_trait]
impl InvoiceStore for InvoiceRepository {
    async fn find_package(&self, id: Uuid) -> Result<Option<Package>, sqlx::Error> {
        let package = PackageRepository::new(self.pool.clone()).find_by_id(id).await?;
        Ok(package.map(Into::into))
    }

    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, sqlx::Error> {
        Ok(self.insert(invoice).await?.into())
    }
}
