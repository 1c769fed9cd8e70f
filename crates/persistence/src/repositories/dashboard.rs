//! Dashboard source lists.
//!
//! Each list is an independent query so that one failing read does not
//! hide the others.

use async_trait::async_trait;
use domain::models::{Invoice, Lead, LeadStatus, SalesPerson};
use domain::services::DashboardStore;
use sqlx::PgPool;

use crate::repositories::{
    InvoiceRepository, LeadFilter, LeadRepository, LeadStatusRepository, SalesPersonRepository,
};

/// Read access to the admin dashboard's source lists.
#[derive(Clone)]
pub struct DashboardRepository {
    sales_persons: SalesPersonRepository,
    leads: LeadRepository,
    statuses: LeadStatusRepository,
    invoices: InvoiceRepository,
}

impl DashboardRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self {
            sales_persons: SalesPersonRepository::new(pool.clone()),
            leads: LeadRepository::new(pool.clone()),
            statuses: LeadStatusRepository::new(pool.clone()),
            invoices: InvoiceRepository::new(pool),
        }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn list_sales_persons(&self) -> Result<Vec<SalesPerson>, sqlx::Error> {
        let rows = self.sales_persons.list_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, sqlx::Error> {
        let rows = self.leads.list(LeadFilter::default()).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_lead_statuses(&self) -> Result<Vec<LeadStatus>, sqlx::Error> {
        let rows = self.statuses.list_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_recent_invoices(&self, limit: i64) -> Result<Vec<Invoice>, sqlx::Error> {
        let rows = self.invoices.list_recent(limit).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
