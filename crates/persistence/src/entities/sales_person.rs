//! Salesperson entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the sales_persons table.
#[derive(Debug, Clone, FromRow)]
pub struct SalesPersonEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<SalesPersonEntity> for domain::models::SalesPerson {
    fn from(entity: SalesPersonEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}
