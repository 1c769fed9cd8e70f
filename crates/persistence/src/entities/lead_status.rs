//! Lead status entity (database row mapping).

use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the lead_status_pipeline table.
#[derive(Debug, Clone, FromRow)]
pub struct LeadStatusEntity {
    pub id: Uuid,
    pub name: String,
    pub order_index: i32,
    pub color: String,
}

impl From<LeadStatusEntity> for domain::models::LeadStatus {
    fn from(entity: LeadStatusEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            order_index: entity.order_index,
            color: entity.color,
        }
    }
}
