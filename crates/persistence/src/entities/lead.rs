//! Lead entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the leads table.
#[derive(Debug, Clone, FromRow)]
pub struct LeadEntity {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub status_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<LeadEntity> for domain::models::Lead {
    fn from(entity: LeadEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            company: entity.company,
            job_title: entity.job_title,
            status_id: entity.status_id,
            assigned_to: entity.assigned_to,
            created_at: entity.created_at,
        }
    }
}
