//! Lead note entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the lead_notes table.
#[derive(Debug, Clone, FromRow)]
pub struct LeadNoteEntity {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub note_text: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LeadNoteEntity> for domain::models::LeadNote {
    fn from(entity: LeadNoteEntity) -> Self {
        Self {
            id: entity.id,
            lead_id: entity.lead_id,
            note_text: entity.note_text,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
