//! Lead note repository for database operations.

use async_trait::async_trait;
use domain::models::LeadNote;
use domain::services::LeadNoteStore;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LeadNoteEntity;
use crate::metrics::QueryTimer;

/// Repository for lead notes. Notes are append-only.
#[derive(Clone)]
pub struct LeadNoteRepository {
    pool: PgPool,
}

impl LeadNoteRepository {
    /// Creates a new LeadNoteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Notes of one lead, newest first. Notes sharing a timestamp come
    /// back in reverse insertion order.
    pub async fn list_for_lead(&self, lead_id: Uuid) -> Result<Vec<LeadNoteEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_lead_notes");
        let result = sqlx::query_as::<_, LeadNoteEntity>(
            r#"
            SELECT id, lead_id, note_text, created_by, created_at, updated_at
            FROM lead_notes
            WHERE lead_id = $1
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(lead_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Inserts a note. An unknown lead fails with a foreign key violation.
    pub async fn insert(
        &self,
        lead_id: Uuid,
        note_text: &str,
        created_by: Option<Uuid>,
    ) -> Result<LeadNoteEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_lead_note");
        let result = sqlx::query_as::<_, LeadNoteEntity>(
            r#"
            INSERT INTO lead_notes (lead_id, note_text, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, lead_id, note_text, created_by, created_at, updated_at
            "#,
        )
        .bind(lead_id)
        .bind(note_text)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl LeadNoteStore for LeadNoteRepository {
    async fn list_notes(&self, lead_id: Uuid) -> Result<Vec<LeadNote>, sqlx::Error> {
        let notes = self.list_for_lead(lead_id).await?;
        Ok(notes.into_iter().map(Into::into).collect())
    }

    async fn insert_note(
        &self,
        lead_id: Uuid,
        note_text: &str,
        created_by: Option<Uuid>,
    ) -> Result<LeadNote, sqlx::Error> {
        Ok(self.insert(lead_id, note_text, created_by).await?.into())
    }
}
