//! Lead activity log: listing and appending notes.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::models::lead_note::CreateLeadNoteRequest;
use crate::models::LeadNote;

#[derive(Debug, Error)]
pub enum ActivityLogError {
    #[error("Note cannot be empty")]
    EmptyNote,

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Storage for lead notes.
#[async_trait]
pub trait LeadNoteStore: Send + Sync {
    /// Notes of one lead, newest first.
    async fn list_notes(&self, lead_id: Uuid) -> Result<Vec<LeadNote>, sqlx::Error>;

    async fn insert_note(
        &self,
        lead_id: Uuid,
        note_text: &str,
        created_by: Option<Uuid>,
    ) -> Result<LeadNote, sqlx::Error>;
}

pub async fn list_notes(
    store: &dyn LeadNoteStore,
    lead_id: Uuid,
) -> Result<Vec<LeadNote>, ActivityLogError> {
    Ok(store.list_notes(lead_id).await?)
}

/// Appends a note and returns the reloaded log.
///
/// Blank text is rejected before anything is written. The stored text is
/// trimmed.
pub async fn add_note(
    store: &dyn LeadNoteStore,
    lead_id: Uuid,
    request: CreateLeadNoteRequest,
    created_by: Option<Uuid>,
) -> Result<Vec<LeadNote>, ActivityLogError> {
    let text = request.note_text.trim();
    if text.is_empty() {
        return Err(ActivityLogError::EmptyNote);
    }
    request.validate()?;

    let note = store.insert_note(lead_id, text, created_by).await?;
    info!(lead_id = %lead_id, note_id = %note.id, "Lead note added");

    list_notes(store, lead_id).await
}
