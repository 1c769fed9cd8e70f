//! Lead note (activity log entry) domain model.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::activity_time::format_activity_time;

/// A free-text, timestamped note attached to a lead. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadNote {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub note_text: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for adding a note.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLeadNoteRequest {
    #[serde(default)]
    #[validate(length(max = 5000, message = "Note must be at most 5000 characters"))]
    pub note_text: String,
}

/// Note with its relative display timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct LeadNoteResponse {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub note_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_time: String,
}

impl LeadNoteResponse {
    /// Builds the response, rendering `display_time` relative to `now`.
    pub fn from_note(note: LeadNote, now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            display_time: format_activity_time(note.created_at, now, offset),
            id: note.id,
            lead_id: note.lead_id,
            note_text: note.note_text,
            created_by: note.created_by,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// The activity log of a lead, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ListLeadNotesResponse {
    pub lead_id: Uuid,
    pub notes: Vec<LeadNoteResponse>,
    pub total: usize,
}

impl ListLeadNotesResponse {
    pub fn new(
        lead_id: Uuid,
        notes: Vec<LeadNote>,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Self {
        let notes: Vec<LeadNoteResponse> = notes
            .into_iter()
            .map(|n| LeadNoteResponse::from_note(n, now, offset))
            .collect();
        Self {
            lead_id,
            total: notes.len(),
            notes,
        }
    }
}
