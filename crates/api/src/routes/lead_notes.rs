//! Lead activity log handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use persistence::repositories::LeadNoteRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;
use crate::middleware::metrics::record_lead_note_added;
use domain::models::lead_note::{CreateLeadNoteRequest, ListLeadNotesResponse};
use domain::services::activity_log;

/// Notes of a lead, newest first.
///
/// GET /api/v1/leads/:lead_id/notes
pub async fn list_lead_notes(
    State(state): State<AppState>,
    Path(lead_id): Path<Uuid>,
) -> Result<Json<ListLeadNotesResponse>, ApiError> {
    let repo = LeadNoteRepository::new(state.pool.clone());
    let notes = activity_log::list_notes(&repo, lead_id).await?;

    Ok(Json(ListLeadNotesResponse::new(
        lead_id,
        notes,
        Utc::now(),
        state.config.display.offset(),
    )))
}

/// Append a note and return the refreshed log.
///
/// POST /api/v1/leads/:lead_id/notes
pub async fn add_lead_note(
    State(state): State<AppState>,
    user: UserAuth,
    Path(lead_id): Path<Uuid>,
    Json(request): Json<CreateLeadNoteRequest>,
) -> Result<(StatusCode, Json<ListLeadNotesResponse>), ApiError> {
    let repo = LeadNoteRepository::new(state.pool.clone());
    let notes = activity_log::add_note(&repo, lead_id, request, Some(user.user_id)).await?;
    record_lead_note_added();

    Ok((
        StatusCode::CREATED,
        Json(ListLeadNotesResponse::new(
            lead_id,
            notes,
            Utc::now(),
            state.config.display.offset(),
        )),
    ))
}
