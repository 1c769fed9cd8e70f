//! Lead pipeline handlers.

use axum::{extract::State, Json};
use persistence::repositories::LeadStatusRepository;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::lead_status::{LeadStatusResponse, ListLeadStatusesResponse};
use domain::models::LeadStatus;

/// Pipeline statuses in order, with badge classes.
///
/// GET /api/v1/lead-statuses
pub async fn list_lead_statuses(
    State(state): State<AppState>,
) -> Result<Json<ListLeadStatusesResponse>, ApiError> {
    let repo = LeadStatusRepository::new(state.pool.clone());
    let statuses: Vec<LeadStatusResponse> = repo
        .list_all()
        .await?
        .into_iter()
        .map(|row| LeadStatus::from(row).into())
        .collect();

    Ok(Json(ListLeadStatusesResponse {
        total: statuses.len(),
        statuses,
    }))
}
