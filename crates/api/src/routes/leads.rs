//! Lead listing handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use persistence::repositories::{LeadFilter, LeadRepository, LeadStatusRepository};

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::lead::{LeadResponse, ListLeadsQuery, ListLeadsResponse};
use domain::models::{Lead, LeadStatus};

/// GET /api/v1/leads?status_id=&assigned_to=
pub async fn list_leads(
    State(state): State<AppState>,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<ListLeadsResponse>, ApiError> {
    let leads_repo = LeadRepository::new(state.pool.clone());
    let statuses_repo = LeadStatusRepository::new(state.pool.clone());

    let filter = LeadFilter {
        status_id: query.status_id,
        assigned_to: query.assigned_to,
    };
    let (leads, statuses) = tokio::try_join!(leads_repo.list(filter), statuses_repo.list_all())?;
    let statuses: Vec<LeadStatus> = statuses.into_iter().map(Into::into).collect();

    let leads: Vec<LeadResponse> = leads
        .into_iter()
        .map(|row| LeadResponse::from_lead(Lead::from(row), &statuses))
        .collect();

    Ok(Json(ListLeadsResponse {
        total: leads.len(),
        leads,
    }))
}
