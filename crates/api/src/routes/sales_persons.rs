//! Salesperson listing handlers.

use axum::{extract::State, Json};
use persistence::repositories::{LeadFilter, LeadRepository, SalesPersonRepository};

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::sales_person::{ListSalesPersonsResponse, SalesPersonResponse};
use domain::models::{Lead, SalesPerson};
use domain::services::dashboard::assigned_lead_counts;

/// Salespersons with their assigned-lead counts.
///
/// GET /api/v1/sales-persons
pub async fn list_sales_persons(
    State(state): State<AppState>,
) -> Result<Json<ListSalesPersonsResponse>, ApiError> {
    let persons_repo = SalesPersonRepository::new(state.pool.clone());
    let leads_repo = LeadRepository::new(state.pool.clone());

    let (persons, leads) =
        tokio::try_join!(persons_repo.list_all(), leads_repo.list(LeadFilter::default()))?;
    let leads: Vec<Lead> = leads.into_iter().map(Into::into).collect();
    let counts = assigned_lead_counts(&leads);

    let sales_persons: Vec<SalesPersonResponse> = persons
        .into_iter()
        .map(|row| {
            let person = SalesPerson::from(row);
            let assigned = counts.get(&person.id).copied().unwrap_or(0);
            SalesPersonResponse::new(&person, assigned)
        })
        .collect();

    Ok(Json(ListSalesPersonsResponse {
        total: sales_persons.len(),
        sales_persons,
    }))
}
