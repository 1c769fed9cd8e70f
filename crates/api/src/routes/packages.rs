//! Package endpoint handlers.

use axum::{extract::State, Json};
use persistence::repositories::PackageRepository;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::package::ListPackagesResponse;
use domain::models::Package;

/// List the packages offered on the invoice form.
///
/// GET /api/v1/packages
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<ListPackagesResponse>, ApiError> {
    let repo = PackageRepository::new(state.pool.clone());
    let packages: Vec<Package> = repo.list_all().await?.into_iter().map(Into::into).collect();

    Ok(Json(ListPackagesResponse {
        total: packages.len(),
        packages,
    }))
}
