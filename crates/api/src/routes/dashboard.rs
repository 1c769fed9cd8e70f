//! Admin dashboard handler.

use axum::{extract::State, Json};
use chrono::Utc;
use persistence::repositories::DashboardRepository;
use tracing::info;

use crate::app::AppState;
use crate::extractors::UserAuth;
use domain::models::dashboard::AdminDashboard;
use domain::services::dashboard::{build_admin_dashboard, fetch_dashboard_data};

/// Admin overview for the authenticated user. Sections that fail to load
/// are reported in `notices`; the request itself still succeeds.
///
/// GET /api/v1/admin/dashboard
pub async fn get_admin_dashboard(
    State(state): State<AppState>,
    user: UserAuth,
) -> Json<AdminDashboard> {
    let repo = DashboardRepository::new(state.pool.clone());
    let data = fetch_dashboard_data(&repo, state.config.limits.recent_invoice_count).await;

    let dashboard = build_admin_dashboard(
        data,
        user.user_id,
        Utc::now(),
        state.config.display.offset(),
    );

    info!(
        user_id = %user.user_id,
        total_leads = dashboard.stats.total_leads,
        notices = dashboard.notices.len(),
        "Admin dashboard served"
    );

    Json(dashboard)
}
