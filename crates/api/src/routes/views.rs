//! Routing shell: non-API paths resolve to view descriptors.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::OptionalUserAuth;
use domain::models::view::{View, ViewResponse};

/// Fallback handler for every unmatched route.
///
/// API paths get a JSON 404. Other GET paths resolve to a view; protected
/// views redirect anonymous visitors to the login path with 303.
pub async fn view_fallback(
    State(state): State<AppState>,
    OptionalUserAuth(user): OptionalUserAuth,
    method: Method,
    uri: Uri,
) -> Response {
    let path = uri.path();

    if path.starts_with("/api/") || method != Method::GET {
        return ApiError::NotFound(format!("No route for {} {}", method, path)).into_response();
    }

    let view = View::resolve(path);
    if view.requires_auth() && user.is_none() {
        return Redirect::to(&state.config.display.login_path).into_response();
    }

    let status = if view == View::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(ViewResponse::new(view, path))).into_response()
}
