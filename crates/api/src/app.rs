use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use shared::jwt::{JwtConfig, JwtError};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, require_user_auth,
    security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{
    dashboard, health, invoices, lead_notes, lead_statuses, leads, openapi, packages,
    sales_persons, views,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

/// Builds the verifier from config. A configured private key also enables
/// token signing, which local tooling and tests rely on.
fn build_jwt(config: &Config) -> Result<JwtConfig, JwtError> {
    let jwt = &config.jwt;
    match jwt.private_key.as_deref() {
        Some(private_key) if !private_key.trim().is_empty() => JwtConfig::with_signing_key(
            private_key,
            &jwt.public_key,
            jwt.access_token_expiry_secs,
            jwt.leeway_secs,
        ),
        _ => JwtConfig::verifier(&jwt.public_key, jwt.leeway_secs),
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Result<Router, JwtError> {
    let config = Arc::new(config);
    let jwt = Arc::new(build_jwt(&config)?);

    // None when rate_limit_per_minute is 0
    let rate_limiter = RateLimiterState::new(config.security.rate_limit_per_minute).map(Arc::new);

    let state = AppState {
        pool,
        config: config.clone(),
        jwt,
        rate_limiter,
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Writes and the admin overview need a signed-in user.
    // Middleware order: auth runs first, then rate limiting (which needs the user).
    let protected_routes = Router::new()
        .route("/api/v1/invoices", post(invoices::create_invoice))
        .route("/api/v1/leads/:lead_id/notes", post(lead_notes::add_lead_note))
        .route("/api/v1/admin/dashboard", get(dashboard::get_admin_dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    // Reference data and reads
    let read_routes = Router::new()
        .route("/api/v1/packages", get(packages::list_packages))
        .route("/api/v1/invoices", get(invoices::list_invoices))
        .route("/api/v1/invoices/quote", post(invoices::quote_invoice))
        .route("/api/v1/invoices/recent", get(invoices::recent_invoices))
        .route("/api/v1/invoices/:invoice_id", get(invoices::get_invoice))
        .route("/api/v1/leads", get(leads::list_leads))
        .route("/api/v1/leads/:lead_id/notes", get(lead_notes::list_lead_notes))
        .route("/api/v1/sales-persons", get(sales_persons::list_sales_persons))
        .route("/api/v1/lead-statuses", get(lead_statuses::list_lead_statuses));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    let openapi_routes = Router::new()
        .route("/api/docs", get(openapi::swagger_ui_redirect))
        .route("/api/docs/", get(openapi::swagger_ui))
        .route("/api/docs/*path", get(openapi::swagger_ui))
        .route("/api/docs/openapi.yaml", get(openapi::openapi_spec));

    let router = Router::new()
        .merge(public_routes)
        .merge(openapi_routes)
        .merge(read_routes)
        .merge(protected_routes)
        // Everything else is either an unknown API path or a view
        .fallback(views::view_fallback)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state);

    Ok(router)
}
