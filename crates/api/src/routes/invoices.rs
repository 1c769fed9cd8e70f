//! Invoice endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use persistence::repositories::{InvoiceCursor, InvoiceRepository};
use shared::pagination::{decode_cursor, encode_cursor};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;
use crate::middleware::metrics::record_invoice_created;
use domain::models::invoice::{
    CreateInvoiceRequest, InvoiceResponse, InvoiceSummary, ListInvoicesQuery,
    ListInvoicesResponse, QuoteRequest, QuoteResponse, RecentInvoicesQuery,
};
use domain::models::Invoice;
use domain::services::invoicing;

/// Price a package without creating an invoice.
///
/// POST /api/v1/invoices/quote
pub async fn quote_invoice(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let repo = InvoiceRepository::new(state.pool.clone());
    let quote = invoicing::quote(&repo, request).await?;
    Ok(Json(quote))
}

/// Create an invoice for the authenticated user.
///
/// POST /api/v1/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    user: UserAuth,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<InvoiceResponse>), ApiError> {
    let repo = InvoiceRepository::new(state.pool.clone());
    let invoice = invoicing::submit_invoice(&repo, request, Some(user.user_id)).await?;

    record_invoice_created();
    info!(
        invoice_id = %invoice.id,
        invoice_number = %invoice.invoice_number,
        user_id = %user.user_id,
        "Invoice submitted"
    );

    let location = format!("/api/v1/invoices/{}", invoice.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(invoice.into()),
    ))
}

/// List invoices, newest first.
///
/// GET /api/v1/invoices?cursor=&limit=
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListInvoicesQuery>,
) -> Result<Json<ListInvoicesResponse>, ApiError> {
    let limits = &state.config.limits;
    let limit = query
        .limit
        .unwrap_or(limits.default_invoice_page_size)
        .clamp(1, limits.max_invoice_page_size);

    let cursor = query
        .cursor
        .as_deref()
        .map(decode_cursor)
        .transpose()
        .map_err(|e| ApiError::Validation(e.to_string()))?
        .map(|(created_at, id)| InvoiceCursor { created_at, id });

    let repo = InvoiceRepository::new(state.pool.clone());
    let (rows, has_more) = repo.list_page(cursor, limit).await?;
    let invoices: Vec<Invoice> = rows.into_iter().map(Into::into).collect();

    let next_cursor = if has_more {
        invoices.last().map(|i| encode_cursor(i.created_at, i.id))
    } else {
        None
    };

    let offset = state.config.display.offset();
    Ok(Json(ListInvoicesResponse {
        invoices: invoices
            .iter()
            .map(|i| InvoiceSummary::from_invoice(i, offset))
            .collect(),
        next_cursor,
    }))
}

/// Most recent invoices.
///
/// GET /api/v1/invoices/recent?limit=
pub async fn recent_invoices(
    State(state): State<AppState>,
    Query(query): Query<RecentInvoicesQuery>,
) -> Result<Json<Vec<InvoiceSummary>>, ApiError> {
    let limits = &state.config.limits;
    let limit = query
        .limit
        .unwrap_or(limits.recent_invoice_count)
        .clamp(1, limits.max_invoice_page_size);

    let repo = InvoiceRepository::new(state.pool.clone());
    let offset = state.config.display.offset();
    let invoices = repo
        .list_recent(limit)
        .await?
        .into_iter()
        .map(|row| InvoiceSummary::from_invoice(&Invoice::from(row), offset))
        .collect();

    Ok(Json(invoices))
}

/// Fetch one invoice.
///
/// GET /api/v1/invoices/:invoice_id
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let repo = InvoiceRepository::new(state.pool.clone());
    let invoice: Invoice = repo
        .find_by_id(invoice_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invoice not found".to_string()))?
        .into();

    Ok(Json(invoice.into()))
}
