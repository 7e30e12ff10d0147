//! Handlers for purchase order pages and status changes.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use procure_core::error::CoreError;
use procure_core::input::PurchaseOrderForm;
use procure_core::types::DbId;
use procure_db::models::purchase_order::PurchaseOrder;
use procure_db::repositories::{ProductRepo, PurchaseOrderRepo, VendorRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Query parameters for the order list (`?status=`).
#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

/// GET /purchase-orders
///
/// The status filter is an exact match on the stored name; an unknown
/// value lists nothing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StatusFilter>,
) -> AppResult<Html<String>> {
    let status = params.status.as_deref();
    let orders = PurchaseOrderRepo::list(&state.pool, status).await?;
    Ok(Html(views::purchase_order::list_page(&orders, status)))
}

/// GET /create-po
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let vendors = VendorRepo::list(&state.pool, None).await?;
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Html(views::purchase_order::create_page(&vendors, &products)))
}

/// POST /create-po
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<PurchaseOrderForm>,
) -> AppResult<Redirect> {
    let input = form.into_input()?;
    let order = PurchaseOrderRepo::create(&state.pool, &input).await?;
    tracing::info!(
        order_id = order.id,
        vendor_id = order.vendor_id,
        product_id = order.product_id,
        quantity = order.quantity,
        "Purchase order created"
    );
    Ok(Redirect::to("/"))
}

/// GET /approve-po/{id}
///
/// Approval is unconditional, including for cancelled orders.
pub async fn approve(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    let order = find_order(&state, id).await?;
    let next = order.status.approve();
    PurchaseOrderRepo::set_status(&state.pool, id, next).await?;
    tracing::info!(order_id = id, from = %order.status, to = %next, "Purchase order approved");
    Ok(Redirect::to("/purchase-orders"))
}

/// GET /cancel-po/{id}
///
/// Approved orders are refused with a plain-text message.
pub async fn cancel(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    let order = find_order(&state, id).await?;
    let next = order.status.cancel().inspect_err(|_| {
        tracing::info!(order_id = id, "Cancel refused for approved purchase order");
    })?;
    PurchaseOrderRepo::set_status(&state.pool, id, next).await?;
    tracing::info!(order_id = id, from = %order.status, to = %next, "Purchase order cancelled");
    Ok(Redirect::to("/purchase-orders"))
}

async fn find_order(state: &AppState, id: DbId) -> AppResult<PurchaseOrder> {
    PurchaseOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PurchaseOrder",
            id,
        }))
}
