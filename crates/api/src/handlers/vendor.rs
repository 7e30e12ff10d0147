//! Handlers for vendor pages.

use axum::extract::{Path, Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use procure_core::error::CoreError;
use procure_core::input::VendorForm;
use procure_core::types::DbId;
use procure_db::models::vendor::Vendor;
use procure_db::repositories::{PurchaseOrderRepo, VendorRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::state::AppState;
use crate::views;

/// Refusal returned when deleting a vendor that still has orders.
pub const VENDOR_IN_USE: &str = "Cannot delete vendor. Purchase Orders exist for this vendor.";

/// Query parameters for the vendor list (`?search=`).
#[derive(Debug, Deserialize)]
pub struct VendorSearch {
    pub search: Option<String>,
}

/// GET /vendors
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VendorSearch>,
) -> AppResult<Html<String>> {
    let search = params.search.as_deref();
    let vendors = VendorRepo::list(&state.pool, search).await?;
    Ok(Html(views::vendor::list_page(&vendors, search)))
}

/// GET /add-vendor
pub async fn new_form() -> Html<String> {
    Html(views::vendor::form_page(None))
}

/// POST /add-vendor
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VendorForm>,
) -> AppResult<impl IntoResponse> {
    let input = form.into_input()?;
    let vendor = VendorRepo::create(&state.pool, &input).await?;
    tracing::info!(vendor_id = vendor.id, name = %vendor.name, "Vendor created");

    Ok((
        [(SET_COOKIE, Flash::VendorAdded.set_cookie())],
        Redirect::to("/"),
    ))
}

/// GET /edit-vendor/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let vendor = find_vendor(&state, id).await?;
    Ok(Html(views::vendor::form_page(Some(&vendor))))
}

/// POST /edit-vendor/{id}
///
/// Overwrites every field with the submitted values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<VendorForm>,
) -> AppResult<Redirect> {
    find_vendor(&state, id).await?;
    let input = form.into_input()?;
    VendorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))?;
    tracing::info!(vendor_id = id, "Vendor updated");
    Ok(Redirect::to("/vendors"))
}

/// GET /delete-vendor/{id}
///
/// Refused with a plain-text message while any purchase order references
/// the vendor.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    find_vendor(&state, id).await?;

    let orders = PurchaseOrderRepo::count_for_vendor(&state.pool, id).await?;
    if orders > 0 {
        tracing::info!(vendor_id = id, orders, "Vendor delete refused");
        return Err(AppError::Core(CoreError::Conflict(VENDOR_IN_USE.to_string())));
    }

    // An order created since the count above still blocks the delete.
    VendorRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::conflict_on_foreign_key(e, VENDOR_IN_USE))?;
    tracing::info!(vendor_id = id, "Vendor deleted");
    Ok(Redirect::to("/vendors"))
}

// ── Private helpers ──────────────────────────────────────────────────────

async fn find_vendor(state: &AppState, id: DbId) -> AppResult<Vendor> {
    VendorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))
}
