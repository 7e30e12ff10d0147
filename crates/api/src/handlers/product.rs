//! Handlers for product pages.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use procure_core::error::CoreError;
use procure_core::input::ProductForm;
use procure_core::types::DbId;
use procure_db::models::product::Product;
use procure_db::repositories::{ProductRepo, PurchaseOrderRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Refusal returned when deleting a product that still has orders.
pub const PRODUCT_IN_USE: &str = "Cannot delete product. Purchase Orders exist for this product.";

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Html(views::product::list_page(&products)))
}

/// GET /add-product
pub async fn new_form() -> Html<String> {
    Html(views::product::form_page(None))
}

/// POST /add-product
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> AppResult<Redirect> {
    let input = form.into_input()?;
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok(Redirect::to("/"))
}

/// GET /edit-product/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let product = find_product(&state, id).await?;
    Ok(Html(views::product::form_page(Some(&product))))
}

/// POST /edit-product/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<ProductForm>,
) -> AppResult<Redirect> {
    find_product(&state, id).await?;
    let input = form.into_input()?;
    ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(product_id = id, "Product updated");
    Ok(Redirect::to("/products"))
}

/// GET /delete-product/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    find_product(&state, id).await?;

    let orders = PurchaseOrderRepo::count_for_product(&state.pool, id).await?;
    if orders > 0 {
        tracing::info!(product_id = id, orders, "Product delete refused");
        return Err(AppError::Core(CoreError::Conflict(PRODUCT_IN_USE.to_string())));
    }

    // An order created since the count above still blocks the delete.
    ProductRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::conflict_on_foreign_key(e, PRODUCT_IN_USE))?;
    tracing::info!(product_id = id, "Product deleted");
    Ok(Redirect::to("/products"))
}

async fn find_product(state: &AppState, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}
