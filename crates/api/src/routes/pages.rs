//! Route table for the server-rendered pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, product, purchase_order, report, vendor};
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// GET       /                      -> dashboard::home
///
/// GET, POST /add-vendor            -> vendor::new_form, vendor::create
/// GET       /vendors               -> vendor::list          (?search=)
/// GET, POST /edit-vendor/{id}      -> vendor::edit_form, vendor::update
/// GET       /delete-vendor/{id}    -> vendor::delete
///
/// GET, POST /add-product           -> product::new_form, product::create
/// GET       /products              -> product::list
/// GET, POST /edit-product/{id}     -> product::edit_form, product::update
/// GET       /delete-product/{id}   -> product::delete
///
/// GET, POST /create-po             -> purchase_order::new_form, purchase_order::create
/// GET       /purchase-orders       -> purchase_order::list  (?status=)
/// GET       /approve-po/{id}       -> purchase_order::approve
/// GET       /cancel-po/{id}        -> purchase_order::cancel
///
/// GET       /reports               -> report::reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::home))
        // Vendors
        .route("/add-vendor", get(vendor::new_form).post(vendor::create))
        .route("/vendors", get(vendor::list))
        .route(
            "/edit-vendor/{id}",
            get(vendor::edit_form).post(vendor::update),
        )
        .route("/delete-vendor/{id}", get(vendor::delete))
        // Products
        .route("/add-product", get(product::new_form).post(product::create))
        .route("/products", get(product::list))
        .route(
            "/edit-product/{id}",
            get(product::edit_form).post(product::update),
        )
        .route("/delete-product/{id}", get(product::delete))
        // Purchase orders
        .route(
            "/create-po",
            get(purchase_order::new_form).post(purchase_order::create),
        )
        .route("/purchase-orders", get(purchase_order::list))
        .route("/approve-po/{id}", get(purchase_order::approve))
        .route("/cancel-po/{id}", get(purchase_order::cancel))
        // Reports
        .route("/reports", get(report::reports))
}
