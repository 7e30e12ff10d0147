//! Request handlers, one module per page family.
//!
//! Handlers parse the request, delegate to the repositories in
//! `procure_db`, and either render a page from [`crate::views`] or
//! redirect. Errors are mapped to responses by [`crate::error::AppError`].

pub mod dashboard;
pub mod health;
pub mod product;
pub mod purchase_order;
pub mod report;
pub mod vendor;

use axum::http::StatusCode;
use axum::response::Html;

use crate::views;

/// Fallback for paths that match no route.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::error::page(StatusCode::NOT_FOUND, "Page not found")),
    )
}
