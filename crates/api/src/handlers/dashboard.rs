use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use procure_db::repositories::{PurchaseOrderRepo, ReportRepo};

use crate::error::AppResult;
use crate::flash::Flash;
use crate::state::AppState;
use crate::views;

/// Number of orders listed under "Recent purchase orders".
const RECENT_ORDERS: i64 = 5;

/// GET /
///
/// Counts plus the most recent orders. A pending flash notice is shown
/// and cleared.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let summary = ReportRepo::dashboard_summary(&state.pool).await?;
    let recent = PurchaseOrderRepo::recent(&state.pool, RECENT_ORDERS).await?;

    let flash = Flash::from_headers(&headers);
    let page = Html(views::dashboard::page(
        &summary,
        &recent,
        flash.map(Flash::message),
    ));

    Ok(match flash {
        Some(_) => ([(SET_COOKIE, Flash::clear_cookie())], page).into_response(),
        None => page.into_response(),
    })
}
