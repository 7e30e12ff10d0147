use axum::extract::State;
use axum::response::Html;
use procure_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /reports
pub async fn reports(State(state): State<AppState>) -> AppResult<Html<String>> {
    let summary = ReportRepo::report_summary(&state.pool).await?;
    Ok(Html(views::report::page(&summary)))
}
