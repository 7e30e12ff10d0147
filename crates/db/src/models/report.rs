//! Aggregate counts computed per request for the dashboard and reports page.

use sqlx::FromRow;

/// Counts shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct DashboardSummary {
    pub total_vendors: i64,
    pub total_products: i64,
    pub pending_orders: i64,
    pub approved_orders: i64,
}

/// Counts shown on the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct ReportSummary {
    pub total_vendors: i64,
    pub total_products: i64,
    pub total_orders: i64,
    pub pending_orders: i64,
    pub approved_orders: i64,
}
