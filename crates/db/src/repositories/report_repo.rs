//! Aggregate counts for the dashboard and the reports page.
//!
//! Every figure is computed when requested; nothing is cached.

use sqlx::SqlitePool;

use crate::models::report::{DashboardSummary, ReportSummary};

pub struct ReportRepo;

impl ReportRepo {
    pub async fn dashboard_summary(pool: &SqlitePool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM vendors) AS total_vendors,
                (SELECT COUNT(*) FROM products) AS total_products,
                (SELECT COUNT(*) FROM purchase_orders WHERE status = 'Pending') AS pending_orders,
                (SELECT COUNT(*) FROM purchase_orders WHERE status = 'Approved') AS approved_orders",
        )
        .fetch_one(pool)
        .await
    }

    pub async fn report_summary(pool: &SqlitePool) -> Result<ReportSummary, sqlx::Error> {
        sqlx::query_as::<_, ReportSummary>(
            "SELECT
                (SELECT COUNT(*) FROM vendors) AS total_vendors,
                (SELECT COUNT(*) FROM products) AS total_products,
                (SELECT COUNT(*) FROM purchase_orders) AS total_orders,
                (SELECT COUNT(*) FROM purchase_orders WHERE status = 'Pending') AS pending_orders,
                (SELECT COUNT(*) FROM purchase_orders WHERE status = 'Approved') AS approved_orders",
        )
        .fetch_one(pool)
        .await
    }
}
