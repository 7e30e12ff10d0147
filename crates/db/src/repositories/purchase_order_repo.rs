//! Repository for the `purchase_orders` table.
//!
//! Orders are never deleted; they leave the active set by being cancelled.

use chrono::Utc;
use procure_core::input::PurchaseOrderInput;
use procure_core::purchase_order::PurchaseOrderStatus;
use procure_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::purchase_order::{PurchaseOrder, PurchaseOrderView};

const COLUMNS: &str = "id, vendor_id, product_id, quantity, order_date, status";

/// Columns of [`PurchaseOrderView`], selected from `purchase_orders po`
/// joined with `vendors v` and `products p`.
const VIEW_COLUMNS: &str = "po.id, po.vendor_id, v.name AS vendor_name, \
     po.product_id, p.name AS product_name, po.quantity, po.order_date, po.status";

const VIEW_FROM: &str = "purchase_orders po \
     JOIN vendors v ON v.id = po.vendor_id \
     JOIN products p ON p.id = po.product_id";

/// Provides create, read, and status operations for purchase orders.
pub struct PurchaseOrderRepo;

impl PurchaseOrderRepo {
    /// Insert a new order dated now (UTC) with status `Pending`.
    ///
    /// A `vendor_id` or `product_id` that does not exist fails with a
    /// foreign key violation from the store.
    pub async fn create(
        pool: &SqlitePool,
        input: &PurchaseOrderInput,
    ) -> Result<PurchaseOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO purchase_orders (vendor_id, product_id, quantity, order_date, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PurchaseOrder>(&query)
            .bind(input.vendor_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .bind(Utc::now())
            .bind(PurchaseOrderStatus::default().as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PurchaseOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM purchase_orders WHERE id = $1");
        sqlx::query_as::<_, PurchaseOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders in insertion order, optionally only those whose status
    /// equals `status` exactly. An empty filter returns every order; an
    /// unknown status matches nothing.
    pub async fn list(
        pool: &SqlitePool,
        status: Option<&str>,
    ) -> Result<Vec<PurchaseOrderView>, sqlx::Error> {
        match status.filter(|s| !s.is_empty()) {
            Some(status) => {
                let query = format!(
                    "SELECT {VIEW_COLUMNS} FROM {VIEW_FROM} WHERE po.status = $1 ORDER BY po.id"
                );
                sqlx::query_as::<_, PurchaseOrderView>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {VIEW_COLUMNS} FROM {VIEW_FROM} ORDER BY po.id");
                sqlx::query_as::<_, PurchaseOrderView>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// The `limit` most recently created orders, newest first.
    pub async fn recent(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<PurchaseOrderView>, sqlx::Error> {
        let query =
            format!("SELECT {VIEW_COLUMNS} FROM {VIEW_FROM} ORDER BY po.id DESC LIMIT $1");
        sqlx::query_as::<_, PurchaseOrderView>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Store a new status. Returns `true` if a row was updated.
    ///
    /// Transition rules live in [`PurchaseOrderStatus`]; this writes
    /// whatever it is given.
    pub async fn set_status(
        pool: &SqlitePool,
        id: DbId,
        status: PurchaseOrderStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE purchase_orders SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of orders that reference the given vendor.
    pub async fn count_for_vendor(pool: &SqlitePool, vendor_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM purchase_orders WHERE vendor_id = $1")
            .bind(vendor_id)
            .fetch_one(pool)
            .await
    }

    /// Number of orders that reference the given product.
    pub async fn count_for_product(
        pool: &SqlitePool,
        product_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM purchase_orders WHERE product_id = $1")
            .bind(product_id)
            .fetch_one(pool)
            .await
    }
}
