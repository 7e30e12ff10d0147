//! Purchase order entity model and its display projection.

use procure_core::purchase_order::PurchaseOrderStatus;
use procure_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `purchase_orders` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PurchaseOrder {
    pub id: DbId,
    pub vendor_id: DbId,
    pub product_id: DbId,
    pub quantity: i64,
    pub order_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: PurchaseOrderStatus,
}

/// A purchase order joined with the names of its vendor and product,
/// as shown on the dashboard and the order list.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PurchaseOrderView {
    pub id: DbId,
    pub vendor_id: DbId,
    pub vendor_name: String,
    pub product_id: DbId,
    pub product_name: String,
    pub quantity: i64,
    pub order_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: PurchaseOrderStatus,
}
