//! Product entity model.

use procure_core::types::DbId;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
