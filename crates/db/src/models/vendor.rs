//! Vendor entity model.

use procure_core::types::DbId;
use sqlx::FromRow;

/// A row from the `vendors` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vendor {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
