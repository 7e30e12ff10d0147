//! Repository for the `vendors` table.

use procure_core::input::VendorInput;
use procure_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::vendor::Vendor;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, address";

/// Provides CRUD operations for vendors.
pub struct VendorRepo;

impl VendorRepo {
    /// Insert a new vendor, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &VendorInput) -> Result<Vendor, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendors (name, email, phone, address)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE id = $1");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List vendors in insertion order.
    ///
    /// With a non-empty `search`, only vendors whose name contains it
    /// (case-insensitive) are returned. `%` and `_` match literally.
    pub async fn list(pool: &SqlitePool, search: Option<&str>) -> Result<Vec<Vendor>, sqlx::Error> {
        match search.filter(|s| !s.is_empty()) {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM vendors
                     WHERE LOWER(name) LIKE '%' || LOWER($1) || '%' ESCAPE '\\'
                     ORDER BY id"
                );
                sqlx::query_as::<_, Vendor>(&query)
                    .bind(escape_like(term))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY id");
                sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
            }
        }
    }

    /// Overwrite every field of a vendor.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &VendorInput,
    ) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!(
            "UPDATE vendors SET
                name = $2,
                email = $3,
                phone = $4,
                address = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a vendor by ID. Returns `true` if a row was removed.
    ///
    /// Callers check [`PurchaseOrderRepo::count_for_vendor`] first; a vendor
    /// with orders fails here on the foreign key.
    ///
    /// [`PurchaseOrderRepo::count_for_vendor`]: crate::repositories::PurchaseOrderRepo::count_for_vendor
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE wildcards so the term is matched as plain text.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
