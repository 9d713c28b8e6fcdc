//! Inventory repository
//!
//! Counts never go below zero: decrement of an exhausted row is a
//! no-op rather than an error, matching the dashboard's +/- buttons.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use lilshop_core::models::Count;

use super::DbError;

/// Inventory record from database
#[derive(Debug, Clone, FromRow)]
pub struct InventoryRow {
    pub id: i64,
    pub product_id: i64,
    pub count: i64,
    pub created_at: DateTime<Utc>,
}

/// Inventory row joined with its product name for list display
#[derive(Debug, Clone, FromRow)]
pub struct InventoryWithProduct {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub count: i64,
}

/// Inventory repository
pub struct InventoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> InventoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an inventory row for an existing product.
    pub async fn create(&self, product_id: i64, count: Count) -> Result<InventoryRow, DbError> {
        let mut tx = self.pool.begin().await?;

        // Verify product exists
        let product_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?)")
                .bind(product_id)
                .fetch_one(&mut *tx)
                .await?;

        if !product_exists.0 {
            return Err(DbError::not_found("product", product_id));
        }

        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            INSERT INTO inventory (product_id, count, created_at)
            VALUES (?, ?, ?)
            RETURNING id, product_id, count, created_at
            "#,
        )
        .bind(product_id)
        .bind(count.get())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// List inventory rows with product names (single JOIN, no N+1).
    pub async fn list_with_products(&self) -> Result<Vec<InventoryWithProduct>, DbError> {
        let rows = sqlx::query_as::<_, InventoryWithProduct>(
            r#"
            SELECT i.id, i.product_id, p.name AS product_name, i.count
            FROM inventory i
            INNER JOIN products p ON i.product_id = p.id
            ORDER BY i.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single inventory row by id.
    pub async fn get(&self, id: i64) -> Result<InventoryRow, DbError> {
        sqlx::query_as::<_, InventoryRow>(
            "SELECT id, product_id, count, created_at FROM inventory WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("inventory", id))
    }

    /// Increment a row's count by one.
    pub async fn increment(&self, id: i64) -> Result<InventoryRow, DbError> {
        sqlx::query_as::<_, InventoryRow>(
            r#"
            UPDATE inventory SET count = count + 1
            WHERE id = ?
            RETURNING id, product_id, count, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("inventory", id))
    }

    /// Decrement a row's count by one, clamped at zero.
    ///
    /// The guard lives in the UPDATE itself so concurrent decrements
    /// cannot drive the count negative. When the count is already zero
    /// the row is returned unchanged.
    pub async fn decrement(&self, id: i64) -> Result<InventoryRow, DbError> {
        let updated = sqlx::query_as::<_, InventoryRow>(
            r#"
            UPDATE inventory SET count = count - 1
            WHERE id = ? AND count > 0
            RETURNING id, product_id, count, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match updated {
            Some(row) => Ok(row),
            // Either missing or already at zero; get() distinguishes.
            None => self.get(id).await,
        }
    }

    /// Total units across all inventory rows (0 when empty).
    pub async fn total_units(&self) -> Result<i64, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COALESCE(SUM(count), 0) FROM inventory")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }

    /// Total inventory value: SUM(count * price) over the product join
    /// (0.0 when empty).
    pub async fn total_value(&self) -> Result<f64, DbError> {
        let (total,): (f64,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(i.count * p.price), 0.0)
            FROM inventory i
            INNER JOIN products p ON i.product_id = p.id
            "#,
        )
        .fetch_one(self.pool)
        .await?;
        Ok(total)
    }
}
