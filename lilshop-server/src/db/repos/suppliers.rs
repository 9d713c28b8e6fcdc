//! Supplier repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use lilshop_core::models::{Price, SupplierName};

use super::DbError;

/// Supplier record from database
#[derive(Debug, Clone, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub product_id: i64,
    pub product_cost: f64,
    pub created_at: DateTime<Utc>,
}

/// Supplier joined with the supplied product's name for list display
#[derive(Debug, Clone, FromRow)]
pub struct SupplierWithProduct {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub product_cost: f64,
    pub product_name: String,
}

/// Supplier repository
pub struct SupplierRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SupplierRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a supplier for an existing product.
    pub async fn create(
        &self,
        name: SupplierName,
        phone: Option<String>,
        email: Option<String>,
        product_id: i64,
        product_cost: Price,
    ) -> Result<Supplier, DbError> {
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

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, phone, email, product_id, product_cost, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, phone, email, product_id, product_cost, created_at
            "#,
        )
        .bind(name.as_str())
        .bind(phone.as_deref())
        .bind(email.as_deref())
        .bind(product_id)
        .bind(product_cost.get())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(supplier)
    }

    /// List suppliers with the names of the products they supply.
    pub async fn list_with_products(&self) -> Result<Vec<SupplierWithProduct>, DbError> {
        let suppliers = sqlx::query_as::<_, SupplierWithProduct>(
            r#"
            SELECT s.id, s.name, s.phone, s.email, s.product_cost, p.name AS product_name
            FROM suppliers s
            INNER JOIN products p ON s.product_id = p.id
            ORDER BY s.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(suppliers)
    }
}
