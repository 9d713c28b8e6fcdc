//! Product repository
//!
//! Backs both the product management endpoints and the modal loader
//! (`GET /get_product/{id}`).

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use lilshop_core::models::{Price, ProductName};

use super::DbError;

/// Product record from database
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a product, returning the stored record.
    pub async fn create(&self, name: ProductName, price: Price) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, created_at)
            VALUES (?, ?, ?)
            RETURNING id, name, price, created_at
            "#,
        )
        .bind(name.as_str())
        .bind(price.get())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// List all products, oldest first.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, created_at FROM products ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a single product by id.
    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, created_at FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("product", id))
    }

    /// Update name and price, returning the stored record.
    pub async fn update(
        &self,
        id: i64,
        name: ProductName,
        price: Price,
    ) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET name = ?, price = ?
            WHERE id = ?
            RETURNING id, name, price, created_at
            "#,
        )
        .bind(name.as_str())
        .bind(price.get())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("product", id))
    }

    /// Delete a product by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", id));
        }
        Ok(())
    }

    /// Total number of products.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
