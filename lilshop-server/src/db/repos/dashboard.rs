//! Dashboard aggregates
//!
//! The index-page summary: product count, total units on hand, and
//! total inventory value. Sums over an empty store are 0, not NULL.

use sqlx::SqlitePool;

use super::{DbError, InventoryRepo, ProductRepo};

/// Summary figures for the dashboard header
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub product_count: i64,
    pub inventory_units: i64,
    pub inventory_value: f64,
}

/// Dashboard repository
pub struct DashboardRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DashboardRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Compute the dashboard summary.
    pub async fn summary(&self) -> Result<DashboardSummary, DbError> {
        let product_count = ProductRepo::new(self.pool).count().await?;
        let inventory = InventoryRepo::new(self.pool);
        let inventory_units = inventory.total_units().await?;
        let inventory_value = inventory.total_value().await?;

        Ok(DashboardSummary {
            product_count,
            inventory_units,
            inventory_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{InventoryRepo, ProductRepo};
    use crate::db::{create_pool, migrations};
    use lilshop_core::models::{Count, Price, ProductName};

    async fn test_pool(dir: &tempfile::TempDir) -> SqlitePool {
        let url = format!("sqlite://{}/test.db", dir.path().display());
        let pool = create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    async fn empty_store_summary_is_zeroed() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let summary = DashboardRepo::new(&pool).summary().await.unwrap();
        assert_eq!(
            summary,
            DashboardSummary {
                product_count: 0,
                inventory_units: 0,
                inventory_value: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn summary_reflects_store_contents() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let products = ProductRepo::new(&pool);
        let widget = products
            .create(ProductName::new("Widget A").unwrap(), Price::new(2.5).unwrap())
            .await
            .unwrap();
        products
            .create(ProductName::new("Gadget B").unwrap(), Price::new(9.0).unwrap())
            .await
            .unwrap();

        InventoryRepo::new(&pool)
            .create(widget.id, Count::new(4).unwrap())
            .await
            .unwrap();

        let summary = DashboardRepo::new(&pool).summary().await.unwrap();
        assert_eq!(summary.product_count, 2);
        assert_eq!(summary.inventory_units, 4);
        assert_eq!(summary.inventory_value, 10.0);
    }
}
