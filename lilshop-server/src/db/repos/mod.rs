//! Repositories for the shop tables

mod dashboard;
mod inventory;
mod products;
mod suppliers;

pub use dashboard::{DashboardRepo, DashboardSummary};
pub use inventory::{InventoryRepo, InventoryRow, InventoryWithProduct};
pub use products::{Product, ProductRepo};
pub use suppliers::{Supplier, SupplierRepo, SupplierWithProduct};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
