//! Validated domain types shared across the workspace

mod product;
mod validation;

pub use product::{Count, Price, ProductName, SupplierName};
pub use validation::ValidationError;
