//! lilshop-core: shared kernel for the LilShop MRP dashboard
//!
//! Holds configuration loading, structured error types, and the
//! validated domain newtypes used by the server and CLI crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::ShopConfig;
pub use error::{Result, ShopError};
