//! lilshop-server: HTTP server for the LilShop MRP dashboard
//!
//! Exposes the product, inventory, and supplier stores as a JSON API
//! and serves the static dashboard frontend.

pub mod db;
pub mod http;

pub use http::{run_server, AppState, ServerConfig};
