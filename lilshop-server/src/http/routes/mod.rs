//! Route handlers organized by resource

pub mod assets;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod products;
pub mod suppliers;
