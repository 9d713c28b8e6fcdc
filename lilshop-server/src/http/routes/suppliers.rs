//! Supplier endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use lilshop_core::models::{Price, SupplierName};

use crate::db::repos::{Supplier, SupplierRepo, SupplierWithProduct};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create supplier request
#[derive(Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub product_id: i64,
    pub product_cost: f64,
}

/// Supplier response
#[derive(Serialize)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub product_id: i64,
    pub product_cost: f64,
}

impl From<Supplier> for SupplierResponse {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            name: s.name,
            phone: s.phone,
            email: s.email,
            product_id: s.product_id,
            product_cost: s.product_cost,
        }
    }
}

/// Supplier with product name for list display
#[derive(Serialize)]
pub struct SupplierListResponse {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub product_cost: f64,
    pub product_name: String,
}

impl From<SupplierWithProduct> for SupplierListResponse {
    fn from(s: SupplierWithProduct) -> Self {
        Self {
            id: s.id,
            name: s.name,
            phone: s.phone,
            email: s.email,
            product_cost: s.product_cost,
            product_name: s.product_name,
        }
    }
}

/// GET /api/suppliers - list suppliers with product names
async fn list_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SupplierListResponse>>, ApiError> {
    let suppliers = SupplierRepo::new(&state.pool).list_with_products().await?;
    Ok(Json(
        suppliers.into_iter().map(SupplierListResponse::from).collect(),
    ))
}

/// POST /api/suppliers - create a supplier
async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<SupplierResponse>), ApiError> {
    let name = SupplierName::new(&req.name)?;
    let cost = Price::new(req.product_cost)?;
    let supplier = SupplierRepo::new(&state.pool)
        .create(name, req.phone, req.email, req.product_id, cost)
        .await?;

    Ok((StatusCode::CREATED, Json(SupplierResponse::from(supplier))))
}

/// Supplier routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/suppliers", get(list_suppliers).post(create_supplier))
}
