//! Inventory endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use lilshop_core::models::Count;

use crate::db::repos::{InventoryRepo, InventoryRow, InventoryWithProduct};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create inventory request
#[derive(Deserialize)]
pub struct CreateInventoryRequest {
    pub product_id: i64,
    pub count: i64,
}

/// Inventory row response
#[derive(Serialize)]
pub struct InventoryResponse {
    pub id: i64,
    pub product_id: i64,
    pub count: i64,
}

impl From<InventoryRow> for InventoryResponse {
    fn from(r: InventoryRow) -> Self {
        Self {
            id: r.id,
            product_id: r.product_id,
            count: r.count,
        }
    }
}

/// Inventory row with product name for list display
#[derive(Serialize)]
pub struct InventoryListResponse {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub count: i64,
}

impl From<InventoryWithProduct> for InventoryListResponse {
    fn from(r: InventoryWithProduct) -> Self {
        Self {
            id: r.id,
            product_id: r.product_id,
            product_name: r.product_name,
            count: r.count,
        }
    }
}

/// GET /api/inventory - list rows with product names
async fn list_inventory(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InventoryListResponse>>, ApiError> {
    let rows = InventoryRepo::new(&state.pool).list_with_products().await?;
    Ok(Json(rows.into_iter().map(InventoryListResponse::from).collect()))
}

/// POST /api/inventory - create a row for an existing product
async fn create_inventory(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateInventoryRequest>,
) -> Result<(StatusCode, Json<InventoryResponse>), ApiError> {
    let count = Count::new(req.count)?;
    let row = InventoryRepo::new(&state.pool)
        .create(req.product_id, count)
        .await?;

    Ok((StatusCode::CREATED, Json(InventoryResponse::from(row))))
}

/// POST /api/inventory/{id}/increment
async fn increment_inventory(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<InventoryResponse>, ApiError> {
    let row = InventoryRepo::new(&state.pool).increment(id).await?;
    Ok(Json(InventoryResponse::from(row)))
}

/// POST /api/inventory/{id}/decrement - clamped at zero
async fn decrement_inventory(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<InventoryResponse>, ApiError> {
    let row = InventoryRepo::new(&state.pool).decrement(id).await?;
    Ok(Json(InventoryResponse::from(row)))
}

/// Inventory routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/inventory", get(list_inventory).post(create_inventory))
        .route("/api/inventory/{id}/increment", post(increment_inventory))
        .route("/api/inventory/{id}/decrement", post(decrement_inventory))
}
