//! Product endpoints
//!
//! Includes the modal loader contract: `GET /get_product/{id}` returns
//! the product as typed JSON, which the frontend renders into the
//! edit-product modal locally.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use lilshop_core::models::{Price, ProductName};

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create/update product request
#[derive(Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
}

/// Product response
#[derive(Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// GET /api/products - list all products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /api/products - create a new product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let name = ProductName::new(&req.name)?;
    let price = Price::new(req.price)?;
    let product = ProductRepo::new(&state.pool).create(name, price).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /api/products/{id} and GET /get_product/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// PUT /api/products/{id} - update name and price
async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let name = ProductName::new(&req.name)?;
    let price = Price::new(req.price)?;
    let product = ProductRepo::new(&state.pool).update(id, name, price).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /api/products/{id} - delete a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ProductRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Modal loader path; same handler, kept for the frontend contract
        .route("/get_product/{id}", get(get_product))
}
