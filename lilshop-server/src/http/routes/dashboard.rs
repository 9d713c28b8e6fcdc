//! Dashboard summary endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{DashboardRepo, DashboardSummary};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Dashboard summary response
#[derive(Serialize)]
pub struct DashboardResponse {
    pub product_count: i64,
    pub inventory_units: i64,
    pub inventory_value: f64,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(s: DashboardSummary) -> Self {
        Self {
            product_count: s.product_count,
            inventory_units: s.inventory_units,
            inventory_value: s.inventory_value,
        }
    }
}

/// GET /api/dashboard - index-page aggregates
async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let summary = DashboardRepo::new(&state.pool).summary().await?;
    Ok(Json(DashboardResponse::from(summary)))
}

/// Dashboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/dashboard", get(dashboard))
}
