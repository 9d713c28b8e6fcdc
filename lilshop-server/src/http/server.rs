//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Static asset fallback for the dashboard frontend
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Directory holding the dashboard frontend
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            assets_dir: PathBuf::from("static"),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    // CORS configuration
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                "http://localhost:3030".parse().unwrap(),
                "http://127.0.0.1:3030".parse().unwrap(),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::dashboard::router())
        .merge(routes::products::router())
        .merge(routes::inventory::router())
        .merge(routes::suppliers::router())
        .fallback_service(routes::assets::service(&config.assets_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// Migrations have already run by the time this is called; the server
/// itself is stateless per request beyond the pool.
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState { pool };
    let app = build_router(state, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
    }

    async fn test_app(dir: &tempfile::TempDir) -> Router {
        let url = format!("sqlite://{}/test.db", dir.path().display());
        let pool = create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");
        build_router(AppState { pool }, &ServerConfig::default())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn modal_loader_contract() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        // Seed one product through the API
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"name": "Widget A", "price": 4.5}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["id"].as_i64().unwrap();

        // The modal loader path returns typed JSON for that id
        let response = app
            .clone()
            .oneshot(get_request(&format!("/get_product/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Widget A");
        assert_eq!(body["price"], 4.5);
    }

    #[tokio::test]
    async fn modal_loader_missing_product_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app.oneshot(get_request("/get_product/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn modal_loader_malformed_id_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app
            .oneshot(get_request("/get_product/not-a-number"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn modal_loader_empty_segment_is_404() {
        // A trigger element with no data-product-id produces this URL;
        // documented behavior is an unmatched route.
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app.oneshot(get_request("/get_product/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_dashboard_frontend() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        // Default assets dir resolves to the crate's static/ during tests
        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("modal-edit-product"));
        assert!(html.contains("link-dashboard"));
    }

    #[tokio::test]
    async fn create_product_validation_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"name": "", "price": 1.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"name": "Widget", "price": -1.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn product_update_and_delete_flow() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"name": "Widget A", "price": 4.5}),
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/products/{}", id),
                json!({"name": "Widget B", "price": 5.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Widget B");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/products/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request(&format!("/api/products/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn inventory_flow_with_clamped_decrement() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"name": "Widget A", "price": 2.0}),
            ))
            .await
            .unwrap();
        let product_id = body_json(response).await["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/inventory",
                json!({"product_id": product_id, "count": 1}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let row_id = body_json(response).await["id"].as_i64().unwrap();

        // 1 -> 0
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/inventory/{}/decrement", row_id),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["count"], 0);

        // 0 -> 0 (clamped, still 200)
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/inventory/{}/decrement", row_id),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["count"], 0);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/inventory/{}/increment", row_id),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["count"], 1);

        let response = app.oneshot(get_request("/api/inventory")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body[0]["product_name"], "Widget A");
    }

    #[tokio::test]
    async fn supplier_for_missing_product_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/suppliers",
                json!({"name": "Acme Corp", "product_id": 42, "product_cost": 1.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dashboard_aggregates() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir).await;

        // Empty store: zeros, not nulls
        let response = app.clone().oneshot(get_request("/api/dashboard")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["product_count"], 0);
        assert_eq!(body["inventory_units"], 0);
        assert_eq!(body["inventory_value"], 0.0);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"name": "Widget A", "price": 2.5}),
            ))
            .await
            .unwrap();
        let product_id = body_json(response).await["id"].as_i64().unwrap();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/inventory",
                json!({"product_id": product_id, "count": 4}),
            ))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/dashboard")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["product_count"], 1);
        assert_eq!(body["inventory_units"], 4);
        assert_eq!(body["inventory_value"], 10.0);
    }
}
