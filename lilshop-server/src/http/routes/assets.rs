//! Static file serving for the dashboard frontend
//!
//! Serves index.html, app.js, and style.css from the configured asset
//! directory. The frontend carries the navbar hover wiring and the
//! edit-product modal loader.

use std::path::Path;

use tower_http::services::ServeDir;

/// Build the asset service for the given directory.
///
/// Mounted as the router fallback so API routes keep precedence and
/// `/` resolves to `index.html`.
pub fn service(dir: &Path) -> ServeDir {
    tracing::info!(path = %dir.display(), "Serving dashboard assets");
    ServeDir::new(dir).append_index_html_on_directories(true)
}
