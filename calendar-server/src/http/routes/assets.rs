//! Static front-end serving
//!
//! Anything the API does not match falls through to the asset
//! directory. `/` serves `index.html`; missing files are 404.

use std::path::Path;

use tower_http::services::ServeDir;

/// Service for the static asset directory
pub fn service(dir: &Path) -> ServeDir {
    tracing::info!(path = %dir.display(), "Serving static files");
    ServeDir::new(dir).append_index_html_on_directories(true)
}
