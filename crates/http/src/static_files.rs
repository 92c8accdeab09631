//! Static file serving for paths outside the API.

use std::path::Path;

use tower_http::services::ServeDir;

/// Serves files under `dir`, with `index.html` for directory requests.
/// Missing files answer 404.
pub fn serve_dir(dir: &Path) -> ServeDir {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "public directory not found, static requests will 404");
    }
    ServeDir::new(dir).append_index_html_on_directories(true)
}
