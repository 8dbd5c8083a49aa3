//! Front-end Routes
//!
//! Serves the built single-page application. Static assets are served from the
//! dist directory; every other path gets `index.html` so client-side routes
//! survive a reload.

use tower_http::services::{ServeDir, ServeFile};

use crate::server::state::AppState;

/// Static file service with the entry page as fallback
pub fn spa_service(state: &AppState) -> ServeDir<ServeFile> {
    ServeDir::new(&state.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(state.index_file()))
}
