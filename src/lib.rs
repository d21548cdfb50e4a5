//! bandpage library - Led Zeppelin band page service
//!
//! Serves artist history and discography views over a JSON file library,
//! with the history text refreshed from a generative API at startup.

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod catalog;
pub mod error;
pub mod gemini;
pub mod model;
pub mod refresh;
pub mod store;

pub use error::{Error, Result};

use store::LibraryStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Artist library backing store
    pub store: Arc<dyn LibraryStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // Data routes (JSON API)
    let data = Router::new()
        .route("/api/historia/:artista", get(api::get_history))
        .route("/api/albuns/:artista", get(api::get_albums))
        .route("/api/coletaneas/:artista", get(api::get_compilations))
        .route("/api/musicas/:artista", get(api::get_songs));

    // UI routes (static assets)
    let ui = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/styles.css", get(api::serve_styles_css))
        .merge(api::health_routes());

    // Combine routers
    Router::new()
        .merge(data)
        .merge(ui)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
