//! HTTP API handlers for bandpage

pub mod albums;
pub mod health;
pub mod history;
pub mod songs;
pub mod ui;

pub use albums::{get_albums, get_compilations};
pub use health::health_routes;
pub use history::get_history;
pub use songs::get_songs;
pub use ui::{serve_app_js, serve_index, serve_styles_css};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::model::{artist_key, ArtistRecord};
use crate::AppState;

/// API errors mapped to HTTP responses.
///
/// The Portuguese bodies are the published wire contract of the site.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown artist, or an artist without a usable history text
    HistoryNotFound,
    /// Unknown artist on a discography endpoint
    ArtistNotFound,
    /// Library store read failure
    Store(crate::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::HistoryNotFound => (
                StatusCode::NOT_FOUND,
                "Artista ou história não encontrados".to_string(),
            ),
            ApiError::ArtistNotFound => {
                (StatusCode::NOT_FOUND, "Artista não encontrado".to_string())
            }
            ApiError::Store(e) => {
                error!("Failed to read the library store: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Load the library fresh and look up an artist by display name or key.
pub(crate) async fn lookup_artist(state: &AppState, artist: &str) -> Result<ArtistRecord, ApiError> {
    let library = state.store.load().await.map_err(ApiError::Store)?;
    let key = artist_key(artist);

    library.get(&key).cloned().ok_or(ApiError::ArtistNotFound)
}
