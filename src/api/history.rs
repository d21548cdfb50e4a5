//! Artist history API

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::api::ApiError;
use crate::model::artist_key;
use crate::AppState;

/// History response body
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    #[serde(rename = "historia")]
    pub history: String,
}

/// GET /api/historia/:artista
///
/// Returns the stored history text for an artist. The path segment is
/// normalized the same way the library keys are derived, so
/// "Led Zeppelin" and "led_zeppelin" resolve identically. An unknown
/// artist and an empty history text both answer 404.
pub async fn get_history(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let library = state.store.load().await.map_err(ApiError::Store)?;
    let key = artist_key(&artist);

    match library.get(&key) {
        Some(record) if !record.history.is_empty() => Ok(Json(HistoryResponse {
            history: record.history.clone(),
        })),
        _ => Err(ApiError::HistoryNotFound),
    }
}
