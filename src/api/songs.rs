//! Songs-by-year API

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::api::{lookup_artist, ApiError};
use crate::catalog::songs_by_year;
use crate::AppState;

/// Songs view response body: years ascending, names sorted within a year
#[derive(Debug, Serialize)]
pub struct SongsResponse {
    #[serde(rename = "anos")]
    pub years: Vec<YearGroup>,
}

/// All songs first released in one year
#[derive(Debug, Serialize)]
pub struct YearGroup {
    #[serde(rename = "ano")]
    pub year: i32,

    #[serde(rename = "musicas")]
    pub songs: Vec<String>,
}

/// GET /api/musicas/:artista
///
/// Returns every song under the year of its first chronological release,
/// with live and remastered re-releases of the same name deduplicated.
pub async fn get_songs(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Result<Json<SongsResponse>, ApiError> {
    let record = lookup_artist(&state, &artist).await?;

    let years = songs_by_year(&record.albums)
        .into_iter()
        .map(|(year, songs)| YearGroup { year, songs })
        .collect();

    Ok(Json(SongsResponse { years }))
}
