//! Album and compilation listing API

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::api::{lookup_artist, ApiError};
use crate::catalog::partition_albums;
use crate::model::Album;
use crate::AppState;

/// Release list response body, shared by both partitions
#[derive(Debug, Serialize)]
pub struct AlbumsResponse {
    #[serde(rename = "albuns")]
    pub albums: Vec<Album>,
}

/// GET /api/albuns/:artista
///
/// Returns the releases whose titles match no compilation marker, in
/// file order.
pub async fn get_albums(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Result<Json<AlbumsResponse>, ApiError> {
    let record = lookup_artist(&state, &artist).await?;
    let (albums, _) = partition_albums(&record.albums);

    Ok(Json(AlbumsResponse { albums }))
}

/// GET /api/coletaneas/:artista
///
/// Returns the releases whose titles match a compilation marker, in
/// file order. Together with the albums endpoint this covers every
/// release exactly once.
pub async fn get_compilations(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Result<Json<AlbumsResponse>, ApiError> {
    let record = lookup_artist(&state, &artist).await?;
    let (_, compilations) = partition_albums(&record.albums);

    Ok(Json(AlbumsResponse {
        albums: compilations,
    }))
}
