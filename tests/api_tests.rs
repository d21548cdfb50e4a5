//! Integration tests for bandpage API endpoints
//!
//! Tests cover:
//! - History endpoint: stored text, artist name normalization, 404 contract
//! - Album/compilation endpoints: marker-based partition of the discography
//! - Songs endpoint: first-release deduplication and year grouping
//! - Store failure mapping to 500 with the published error body
//! - Health endpoint and embedded UI serving

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use bandpage::model::{Album, ArtistRecord, Library};
use bandpage::store::{JsonFileStore, MemoryStore};
use bandpage::{build_router, AppState};

/// Test helper: Build an album with the given title, year and tracks
fn album(title: &str, year: i32, tracks: &[&str]) -> Album {
    Album {
        title: title.to_string(),
        year,
        description: format!("Lançado em {}", year),
        tracks: tracks.iter().map(|t| t.to_string()).collect(),
    }
}

/// Test helper: Library fixture with a featured artist and one artist
/// that has albums but no history text
fn sample_library() -> Library {
    let mut library = Library::new();

    // Deliberately out of chronological order; the songs endpoint must
    // sort by year before assigning first releases
    library.insert(
        "led_zeppelin".to_string(),
        ArtistRecord {
            history: "A banda foi formada em Londres em 1968.".to_string(),
            albums: vec![
                album(
                    "The Song Remains the Same",
                    1976,
                    &[
                        "Rock and Roll",
                        "The Song Remains the Same",
                        "Whole Lotta Love",
                        "Dyer Maker",
                    ],
                ),
                album(
                    "Led Zeppelin II",
                    1969,
                    &["Whole Lotta Love", "Ramble On", "Thank You"],
                ),
                album(
                    "Led Zeppelin IV",
                    1971,
                    &["Rock and Roll", "Black Dog", "Stairway to Heaven"],
                ),
                album(
                    "Houses of the Holy",
                    1973,
                    &["The Song Remains the Same", "The Ocean", "D'yer Mak'er"],
                ),
                album(
                    "Mothership",
                    2007,
                    &["Whole Lotta Love", "Stairway to Heaven", "Kashmir"],
                ),
            ],
        },
    );

    library.insert(
        "the_kinks".to_string(),
        ArtistRecord {
            history: String::new(),
            albums: vec![album("Arthur", 1969, &["Victoria", "Shangri-La"])],
        },
    );

    library
}

/// Test helper: Create app backed by an in-memory copy of the fixture
fn setup_app() -> axum::Router {
    let store = Arc::new(MemoryStore::new(sample_library()));
    build_router(AppState::new(store))
}

/// Test helper: Create request
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let request = test_request("GET", "/health");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "bandpage");
    assert!(body["version"].is_string());
}

// =============================================================================
// History Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_history_returns_stored_text() {
    let app = setup_app();

    let request = test_request("GET", "/api/historia/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["historia"], "A banda foi formada em Londres em 1968.");
}

#[tokio::test]
async fn test_history_normalizes_artist_name() {
    let app = setup_app();

    // "Led Zeppelin" must resolve to the same record as "led_zeppelin"
    let request = test_request("GET", "/api/historia/Led%20Zeppelin");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["historia"], "A banda foi formada em Londres em 1968.");
}

#[tokio::test]
async fn test_history_unknown_artist_returns_404() {
    let app = setup_app();

    let request = test_request("GET", "/api/historia/the_beatles");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Artista ou história não encontrados");
}

#[tokio::test]
async fn test_history_empty_text_returns_404() {
    let app = setup_app();

    // the_kinks exists in the library but has no history text
    let request = test_request("GET", "/api/historia/the_kinks");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Artista ou história não encontrados");
}

// =============================================================================
// Album and Compilation Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_albums_exclude_compilations() {
    let app = setup_app();

    let request = test_request("GET", "/api/albuns/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let albums = body["albuns"].as_array().unwrap();

    assert_eq!(albums.len(), 4);
    for entry in albums {
        assert_ne!(entry["album"], "Mothership");
        assert!(entry["year"].is_number());
        assert!(entry["description"].is_string());
        assert!(entry["tracks"].is_array());
    }
}

#[tokio::test]
async fn test_compilations_only_marker_titles() {
    let app = setup_app();

    let request = test_request("GET", "/api/coletaneas/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let compilations = body["albuns"].as_array().unwrap();

    assert_eq!(compilations.len(), 1);
    assert_eq!(compilations[0]["album"], "Mothership");
}

#[tokio::test]
async fn test_albums_and_compilations_partition_discography() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(test_request("GET", "/api/albuns/led_zeppelin"))
        .await
        .unwrap();
    let albums = extract_json(response.into_body()).await;

    let response = app
        .oneshot(test_request("GET", "/api/coletaneas/led_zeppelin"))
        .await
        .unwrap();
    let compilations = extract_json(response.into_body()).await;

    let album_titles: Vec<&str> = albums["albuns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["album"].as_str().unwrap())
        .collect();
    let compilation_titles: Vec<&str> = compilations["albuns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["album"].as_str().unwrap())
        .collect();

    // Every release lands in exactly one of the two views
    assert_eq!(album_titles.len() + compilation_titles.len(), 5);
    for title in &compilation_titles {
        assert!(!album_titles.contains(title));
    }
}

#[tokio::test]
async fn test_albums_unknown_artist_returns_404() {
    let app = setup_app();

    let request = test_request("GET", "/api/albuns/the_beatles");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Artista não encontrado");
}

// =============================================================================
// Songs Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_songs_grouped_by_first_release_year() {
    let app = setup_app();

    let request = test_request("GET", "/api/musicas/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let groups = body["anos"].as_array().unwrap();

    let years: Vec<i64> = groups.iter().map(|g| g["ano"].as_i64().unwrap()).collect();

    // Ascending, and 1976 absent: every track on the live album is a
    // re-release of an earlier recording
    assert_eq!(years, vec![1969, 1971, 1973, 2007]);
}

#[tokio::test]
async fn test_songs_rereleases_deduplicated() {
    let app = setup_app();

    let request = test_request("GET", "/api/musicas/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    let groups = body["anos"].as_array().unwrap();

    // "Whole Lotta Love" appears in 1969, 1976 and 2007; only 1969 keeps it
    let songs_1969: Vec<&str> = groups[0]["musicas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(songs_1969, vec!["Ramble On", "Thank You", "Whole Lotta Love"]);

    // "Dyer Maker" (1976) normalizes to the same name as "D'yer Mak'er"
    // (1973), so the 1973 spelling is the one that survives
    let songs_1973: Vec<&str> = groups[2]["musicas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(
        songs_1973,
        vec!["D'yer Mak'er", "The Ocean", "The Song Remains the Same"]
    );

    // Only the compilation-exclusive track is new in 2007
    let songs_2007: Vec<&str> = groups[3]["musicas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(songs_2007, vec!["Kashmir"]);
}

#[tokio::test]
async fn test_songs_sorted_within_year() {
    let app = setup_app();

    let request = test_request("GET", "/api/musicas/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    let groups = body["anos"].as_array().unwrap();

    let songs_1971: Vec<&str> = groups[1]["musicas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(
        songs_1971,
        vec!["Black Dog", "Rock and Roll", "Stairway to Heaven"]
    );
}

#[tokio::test]
async fn test_songs_unknown_artist_returns_404() {
    let app = setup_app();

    let request = test_request("GET", "/api/musicas/the_beatles");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Artista não encontrado");
}

// =============================================================================
// Store Failure Tests
// =============================================================================

#[tokio::test]
async fn test_store_failure_returns_500() {
    // Point the store at a file that does not exist; every load fails
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("missing.json")));
    let app = build_router(AppState::new(store));

    let request = test_request("GET", "/api/historia/led_zeppelin");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Erro interno do servidor");
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_page_served() {
    let app = setup_app();

    let request = test_request("GET", "/");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("filter-select"));
    assert!(html.contains("info-search-button"));
}

#[tokio::test]
async fn test_app_js_served_with_content_type() {
    let app = setup_app();

    let request = test_request("GET", "/static/app.js");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript"
    );
}

#[tokio::test]
async fn test_styles_css_served_with_content_type() {
    let app = setup_app();

    let request = test_request("GET", "/static/styles.css");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/css");
}
