//! Library data model
//!
//! The library file is a single JSON object mapping artist keys to artist
//! records. Field names on the wire stay in Portuguese (`historia`,
//! `albuns`, `album`) because they are the published file format; the Rust
//! side uses English identifiers with serde renames.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole library: artist key to record.
///
/// A BTreeMap keeps the persisted file key order stable across rewrites.
pub type Library = BTreeMap<String, ArtistRecord>;

/// One artist's entry in the library.
///
/// Both fields default when absent: the startup refresh may create an
/// entry that holds only `historia`, and older files stored the album
/// list without a history text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    /// Biographical summary shown by the history view
    #[serde(rename = "historia", default)]
    pub history: String,

    /// Releases in file order (studio albums, live albums, compilations)
    #[serde(rename = "albuns", default)]
    pub albums: Vec<Album>,
}

/// One release in an artist's discography. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Release title
    #[serde(rename = "album")]
    pub title: String,

    /// Release year
    pub year: i32,

    /// Short description shown on the release card
    pub description: String,

    /// Track titles in release order
    pub tracks: Vec<String>,
}

/// Derive the library key for an artist name: lowercase, spaces to
/// underscores.
///
/// The refresh task and every endpoint must derive keys identically; a
/// mismatch turns into a silent not-found.
pub fn artist_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
