//! Discography views
//!
//! Shapes the raw album list into what the frontend renders: the
//! album/compilation partition and the deduplicated songs-by-year view.

use std::collections::{BTreeMap, HashSet};

use crate::model::Album;

/// Title substrings that mark a release as a compilation rather than a
/// studio or live album.
pub const COMPILATION_MARKERS: [&str; 5] = [
    "Box Set",
    "Remasters",
    "Boxed Set",
    "Early Days and Latter Days",
    "Mothership",
];

/// Whether a release title matches any compilation marker.
pub fn is_compilation(album: &Album) -> bool {
    COMPILATION_MARKERS
        .iter()
        .any(|marker| album.title.contains(marker))
}

/// Split releases into (albums, compilations), preserving file order.
///
/// Every release lands in exactly one of the two lists.
pub fn partition_albums(albums: &[Album]) -> (Vec<Album>, Vec<Album>) {
    albums.iter().cloned().partition(|album| !is_compilation(album))
}

/// Normalize a track name for duplicate detection: lowercase, drop every
/// character that is not ASCII alphanumeric or whitespace, trim.
///
/// Matching happens on the normalized form, so "Dazed And Confused" and
/// "Dazed and Confused." are the same song while "Dazed and Confused
/// (Live)" is not ("live" survives normalization).
pub fn normalize_track(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Group every song under the year of its first chronological release.
///
/// Albums are visited in ascending year order (file order within a year),
/// tracks in album order. The first appearance of each normalized name is
/// recorded under its album's year with the original spelling; later
/// duplicates, such as live or remastered re-releases, are discarded.
/// Years ascend in the result and names within a year are sorted.
pub fn songs_by_year(albums: &[Album]) -> BTreeMap<i32, Vec<String>> {
    let mut chronological: Vec<&Album> = albums.iter().collect();
    chronological.sort_by_key(|album| album.year);

    let mut seen = HashSet::new();
    let mut by_year: BTreeMap<i32, Vec<String>> = BTreeMap::new();

    for album in chronological {
        for track in &album.tracks {
            if seen.insert(normalize_track(track)) {
                by_year.entry(album.year).or_default().push(track.clone());
            }
        }
    }

    for songs in by_year.values_mut() {
        songs.sort();
    }
    by_year
}
