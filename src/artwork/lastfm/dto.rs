//! Last.fm API Data Transfer Objects
//!
//! These structs mirror the EXACT response shape of `album.search`.
//! Every nested field is optional: Last.fm omits or nulls parts of the tree
//! when there are no matches, and error responses carry only `error` and
//! `message` at the top level.
//!
//! API Reference: https://www.last.fm/api/show/album.search

use serde::{Deserialize, Serialize};

/// Root response for `album.search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlbumSearchResponse {
    /// Search results (absent on error responses)
    pub results: Option<SearchResults>,
    /// Last.fm error code (present only on error responses)
    pub error: Option<i64>,
    /// Last.fm error message
    pub message: Option<String>,
}

/// The `results` object
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResults {
    /// Total number of matches, as a string
    #[serde(rename = "opensearch:totalResults")]
    pub total_results: Option<String>,
    /// Album matches wrapper
    pub albummatches: Option<AlbumMatches>,
}

/// The `albummatches` wrapper
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlbumMatches {
    /// Matching albums, best match first
    pub album: Option<Vec<Album>>,
}

/// A single album match
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Album {
    /// Album title
    pub name: Option<String>,
    /// Artist name (plain string in search results)
    pub artist: Option<String>,
    /// Last.fm album page
    pub url: Option<String>,
    /// MusicBrainz release ID (often empty)
    pub mbid: Option<String>,
    /// Artwork variants, ordered small → extralarge
    pub image: Option<Vec<Image>>,
}

/// A single artwork variant
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Image {
    /// Image URL (empty string when Last.fm has no artwork)
    #[serde(rename = "#text", default)]
    pub text: String,
    /// Size label: small, medium, large, extralarge
    #[serde(default)]
    pub size: String,
}

impl SearchResults {
    /// Albums in the response, empty when the list is absent
    pub fn albums(&self) -> &[Album] {
        self.albummatches
            .as_ref()
            .and_then(|m| m.album.as_deref())
            .unwrap_or(&[])
    }
}

impl Album {
    /// Artwork variants, empty when absent
    pub fn images(&self) -> &[Image] {
        self.image.as_deref().unwrap_or(&[])
    }
}
