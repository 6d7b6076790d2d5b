//! Internal domain models for album artwork search.
//!
//! These types are OUR types - they don't change when the Last.fm API changes.
//! API responses get converted into these types by the adapter.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Artwork size, in Last.fm's fixed size ordering.
///
/// Last.fm returns artwork variants as a list ordered small, medium, large,
/// extralarge. The rank is the index into that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkSize {
    /// 34px
    Small,
    /// 64px
    Medium,
    /// 174px
    Large,
    /// 300px (default)
    #[default]
    ExtraLarge,
}

impl ArtworkSize {
    /// Position of this size in the provider's variant list
    pub fn rank(self) -> usize {
        match self {
            ArtworkSize::Small => 0,
            ArtworkSize::Medium => 1,
            ArtworkSize::Large => 2,
            ArtworkSize::ExtraLarge => 3,
        }
    }

    /// Label Last.fm uses in the `size` field
    pub fn label(self) -> &'static str {
        match self {
            ArtworkSize::Small => "small",
            ArtworkSize::Medium => "medium",
            ArtworkSize::Large => "large",
            ArtworkSize::ExtraLarge => "extralarge",
        }
    }
}

impl fmt::Display for ArtworkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArtworkSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(ArtworkSize::Small),
            "medium" => Ok(ArtworkSize::Medium),
            "large" => Ok(ArtworkSize::Large),
            "extralarge" | "extra-large" | "xl" => Ok(ArtworkSize::ExtraLarge),
            other => Err(format!(
                "unknown artwork size '{}' (expected small, medium, large or extralarge)",
                other
            )),
        }
    }
}

/// The first album match and the artwork picked for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumArtwork {
    /// Album title
    pub album: Option<String>,
    /// Artist name
    pub artist: Option<String>,
    /// Last.fm page for the album
    pub page_url: Option<String>,
    /// Artwork image URL
    pub image_url: String,
    /// Size the artwork was picked at
    pub size: ArtworkSize,
}

/// Outcome of a search, as seen by the screen.
///
/// Serializes as `{"kind": "found", "url": ...}`, `{"kind": "not_found"}`
/// or `{"kind": "error", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageResult {
    Found { url: String },
    NotFound,
    Error { message: String },
}

impl From<Result<Option<AlbumArtwork>, SearchError>> for ImageResult {
    fn from(result: Result<Option<AlbumArtwork>, SearchError>) -> Self {
        match result {
            Ok(Some(artwork)) => ImageResult::Found {
                url: artwork.image_url,
            },
            Ok(None) => ImageResult::NotFound,
            Err(e) => ImageResult::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Downloaded artwork
#[derive(Debug, Clone)]
pub struct Artwork {
    /// Image data (JPEG, PNG, ...)
    pub data: Vec<u8>,
    /// MIME type
    pub mime_type: String,
    /// Source URL
    pub url: String,
}

/// Errors that can occur while searching or downloading artwork
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Last.fm error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Resource not found")]
    NotFound,

    #[error("Response larger than {limit} bytes")]
    TooLarge { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rank_follows_provider_order() {
        assert_eq!(ArtworkSize::Small.rank(), 0);
        assert_eq!(ArtworkSize::ExtraLarge.rank(), 3);
        assert_eq!(ArtworkSize::default(), ArtworkSize::ExtraLarge);
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("Large".parse::<ArtworkSize>(), Ok(ArtworkSize::Large));
        assert_eq!("xl".parse::<ArtworkSize>(), Ok(ArtworkSize::ExtraLarge));
        assert!("huge".parse::<ArtworkSize>().is_err());
    }

    #[test]
    fn test_image_result_json_shape() {
        let found = ImageResult::Found {
            url: "https://img.example/a.png".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"kind":"found","url":"https://img.example/a.png"}"#
        );
        assert_eq!(
            serde_json::to_string(&ImageResult::NotFound).unwrap(),
            r#"{"kind":"not_found"}"#
        );
        let error = ImageResult::Error {
            message: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"kind":"error","message":"boom"}"#
        );
    }

    #[test]
    fn test_image_result_from_lookup() {
        let err: Result<Option<AlbumArtwork>, SearchError> =
            Err(SearchError::Network("connection refused".to_string()));
        match ImageResult::from(err) {
            ImageResult::Error { message } => assert!(message.contains("connection refused")),
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(ImageResult::from(Ok(None)), ImageResult::NotFound);
    }
}
