//! Adapter layer: Convert Last.fm DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If Last.fm changes its response format, only this file and dto.rs change.

use super::dto;
use crate::artwork::domain::{AlbumArtwork, ArtworkSize, SearchError};

/// Convert an `album.search` response into the artwork of its first match.
///
/// Returns `Ok(None)` when there is no match or the first match has no
/// artwork at the requested size.
pub fn to_album_artwork(
    response: dto::AlbumSearchResponse,
    size: ArtworkSize,
) -> Result<Option<AlbumArtwork>, SearchError> {
    if let Some(code) = response.error {
        return Err(SearchError::Api {
            code,
            message: response
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    let Some(results) = response.results else {
        return Ok(None);
    };
    let Some(album) = results.albums().first() else {
        return Ok(None);
    };

    Ok(select_artwork(album.images(), size).map(|image_url| AlbumArtwork {
        album: album.name.clone(),
        artist: album.artist.clone(),
        page_url: album.url.clone().filter(|u| !u.is_empty()),
        image_url,
        size,
    }))
}

/// Pick the variant at the size's rank in the provider's fixed ordering.
///
/// Lists shorter than the rank, and variants with an empty URL, yield `None`.
pub fn select_artwork(images: &[dto::Image], size: ArtworkSize) -> Option<String> {
    images
        .get(size.rank())
        .map(|image| image.text.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
