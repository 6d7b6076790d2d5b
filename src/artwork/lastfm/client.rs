//! Last.fm HTTP client
//!
//! Handles communication with the Last.fm web service.
//! See: https://www.last.fm/api/show/album.search
//!
//! ## API Quirks
//!
//! Last.fm reports most failures (bad key, suspended key, bad method) as a
//! JSON body with `error` and `message`, sometimes with a 200 status and
//! sometimes with 4xx. Both cases are surfaced as `SearchError::Api`.

use std::sync::Arc;

use super::{adapter, dto};
use crate::artwork::domain::{AlbumArtwork, ArtworkSize, SearchError};
use crate::artwork::traits::HttpTransport;

/// Default Last.fm API root
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0";

/// Last.fm API client
pub struct LastFmClient<T: HttpTransport> {
    transport: Arc<T>,
    api_key: String,
    base_url: String,
    artwork_size: ArtworkSize,
}

impl<T: HttpTransport> LastFmClient<T> {
    /// Create a new client with the given transport and API key
    pub fn new(
        transport: Arc<T>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        artwork_size: ArtworkSize,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            transport,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            artwork_size,
        }
    }

    /// Search for an album and return the first match's artwork
    pub async fn search_album(&self, album: &str) -> Result<Option<AlbumArtwork>, SearchError> {
        let response = self.send_search_request(album).await?;
        if let Some(total) = response
            .results
            .as_ref()
            .and_then(|r| r.total_results.as_deref())
        {
            tracing::debug!(album, total, "album.search matches");
        }
        adapter::to_album_artwork(response, self.artwork_size)
    }

    /// Build the `album.search` URL for a query.
    pub fn search_url(&self, album: &str) -> String {
        build_search_url(&self.base_url, album, &self.api_key)
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        album: &str,
    ) -> Result<dto::AlbumSearchResponse, SearchError> {
        let url = self.search_url(album);
        tracing::debug!(
            url = %build_search_url(&self.base_url, album, "REDACTED"),
            "Sending album.search request"
        );

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| self.redact(e))?;

        if !response.is_success() {
            // Last.fm usually explains failures in a JSON body
            if let Ok(body) = serde_json::from_slice::<dto::AlbumSearchResponse>(&response.body)
                && let Some(code) = body.error
            {
                return Err(SearchError::Api {
                    code,
                    message: body.message.unwrap_or_default(),
                });
            }
            return Err(SearchError::Http {
                status: response.status,
            });
        }

        serde_json::from_slice::<dto::AlbumSearchResponse>(&response.body)
            .map_err(|e| SearchError::Parse(e.to_string()))
    }

    /// Strip the API key from transport error text
    fn redact(&self, err: SearchError) -> SearchError {
        match err {
            SearchError::Network(message) if !self.api_key.is_empty() => {
                let encoded = urlencoding::encode(&self.api_key);
                SearchError::Network(
                    message
                        .replace(encoded.as_ref(), "REDACTED")
                        .replace(&self.api_key, "REDACTED"),
                )
            }
            other => other,
        }
    }
}

/// Build the request URL, URL-encoding the query and the key.
pub fn build_search_url(base_url: &str, album: &str, api_key: &str) -> String {
    format!(
        "{}/?method=album.search&album={}&api_key={}&format=json",
        base_url.trim_end_matches('/'),
        urlencoding::encode(album),
        urlencoding::encode(api_key)
    )
}
