//! Search dispatcher - turns an album name into displayable artwork
//!
//! This is the high-level API the screen and the CLI use:
//! 1. Query Last.fm `album.search` with the configured key
//! 2. Pick the first match's artwork at the configured size
//! 3. Optionally download the image bytes
//!
//! Every request is bounded by the configured timeout, independent of the
//! transport, so a hung connection always settles.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::artwork::{
    domain::{AlbumArtwork, Artwork, ArtworkSize, ImageResult, SearchError},
    download::ArtworkDownloader,
    http::ReqwestTransport,
    lastfm::{DEFAULT_BASE_URL, LastFmClient},
    traits::HttpTransport,
};

/// Configuration for the search dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Last.fm API key (get one at https://www.last.fm/api/account/create)
    pub api_key: String,
    /// API root, without the trailing `/?method=...`
    pub base_url: String,
    /// Upper bound for each request
    pub timeout: Duration,
    /// Which artwork variant to pick
    pub artwork_size: ArtworkSize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            artwork_size: ArtworkSize::default(),
        }
    }
}

/// Dispatches album searches and artwork downloads
pub struct SearchDispatcher<T: HttpTransport = ReqwestTransport> {
    lastfm: LastFmClient<T>,
    downloader: ArtworkDownloader<T>,
    timeout: Duration,
}

impl SearchDispatcher<ReqwestTransport> {
    /// Create a dispatcher backed by a real HTTP client
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }
}

impl<T: HttpTransport> SearchDispatcher<T> {
    /// Create a dispatcher with an injected transport
    pub fn with_transport(config: SearchConfig, transport: Arc<T>) -> Self {
        Self {
            lastfm: LastFmClient::new(
                transport.clone(),
                config.api_key,
                config.base_url,
                config.artwork_size,
            ),
            downloader: ArtworkDownloader::new(transport),
            timeout: config.timeout,
        }
    }

    /// Search for an album and resolve to a displayable result.
    ///
    /// Never fails: network, HTTP, timeout, and decoding problems are logged
    /// and resolve to [`ImageResult::Error`].
    pub async fn search(&self, query: &str) -> ImageResult {
        let result = self.lookup(query).await;
        match &result {
            Ok(Some(artwork)) => tracing::info!(
                query,
                album = artwork.album.as_deref().unwrap_or("?"),
                artist = artwork.artist.as_deref().unwrap_or("?"),
                "Found artwork"
            ),
            Ok(None) => tracing::info!(query, "No artwork found"),
            Err(e) => tracing::warn!(query, error = %e, "Album search failed"),
        }
        ImageResult::from(result)
    }

    /// Search for an album, propagating failures.
    pub async fn lookup(&self, query: &str) -> Result<Option<AlbumArtwork>, SearchError> {
        self.bounded(self.lastfm.search_album(query)).await
    }

    /// Download the image behind an artwork URL.
    pub async fn download_artwork(&self, url: &str) -> Result<Artwork, SearchError> {
        self.bounded(self.downloader.download(url)).await
    }

    async fn bounded<R>(
        &self,
        fut: impl Future<Output = Result<R, SearchError>>,
    ) -> Result<R, SearchError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| SearchError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::traits::mocks::MockTransport;

    fn body_with_images(count: usize) -> String {
        let images: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"{}": "https://img.example/{}.png", "size": "s{}"}}"#, "#text", i, i))
            .collect();
        format!(
            r#"{{"results": {{"albummatches": {{"album": [{{"name": "Album", "artist": "Artist", "image": [{}]}}]}}}}}}"#,
            images.join(",")
        )
    }

    fn dispatcher(mock: MockTransport) -> (SearchDispatcher<MockTransport>, Arc<MockTransport>) {
        let transport = Arc::new(mock);
        let config = SearchConfig {
            api_key: "injected-key".to_string(),
            base_url: "http://mock".to_string(),
            timeout: Duration::from_millis(200),
            ..Default::default()
        };
        (
            SearchDispatcher::with_transport(config, transport.clone()),
            transport,
        )
    }

    #[tokio::test]
    async fn test_found_uses_fourth_variant() {
        let (dispatcher, transport) = dispatcher(MockTransport::json(&body_with_images(5)));
        let result = dispatcher.search("Album").await;

        assert_eq!(
            result,
            ImageResult::Found {
                url: "https://img.example/3.png".to_string()
            }
        );
        let requested = transport.requested();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].contains("api_key=injected-key"));
        assert!(requested[0].contains("album=Album"));
    }

    #[tokio::test]
    async fn test_empty_album_list_is_not_found() {
        let body = r#"{"results": {"albummatches": {"album": []}}}"#;
        let (dispatcher, _) = dispatcher(MockTransport::json(body));
        assert_eq!(dispatcher.search("Nothing").await, ImageResult::NotFound);
    }

    #[tokio::test]
    async fn test_empty_image_list_is_not_found() {
        let (dispatcher, _) = dispatcher(MockTransport::json(&body_with_images(0)));
        assert_eq!(dispatcher.search("Album").await, ImageResult::NotFound);
    }

    #[tokio::test]
    async fn test_two_image_variants_is_not_found() {
        let (dispatcher, _) = dispatcher(MockTransport::json(&body_with_images(2)));
        assert_eq!(dispatcher.search("Album").await, ImageResult::NotFound);
    }

    #[tokio::test]
    async fn test_rejecting_transport_is_error() {
        let (dispatcher, _) = dispatcher(MockTransport::failing("network down"));
        match dispatcher.search("Album").await {
            ImageResult::Error { message } => assert!(message.contains("network down")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_message_never_shows_key() {
        let (dispatcher, _) = dispatcher(MockTransport::failing(
            "error sending request for url (http://mock/?method=album.search&api_key=injected-key&format=json)",
        ));
        match dispatcher.search("Album").await {
            ImageResult::Error { message } => {
                assert!(!message.contains("injected-key"));
                assert!(message.contains("Network error"));
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let (dispatcher, _) = dispatcher(MockTransport::json("{not json"));
        assert!(matches!(
            dispatcher.search("Album").await,
            ImageResult::Error { .. }
        ));
    }

    #[tokio::test]
    async fn test_hanging_transport_times_out() {
        let mock = MockTransport::json(&body_with_images(4)).delayed(Duration::from_secs(30));
        let (dispatcher, _) = dispatcher(mock);

        let result = dispatcher.lookup("Album").await;
        assert_eq!(result, Err(SearchError::Timeout(Duration::from_millis(200))));
        assert!(matches!(
            dispatcher.search("Album").await,
            ImageResult::Error { .. }
        ));
    }

    #[tokio::test]
    async fn test_download_artwork_through_dispatcher() {
        let (dispatcher, _) = dispatcher(MockTransport::bytes(Some("image/jpeg"), vec![1, 2, 3]));
        let artwork = dispatcher
            .download_artwork("https://img.example/3.png")
            .await
            .unwrap();
        assert_eq!(artwork.data, vec![1, 2, 3]);
        assert_eq!(artwork.mime_type, "image/jpeg");
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.artwork_size, ArtworkSize::ExtraLarge);
    }
}
