//! Artwork image download.
//!
//! Fetches the bytes behind an artwork URL so the UI can draw them and the
//! CLI can save them.

use std::sync::Arc;

use super::domain::{Artwork, SearchError};
use super::http::MAX_BODY_BYTES;
use super::traits::HttpTransport;

/// Downloads artwork images
pub struct ArtworkDownloader<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> ArtworkDownloader<T> {
    /// Create a new downloader sharing the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Download an image from a URL
    pub async fn download(&self, url: &str) -> Result<Artwork, SearchError> {
        let response = self.transport.get(url).await?;

        if response.status == 404 {
            return Err(SearchError::NotFound);
        }

        if !response.is_success() {
            return Err(SearchError::Http {
                status: response.status,
            });
        }

        if response.body.len() > MAX_BODY_BYTES {
            return Err(SearchError::TooLarge {
                limit: MAX_BODY_BYTES,
            });
        }

        if response.body.is_empty() {
            return Err(SearchError::Parse("empty image body".to_string()));
        }

        let mime_type = response
            .content_type
            .filter(|ct| ct.starts_with("image/"))
            .or_else(|| sniff_mime_type(&response.body))
            .unwrap_or_else(|| "image/jpeg".to_string());

        Ok(Artwork {
            data: response.body,
            mime_type,
            url: url.to_string(),
        })
    }
}

/// Guess an image MIME type from its leading bytes
pub fn sniff_mime_type(data: &[u8]) -> Option<String> {
    image::guess_format(data)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

/// File extension for a MIME type, used when saving artwork
pub fn extension_for(mime_type: &str) -> &'static str {
    image::ImageFormat::from_mime_type(mime_type)
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("jpg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::traits::mocks::MockTransport;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn test_download_uses_content_type() {
        let mock = Arc::new(MockTransport::bytes(Some("image/png"), PNG_MAGIC.to_vec()));
        let downloader = ArtworkDownloader::new(mock);

        let artwork = downloader.download("https://img.example/a.png").await.unwrap();
        assert_eq!(artwork.mime_type, "image/png");
        assert_eq!(artwork.url, "https://img.example/a.png");
        assert_eq!(artwork.data, PNG_MAGIC.to_vec());
    }

    #[tokio::test]
    async fn test_download_sniffs_when_header_is_generic() {
        let mock = Arc::new(MockTransport::bytes(
            Some("application/octet-stream"),
            PNG_MAGIC.to_vec(),
        ));
        let downloader = ArtworkDownloader::new(mock);

        let artwork = downloader.download("https://img.example/a").await.unwrap();
        assert_eq!(artwork.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_download_not_found() {
        let mock = Arc::new(MockTransport::with_status(404, ""));
        let downloader = ArtworkDownloader::new(mock);

        let result = downloader.download("https://img.example/missing.png").await;
        assert_eq!(result.unwrap_err(), SearchError::NotFound);
    }

    #[tokio::test]
    async fn test_download_empty_body() {
        let mock = Arc::new(MockTransport::bytes(Some("image/png"), vec![]));
        let downloader = ArtworkDownloader::new(mock);

        let result = downloader.download("https://img.example/a.png").await;
        assert!(matches!(result, Err(SearchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_download_rejects_oversized_body() {
        let mock = Arc::new(MockTransport::bytes(
            Some("image/png"),
            vec![0; MAX_BODY_BYTES + 1],
        ));
        let downloader = ArtworkDownloader::new(mock);

        let result = downloader.download("https://img.example/huge.png").await;
        assert_eq!(
            result.unwrap_err(),
            SearchError::TooLarge {
                limit: MAX_BODY_BYTES
            }
        );
    }

    #[test]
    fn test_extension_for() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("application/x-unknown"), "jpg");
    }
}
