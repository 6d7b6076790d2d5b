//! Transport trait for outbound HTTP.
//!
//! The Last.fm client and the artwork downloader only ever issue GETs, so the
//! seam is a single method. Production code uses [`ReqwestTransport`], tests
//! substitute [`mocks::MockTransport`] to script responses and failures.
//!
//! # Example
//!
//! ```ignore
//! use album_art_finder::artwork::traits::HttpTransport;
//!
//! async fn fetch<T: HttpTransport>(transport: &T) -> Result<(), SearchError> {
//!     let response = transport.get("https://example.com").await?;
//!     println!("{} bytes", response.body.len());
//!     Ok(())
//! }
//! ```
//!
//! [`ReqwestTransport`]: super::http::ReqwestTransport

use async_trait::async_trait;

use super::domain::SearchError;

/// A completed HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Value of the Content-Type header, if sent
    pub content_type: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing HTTP GET requests.
///
/// Implementations return `Err(SearchError::Network)` when the request could
/// not complete at all. Non-2xx responses are returned as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch a URL.
    async fn get(&self, url: &str) -> Result<HttpResponse, SearchError>;
}
