//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;

use super::domain::SearchError;
use super::traits::{HttpResponse, HttpTransport};

/// User agent string - Last.fm asks clients to identify themselves
const USER_AGENT: &str = concat!(
    "AlbumArtFinder/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/album-art-finder)"
);

/// Largest response body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// HTTP transport using a shared reqwest client
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a request timeout.
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses
    /// - Send a User-Agent header identifying the application
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, SearchError> {
        // Request URLs carry the API key, so errors are formatted without them
        let mut response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if let Some(length) = response.content_length()
            && length > MAX_BODY_BYTES as u64
        {
            return Err(SearchError::TooLarge {
                limit: MAX_BODY_BYTES,
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SearchError::Network(e.without_url().to_string()))?
        {
            if body.len() + chunk.len() > MAX_BODY_BYTES {
                return Err(SearchError::TooLarge {
                    limit: MAX_BODY_BYTES,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
