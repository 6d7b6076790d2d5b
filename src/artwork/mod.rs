//! Album artwork search - finds cover art for an album name.
//!
//! # Architecture
//!
//! Same separation as the rest of the codebase:
//! - **Domain models** (`domain.rs`) - Internal types (`ImageResult`, `AlbumArtwork`, `SearchError`)
//! - **API DTOs** (`lastfm/dto.rs`) - Exact Last.fm response shapes
//! - **Adapter** (`lastfm/adapter.rs`) - Converts DTOs to domain models
//! - **Transport** (`traits.rs`, `http.rs`) - HTTP seam, mockable in tests
//! - **Service** (`service.rs`) - The search dispatcher used by the UI and CLI
//!
//! # Usage
//!
//! ```ignore
//! use artwork::{SearchConfig, SearchDispatcher};
//!
//! let config = SearchConfig {
//!     api_key: "your-api-key".to_string(),
//!     ..Default::default()
//! };
//! let dispatcher = SearchDispatcher::new(config)?;
//!
//! match dispatcher.search("Discovery").await {
//!     ImageResult::Found { url } => println!("Artwork: {}", url),
//!     ImageResult::NotFound => println!("No artwork"),
//!     ImageResult::Error { message } => eprintln!("Search failed: {}", message),
//! }
//! ```

pub mod domain;
pub mod download;
pub mod http;
pub mod lastfm;
pub mod service;
pub mod traits;

pub use domain::{AlbumArtwork, Artwork, ArtworkSize, ImageResult, SearchError};
pub use service::{SearchConfig, SearchDispatcher};
