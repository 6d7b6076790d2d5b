//! Last.fm integration
//!
//! Searches albums by name via the `album.search` method and picks the
//! first match's artwork. Requires an API key.
//!
//! API docs: https://www.last.fm/api

pub mod dto;
mod adapter;
mod client;

pub use adapter::{select_artwork, to_album_artwork};
pub use client::{DEFAULT_BASE_URL, LastFmClient, build_search_url};
