//! Album artwork search command.

use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::artwork::download::extension_for;
use crate::artwork::{Artwork, ArtworkSize, ImageResult, SearchDispatcher};
use crate::config::Config;
use crate::error::{self, ResultExt};

/// Options for `search`
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub album: String,
    pub api_key: Option<String>,
    pub size: Option<ArtworkSize>,
    pub json: bool,
    pub download: Option<PathBuf>,
}

/// Search for an album and print (and optionally download) its artwork
pub fn cmd_search(rt: &Runtime, config: &Config, options: &SearchOptions) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(key) = &options.api_key {
        config.credentials.lastfm_api_key = Some(key.clone());
    }
    if let Some(size) = options.size {
        config.search.artwork_size = size;
    }

    let search_config = match config.search_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Get a key at: https://www.last.fm/api/account/create");
            eprintln!("Then use: --api-key YOUR_KEY or set LASTFM_API_KEY env var");
            return Err(e.into());
        }
    };
    let dispatcher = SearchDispatcher::new(search_config)?;

    rt.block_on(async {
        let lookup = dispatcher.lookup(&options.album).await;

        let found_url = match &lookup {
            Ok(Some(artwork)) => Some(artwork.image_url.clone()),
            _ => None,
        };

        if options.json {
            let result = ImageResult::from(lookup);
            println!("{}", serde_json::to_string_pretty(&result)?);
            if let ImageResult::Error { message } = result {
                anyhow::bail!("Search failed: {}", message);
            }
        } else {
            match lookup {
                Ok(Some(artwork)) => {
                    println!(
                        "✓ {} - {}",
                        artwork.artist.as_deref().unwrap_or("Unknown artist"),
                        artwork.album.as_deref().unwrap_or("Unknown album")
                    );
                    println!("  Artwork ({}): {}", artwork.size, artwork.image_url);
                    if let Some(page) = &artwork.page_url {
                        println!("  Last.fm: {}", page);
                    }
                }
                Ok(None) => {
                    println!("✗ No artwork found for \"{}\"", options.album);
                }
                Err(e) => {
                    anyhow::bail!("Search failed: {}", e);
                }
            }
        }

        if let (Some(target), Some(url)) = (&options.download, found_url) {
            let artwork = dispatcher
                .download_artwork(&url)
                .await
                .with_context(format!("downloading {}", url))?;
            let path = save_artwork(target, &artwork)?;
            eprintln!(
                "✓ Saved {} bytes ({}) to {}",
                artwork.data.len(),
                artwork.mime_type,
                path.display()
            );
        }

        Ok::<(), anyhow::Error>(())
    })
}

/// Write artwork to `target`.
///
/// A directory target gets `cover.<ext>` inside it. A file target without an
/// extension gets one from the MIME type.
pub fn save_artwork(target: &Path, artwork: &Artwork) -> error::Result<PathBuf> {
    let ext = extension_for(&artwork.mime_type);

    let path = if target.is_dir() {
        target.join(format!("cover.{}", ext))
    } else if target.extension().is_none() {
        target.with_extension(ext)
    } else {
        target.to_path_buf()
    };

    if path.file_name().is_none() {
        return Err(error::Error::invalid_path(target));
    }

    std::fs::write(&path, &artwork.data).with_context(format!("writing {}", path.display()))?;
    Ok(path)
}
