//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: Album artwork search and download
//! - `config`: Configuration check

mod config;
mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::artwork::ArtworkSize;
use crate::config::Config;

pub use config::cmd_check_config;
pub use search::{SearchOptions, cmd_search};

/// Album Art Finder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search Last.fm for an album and print its artwork URL
    Search {
        /// Album name (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        album: Vec<String>,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Artwork size: small, medium, large, extralarge
        #[arg(long)]
        size: Option<ArtworkSize>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Download the artwork to this file or directory
        #[arg(short, long)]
        download: Option<PathBuf>,
    },
    /// Show the effective configuration
    CheckConfig {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the GUI should launch).
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Search {
            album,
            api_key,
            size,
            json,
            download,
        }) => {
            let rt = Runtime::new()?;
            let options = SearchOptions {
                album: album.join(" "),
                api_key: api_key.clone(),
                size: *size,
                json: *json,
                download: download.clone(),
            };
            cmd_search(&rt, config, &options)?;
            Ok(true)
        }
        Some(Commands::CheckConfig { init }) => {
            cmd_check_config(config, *init)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
