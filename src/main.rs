//! Album Art Finder - look up album artwork on Last.fm.
//!
//! Runs as a GUI application by default. CLI subcommands search from the
//! terminal and check the configuration.

// Hide console window on Windows when running as GUI
// CLI commands will attach to the parent console or allocate one
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

pub mod artwork;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

use clap::Parser;
use iced::application;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::{AlbumArtFinder, Startup};

use artwork::SearchDispatcher;

/// The GUI over the real HTTP transport
type App = AlbumArtFinder;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // If running CLI commands on Windows, attach to console for output
    #[cfg(target_os = "windows")]
    if args.command.is_some() {
        attach_console();
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("album_art_finder=info".parse()?))
        .init();

    // Read once; immutable from here on
    let config = config::load();

    if cli::run_command(&args, &config)? {
        return Ok(());
    }

    let dispatcher = config
        .search_config()
        .map_err(|e| e.to_string())
        .and_then(|c| SearchDispatcher::new(c).map_err(|e| e.to_string()));
    if let Err(warning) = &dispatcher {
        tracing::warn!("Searching disabled: {}", warning);
    }

    let startup = Startup {
        dispatcher,
        policy: config.search.response_policy,
    };

    application("Album Artwork Finder", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| iced::Theme::Dark)
        .window_size((420.0, 720.0))
        .run_with(move || App::new(startup))
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))
}

/// Attach to parent console on Windows for CLI output.
/// This is needed because windows_subsystem = "windows" detaches from console.
#[cfg(target_os = "windows")]
fn attach_console() {
    use windows_sys::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};
    unsafe {
        let _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}
