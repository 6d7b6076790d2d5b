//! Configuration check command.

use crate::config::{self, API_KEY_ENV_VARS, Config};

/// Where the effective API key came from
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeySource {
    Env(&'static str),
    File,
    Missing,
}

fn key_source(
    config: &Config,
    file_config: Option<&Config>,
    lookup: impl Fn(&str) -> Option<String>,
) -> KeySource {
    if config.api_key().is_none() {
        return KeySource::Missing;
    }
    for name in API_KEY_ENV_VARS {
        if lookup(name).is_some_and(|k| !k.trim().is_empty()) {
            return KeySource::Env(name);
        }
    }
    match file_config.and_then(Config::api_key) {
        Some(_) => KeySource::File,
        None => KeySource::Missing,
    }
}

/// Show the config file location, key status and effective search settings.
///
/// With `init`, writes a default config file first if none exists.
pub fn cmd_check_config(config: &Config, init: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    println!("Album Art Finder configuration");
    println!("==============================\n");

    match &path {
        Some(p) if p.exists() => println!("Config file:   {} (found)", p.display()),
        Some(p) if init => {
            config::save(&Config::default())?;
            println!("Config file:   {} (created)", p.display());
        }
        Some(p) => println!("Config file:   {} (not found, using defaults)", p.display()),
        None => println!("Config file:   <no config directory on this platform>"),
    }

    let file_config = path.as_deref().filter(|p| p.exists()).map(config::load_from);
    match key_source(config, file_config.as_ref(), |name| std::env::var(name).ok()) {
        KeySource::Env(name) => println!("API key:       set (from ${})", name),
        KeySource::File => println!("API key:       set (from config file)"),
        KeySource::Missing => {
            println!("API key:       NOT SET");
            println!("               Get a key at: https://www.last.fm/api/account/create");
            println!("               Then set LASTFM_API_KEY or credentials.lastfm_api_key");
        }
    }

    let search = &config.search;
    println!("Endpoint:      {}", search.base_url);
    println!("Timeout:       {}s", search.timeout_secs);
    println!("Artwork size:  {}", search.artwork_size);
    println!("Overlap:       {:?}", search.response_policy);

    if let Err(e) = config.search_config() {
        println!("\n⚠ {}", e);
    }

    Ok(())
}
