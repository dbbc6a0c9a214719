//! Configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (applied by the binary, highest priority)
//! 2. Environment variable (`GAMEDB_*`)
//! 3. TOML config file (`--config` path, or `gamedb.toml` in the working directory)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE: &str = "gamedb.db";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_CONFIG_FILE: &str = "gamedb.toml";

/// Fixed top-100 feed endpoints (externally-owned contract)
pub const DEFAULT_IOS_FEED_URL: &str =
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/ios.top100.json";
pub const DEFAULT_ANDROID_FEED_URL: &str =
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/android.top100.json";

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind host for the HTTP listener
    pub host: String,
    /// Bind port for the HTTP listener
    pub port: u16,
    /// Path to the SQLite database file
    pub database: PathBuf,
    /// Directory of static assets served at the site root
    pub static_dir: PathBuf,
    /// iOS top-apps feed URL
    pub ios_feed_url: String,
    /// Android top-apps feed URL
    pub android_feed_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: PathBuf::from(DEFAULT_DATABASE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            ios_feed_url: DEFAULT_IOS_FEED_URL.to_string(),
            android_feed_url: DEFAULT_ANDROID_FEED_URL.to_string(),
        }
    }
}

/// On-disk TOML schema; every field optional so partial files are valid
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub ios_feed_url: Option<String>,
    pub android_feed_url: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML config file. A malformed file is a hard error; a missing
    /// file is not (the caller falls back to defaults).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid config file {}: {}", path.display(), e)))
    }
}

impl ServiceConfig {
    /// Resolve configuration from file, environment, and defaults.
    ///
    /// `config_path` is the explicit `--config` argument; when `None`,
    /// `gamedb.toml` in the working directory is used if it exists.
    /// Command-line overrides are applied by the binary after this returns.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        // Tier 3: TOML file
        let file = match config_path {
            Some(path) => Some(TomlConfig::load(path)?),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(TomlConfig::load(&default_path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file) = file {
            info!("Loaded config file");
            if let Some(host) = file.host {
                config.host = host;
            }
            if let Some(port) = file.port {
                config.port = port;
            }
            if let Some(database) = file.database {
                config.database = database;
            }
            if let Some(static_dir) = file.static_dir {
                config.static_dir = static_dir;
            }
            if let Some(url) = file.ios_feed_url {
                config.ios_feed_url = url;
            }
            if let Some(url) = file.android_feed_url {
                config.android_feed_url = url;
            }
        }

        // Tier 2: environment variables
        if let Ok(host) = std::env::var("GAMEDB_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("GAMEDB_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid GAMEDB_PORT value: {}", port),
            }
        }
        if let Ok(database) = std::env::var("GAMEDB_DATABASE") {
            config.database = PathBuf::from(database);
        }
        if let Ok(static_dir) = std::env::var("GAMEDB_STATIC_DIR") {
            config.static_dir = PathBuf::from(static_dir);
        }
        if let Ok(url) = std::env::var("GAMEDB_IOS_FEED_URL") {
            config.ios_feed_url = url;
        }
        if let Ok(url) = std::env::var("GAMEDB_ANDROID_FEED_URL") {
            config.android_feed_url = url;
        }

        Ok(config)
    }
}
