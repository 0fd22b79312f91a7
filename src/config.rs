//! Configuration management for Marquee
//!
//! Handles config file loading and API key resolution.
//! Config is stored at ~/.config/marquee/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::tmdb::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::api::TmdbClient;
use crate::models::{ImageBase, IMAGE_BASE_URL, PLACEHOLDER_IMAGE};

/// Environment variable holding the TMDB API key
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB v3 API key
    pub api_key: Option<String>,
    /// TMDB API root
    pub base_url: String,
    /// Image CDN root that poster/profile paths are appended to
    pub image_base_url: String,
    /// Image used when a movie or person has no picture
    pub placeholder_image: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Log filter directive (e.g. "info", "marquee=debug")
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: IMAGE_BASE_URL.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            log_level: None,
        }
    }
}

impl Config {
    /// Get config file path (~/.config/marquee/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("marquee").join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path; a missing or invalid file is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Explicit path if given, otherwise the default location
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::load()),
        }
    }

    /// Get TMDB API key with fallback chain:
    /// 1. `--api-key` flag
    /// 2. Environment variable TMDB_API_KEY
    /// 3. Key from config file
    pub fn api_key(&self, flag: Option<&str>) -> Result<String> {
        resolve_api_key(flag, std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn images(&self) -> ImageBase {
        ImageBase::new(&self.image_base_url, &self.placeholder_image)
    }

    /// Build a TMDB client from this config
    pub fn tmdb_client(&self, api_key: impl Into<String>) -> TmdbClient {
        TmdbClient::with_base_url(api_key, &self.base_url).with_timeout(self.timeout())
    }
}

fn resolve_api_key(flag: Option<&str>, env: Option<String>, file: Option<&str>) -> Result<String> {
    flag.map(str::to_string)
        .or(env)
        .or_else(|| file.map(str::to_string))
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No TMDB API key. Pass --api-key, set {} or add api_key to {}",
                API_KEY_ENV,
                config_path_display()
            )
        })
}

fn config_path_display() -> String {
    Config::path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "the config file".to_string())
}
