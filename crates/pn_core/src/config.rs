//! Service configuration.
//!
//! Loaded from an optional TOML file; every section has defaults so a
//! partial file (or none at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// JSON array of articles loaded at startup
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub headlines: HeadlinesConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:5000")
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_per_page")]
    pub default_per_page: usize,
    #[serde(default = "default_max_per_page")]
    pub max_per_page: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeadlinesConfig {
    #[serde(default = "default_headlines_per_page")]
    pub default_per_page: usize,
}

/// Settings for fetching full article bodies from the source site
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("articles_combined.json")
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_search_per_page() -> usize {
    20
}

fn default_max_per_page() -> usize {
    100
}

fn default_headlines_per_page() -> usize {
    50
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            server: ServerConfig::default(),
            search: SearchConfig::default(),
            headlines: HeadlinesConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_search_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

impl Default for HeadlinesConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_headlines_per_page(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_per_page == 0 {
            return Err(Error::Config("search.max_per_page must be positive".to_string()));
        }
        if self.search.default_per_page == 0 || self.headlines.default_per_page == 0 {
            return Err(Error::Config("default_per_page must be positive".to_string()));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::Config("fetch.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}
