//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which holds the API host, the cache directory, the default report file,
//! and the roster key prefix.
//!
//! Configuration is stored at `~/.config/trueblue/config.json`. Every field
//! is optional and falls back to a built-in default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_BASE_URL;

/// Application name used for the config directory path
const APP_NAME: &str = "trueblue";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Cache directory, relative to the working directory
const DEFAULT_CACHE_DIR: &str = "cache";

const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Prefix that turns a team number into a roster key
pub const DEFAULT_TEAM_PREFIX: &str = "frc";

/// Environment variable overriding `api_base_url`
pub const ENV_API_URL: &str = "TRUEBLUE_API_URL";

/// Environment variable overriding `cache_dir`
pub const ENV_CACHE_DIR: &str = "TRUEBLUE_CACHE_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub output_file: Option<String>,
    pub team_prefix: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply overrides from an environment lookup (normally `std::env::var`)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api_base_url = Some(url);
        }
        if let Some(dir) = lookup(ENV_CACHE_DIR).filter(|v| !v.is_empty()) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }

    pub fn output_file(&self) -> &str {
        self.output_file.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    pub fn team_prefix(&self) -> &str {
        self.team_prefix.as_deref().unwrap_or(DEFAULT_TEAM_PREFIX)
    }

    pub fn run_options(&self, verbose: bool) -> RunOptions {
        RunOptions {
            verbose,
            show_progress: true,
            team_prefix: self.team_prefix().to_string(),
        }
    }
}

/// Settings threaded through each pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Announce cache hits and misses
    pub verbose: bool,
    /// Print percentage notices while fetching
    pub show_progress: bool,
    pub team_prefix: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            show_progress: true,
            team_prefix: DEFAULT_TEAM_PREFIX.to_string(),
        }
    }
}
