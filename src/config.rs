//! Configuration management for FlickTUI
//!
//! Handles config file loading/saving and backend endpoint selection.
//! Config is stored at ~/.config/flicktui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::TimeWindow;

/// Default backend when nothing is configured
const DEFAULT_API_URL: &str = "https://rendaz.vercel.app";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    pub api_base_url: Option<String>,
    /// Bearer token for the backend, if it requires one
    pub api_key: Option<String>,
    /// Trending window shown on startup
    pub time_window: Option<TimeWindow>,
    /// Browser command for opening stream links, overrides $BROWSER
    pub browser: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/flicktui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flicktui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path (the `--config` flag), or return
    /// default if unreadable
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Backend base URL with fallback chain:
    /// 1. Environment variable FLICKTUI_API_URL
    /// 2. Config file value
    /// 3. Bundled default
    pub fn api_base_url(&self) -> String {
        if let Ok(url) = std::env::var("FLICKTUI_API_URL") {
            return url;
        }
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// API key: FLICKTUI_API_KEY overrides the config file; empty when the
    /// backend needs none
    pub fn api_key(&self) -> String {
        if let Ok(key) = std::env::var("FLICKTUI_API_KEY") {
            return key;
        }
        self.api_key.clone().unwrap_or_default()
    }

    /// Browser command: config file value, then $BROWSER
    pub fn browser_command(&self) -> Option<String> {
        self.browser
            .clone()
            .or_else(|| std::env::var("BROWSER").ok())
    }

    pub fn startup_window(&self) -> TimeWindow {
        self.time_window.unwrap_or_default()
    }
}
