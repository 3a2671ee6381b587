//! src/config/config.rs
//! ============================================================================
//! # Config: Persisted Client State
//!
//! Session state that survives restarts: search-root path history, theme
//! choice, sidebar collapsed flag, preview panel width. Loaded once at
//! startup to restore the prior session, written on each relevant user
//! action. None of it is part of the correctness
//! contract; defaults apply whenever the file is missing or unreadable.
//!
//! Stored as TOML at the XDG-compliant config path via
//! [`directories`](https://docs.rs/directories), async load/save through
//! tokio for smooth integration with the event loop.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the search server.
    pub server_url: String,
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    /// Preview panel width in columns (kept for the host page's panel; the
    /// core only persists it).
    pub preview_width: u16,
    /// Previously used search roots, oldest first, no duplicates.
    pub path_history: Vec<String>,
    /// Quiet period after the last keystroke before a search dispatches.
    #[serde(with = "humantime_serde")]
    pub debounce_delay: Duration,
    /// Delay between visual hide and removal of transient UI elements.
    #[serde(with = "humantime_serde")]
    pub transition_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: "http://127.0.0.1:5000".to_string(),
            theme: Theme::default(),
            sidebar_collapsed: false,
            preview_width: 40,
            path_history: Vec::new(),
            debounce_delay: Duration::from_millis(300),
            transition_delay: Duration::from_millis(300),
        }
    }
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults when no file exists.
    pub async fn load() -> anyhow::Result<Self> {
        let path: PathBuf = Self::config_path()?;
        if path.exists() {
            let text: String = tokio::fs::read_to_string(&path).await?;
            let cfg: Config = toml::from_str(&text)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path: PathBuf = Self::config_path()?;
        self.save_to(&path).await
    }

    /// Saves to an explicit path (also used by tests).
    pub async fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let toml_str: String = toml::to_string_pretty(self)?;
        tokio::fs::write(path, toml_str).await?;
        Ok(())
    }

    /// Record a search root, most recent last, dropping any earlier duplicate.
    pub fn remember_path(&mut self, path: &str) {
        self.path_history.retain(|p| p != path);
        self.path_history.push(path.to_string());
        if self.path_history.len() > 32 {
            self.path_history.remove(0);
        }
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs: ProjectDirs = ProjectDirs::from("org", "fastique", "fastique-tui")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.theme = Theme::Light;
        cfg.sidebar_collapsed = true;
        cfg.preview_width = 55;
        cfg.remember_path("/srv/docs");
        cfg.save_to(&path).await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        let loaded: Config = toml::from_str(&text).unwrap();

        assert_eq!(loaded.theme, Theme::Light);
        assert!(loaded.sidebar_collapsed);
        assert_eq!(loaded.preview_width, 55);
        assert_eq!(loaded.path_history, vec!["/srv/docs".to_string()]);
    }

    #[test]
    fn remember_path_deduplicates_and_reorders() {
        let mut cfg = Config::default();
        cfg.remember_path("/a");
        cfg.remember_path("/b");
        cfg.remember_path("/a");

        assert_eq!(cfg.path_history, vec!["/b".to_string(), "/a".to_string()]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.debounce_delay, Duration::from_millis(300));
        assert!(!cfg.sidebar_collapsed);
    }
}
