//! Configuration management for agidash
//!
//! The navigation menu is configuration, not markup: each sidebar entry is
//! a [`NavEntry`] with an enabled flag, so sections can be turned on or off
//! without code changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::oauth::OauthConfig;
use crate::paths;

/// What activating a navigation entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    /// Toggle the section in and out of the active selection.
    Toggle,
    /// Hand the browser off to the OAuth authorization page.
    Authorize,
}

/// One entry in the sidebar navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Stable identifier reported to selection listeners.
    pub id: String,

    /// Label shown in the sidebar.
    pub label: String,

    /// Short glyph shown before the label.
    #[serde(default)]
    pub icon: String,

    /// Click behavior for this entry.
    #[serde(default = "default_nav_action")]
    pub action: NavAction,

    /// Disabled entries stay in the config but are never rendered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl NavEntry {
    /// Convenience constructor for an enabled toggle entry.
    #[must_use]
    pub fn toggle(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            action: NavAction::Toggle,
            enabled: true,
        }
    }
}

const fn default_nav_action() -> NavAction {
    NavAction::Toggle
}

const fn default_enabled() -> bool {
    true
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Poll interval in milliseconds for the TUI event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Sidebar navigation entries, in display order
    #[serde(default = "default_nav")]
    pub nav: Vec<NavEntry>,

    /// OAuth settings used by `authorize` entries
    #[serde(default)]
    pub oauth: OauthConfig,
}

const fn default_poll_interval() -> u64 {
    100
}

fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::toggle("agents", "Agents", "\u{25c9}"),
        NavEntry::toggle("tools", "Tools", "\u{2692}"),
        NavEntry {
            id: "twitter".to_string(),
            label: "Twitter".to_string(),
            icon: "@".to_string(),
            action: NavAction::Authorize,
            enabled: true,
        },
        NavEntry {
            enabled: false,
            ..NavEntry::toggle("apm", "APM", "\u{21af}")
        },
        NavEntry {
            enabled: false,
            ..NavEntry::toggle("embeddings", "Embeddings", "\u{224b}")
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            nav: default_nav(),
            oauth: OauthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Default config file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir().join("config.json")
    }

    /// Navigation entries that should actually render, in display order.
    #[must_use]
    pub fn enabled_nav(&self) -> Vec<&NavEntry> {
        self.nav.iter().filter(|entry| entry.enabled).collect()
    }
}
