//! Configuration loader plus strongly typed settings structures.
//!
//! The config lives in `~/.tailrisk-dash/config.toml` (or `$TAILRISK_DASH_DIR`,
//! or `--data-dir`). A commented default is extracted on first run.

use crate::core::navigation::PageId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory
pub const DIR_ENV_VAR: &str = "TAILRISK_DASH_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(skip)] // Set at runtime, used to resolve relative paths
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub initial_page: PageId,
    #[serde(default = "default_theme_name")]
    pub theme: String,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_true")]
    pub show_footer: bool,
    /// Optional "#rrggbb" accent overriding the theme's
    #[serde(default)]
    pub accent: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_page: PageId::default(),
            theme: default_theme_name(),
            sidebar_width: default_sidebar_width(),
            poll_interval_ms: default_poll_interval_ms(),
            show_footer: true,
            accent: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content override file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_sidebar_width() -> u16 {
    30
}

fn default_poll_interval_ms() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from the data directory, extracting defaults on first run.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let base = Self::base_dir(data_dir)?;
        Self::extract_defaults(&base)?;

        let mut config = Self::load_from_path(&Self::config_path(&base))?;
        config.base_dir = Some(base);
        Ok(config)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        if config.ui.sidebar_width < 12 {
            tracing::warn!(
                "sidebar_width {} is too narrow, using 12",
                config.ui.sidebar_width
            );
            config.ui.sidebar_width = 12;
        }
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Resolve the data directory.
    ///
    /// Checks in order: explicit override, `$TAILRISK_DASH_DIR`,
    /// `~/.tailrisk-dash`.
    pub fn base_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            tracing::info!("Using custom data directory: {:?}", dir);
            return Ok(dir.to_path_buf());
        }

        if let Ok(custom_dir) = std::env::var(DIR_ENV_VAR) {
            tracing::info!("Using data directory from {}: {}", DIR_ENV_VAR, custom_dir);
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tailrisk-dash"))
    }

    /// Get path to config.toml inside a data directory
    pub fn config_path(base: &Path) -> PathBuf {
        base.join("config.toml")
    }

    /// Content override file, with relative paths resolved against the
    /// directory the config was loaded from.
    pub fn content_path(&self) -> Option<PathBuf> {
        let path = self.content.path.as_ref()?;
        if path.is_relative() {
            if let Some(base) = &self.base_dir {
                return Some(base.join(path));
            }
        }
        Some(path.clone())
    }

    /// Create the data directory and write config.toml if it is missing
    fn extract_defaults(base: &Path) -> Result<()> {
        fs::create_dir_all(base)
            .context(format!("Failed to create data directory {:?}", base))?;

        let config_path = Self::config_path(base);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted config.toml to {:?}", config_path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("default config parses");
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.content.path, None);
    }

    #[test]
    fn test_defaults_start_on_introduction() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.initial_page, PageId::Introduction);
        assert_eq!(config.ui.theme, "dark");
        assert!(config.ui.show_footer);
    }

    #[test]
    fn test_page_slugs() {
        let config: Config = toml::from_str("[ui]\ninitial_page = \"data-analysis\"").unwrap();
        assert_eq!(config.ui.initial_page, PageId::DataAnalysis);

        let bad: std::result::Result<Config, _> = toml::from_str("[ui]\ninitial_page = \"charts\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_load_extracts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path())).unwrap();

        assert!(dir.path().join("config.toml").exists());
        assert_eq!(config.ui.initial_page, PageId::Introduction);
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_existing_config_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ui]\ninitial_page = \"home\"\nsidebar_width = 4\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path())).unwrap();
        assert_eq!(config.ui.initial_page, PageId::Home);
        assert_eq!(config.ui.sidebar_width, 12);
    }

    #[test]
    fn test_relative_content_path_resolves_against_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[content]\npath = \"my-content.toml\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path())).unwrap();
        assert_eq!(config.content_path(), Some(dir.path().join("my-content.toml")));
    }
}
