use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{DEFAULT_IMAGE_BASE_URL, DEFAULT_POSTER_SIZE};
use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::ReelError;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "REELCTL_CONFIG";

/// Client configuration, read from ~/.reelctl/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub pagination: PaginationConfig,
    pub search: SearchConfig,
    pub images: ImagesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub favorites_per_page: usize,
    pub comments_per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub base_url: String,
    pub poster_size: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            favorites_per_page: 8,
            comments_per_page: 5,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            poster_size: DEFAULT_POSTER_SIZE.to_string(),
        }
    }
}

impl PaginationConfig {
    pub fn favorites_page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.favorites_per_page).ok_or_else(|| {
            ReelError::config("pagination.favorites_per_page must be at least 1").into()
        })
    }

    pub fn comments_page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.comments_per_page).ok_or_else(|| {
            ReelError::config("pagination.comments_per_page must be at least 1").into()
        })
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl ReelConfig {
    /// Load config from the default location.
    ///
    /// A missing file is not an error: defaults apply until `reelctl config init`.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let config: Self =
            toml::from_str(&content).context("Failed to parse config file (invalid TOML)")?;

        config.validate()?;
        Ok(config)
    }

    /// Get config file path: $REELCTL_CONFIG or ~/.reelctl/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".reelctl/config.toml")
    }

    /// Reject values the pagination layer cannot work with
    pub fn validate(&self) -> Result<()> {
        self.pagination.favorites_page_size()?;
        self.pagination.comments_page_size()?;
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, toml_str)
            .context(format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}
