//! Configuration for the dashboard.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wordscope_search::SearchConfig;

use crate::error::{Result, WordscopeError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word-association service settings.
    pub search: SearchConfig,
    /// Search history settings.
    pub history: HistoryConfig,
    /// Local session settings.
    pub session: SessionConfig,
}

/// Search history configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of past searches kept, most recent first.
    pub capacity: usize,
    /// Whether history is written to disk after every change.
    pub persist: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            persist: true,
        }
    }
}

/// Local session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lifetime of a session token issued by login, in seconds.
    pub ttl_seconds: u64,
    /// Lifetime when "remember me" is requested, in seconds.
    pub remember_me_ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 60 * 60,
            remember_me_ttl_seconds: 30 * 24 * 60 * 60,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| WordscopeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_file`] when the file exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| WordscopeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> PathBuf {
        crate::wordscope_dirs::config_file()
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`WordscopeError::Config`] or a search config error.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        if self.history.capacity == 0 {
            return Err(WordscopeError::Config(
                "history.capacity must be greater than 0".into(),
            ));
        }
        if self.session.ttl_seconds == 0 || self.session.remember_me_ttl_seconds == 0 {
            return Err(WordscopeError::Config(
                "session ttl values must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
