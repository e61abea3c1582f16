//! Centralized application directory paths for wordscope.
//!
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | App data | `~/Library/Application Support/wordscope/` | `~/.local/share/wordscope/` |
//! | Config | `~/Library/Application Support/wordscope/` | `~/.config/wordscope/` |
//!
//! # Environment Overrides
//!
//! - `WORDSCOPE_DATA_DIR`: overrides [`data_dir`]
//! - `WORDSCOPE_CONFIG_DIR`: overrides [`config_dir`]

use std::path::PathBuf;

/// Application data root directory: local storage and search history.
///
/// Resolves to `dirs::data_dir()/wordscope/` by default. Override with
/// the `WORDSCOPE_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("WORDSCOPE_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("wordscope"))
        .unwrap_or_else(|| PathBuf::from("/tmp/wordscope-data"))
}

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/wordscope/` by default. Override with
/// the `WORDSCOPE_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("WORDSCOPE_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("wordscope"))
        .unwrap_or_else(|| PathBuf::from("/tmp/wordscope-config"))
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Local key/value storage file (`data_dir()/storage.json`). Holds the
/// session credential.
#[must_use]
pub fn storage_file() -> PathBuf {
    data_dir().join("storage.json")
}

/// Persisted search history (`data_dir()/history.json`).
#[must_use]
pub fn history_file() -> PathBuf {
    data_dir().join("history.json")
}
