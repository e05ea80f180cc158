//! Path utilities for the configuration directory and the cached API key.
//!
//! The configuration directory follows XDG conventions. The key cache lives
//! in the system temp directory so it never lands in a dotfiles repo.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name of the cached DeepL API key inside the temp directory.
pub const API_KEY_FILE_NAME: &str = "deepl-api-key";

/// Environment variable overriding the cached key location.
pub const API_KEY_FILE_ENV: &str = "TRAD_KEY_FILE";

/// Returns the configuration directory for trad.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/trad` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/trad` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("trad")),
        _ => Ok(home_dir()?.join(".config").join("trad")),
    }
}

/// Returns where the API key is cached.
///
/// `$TRAD_KEY_FILE` wins when set, otherwise `<tempdir>/deepl-api-key`.
pub fn api_key_path() -> PathBuf {
    match std::env::var(API_KEY_FILE_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join(API_KEY_FILE_NAME),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
