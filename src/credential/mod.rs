//! API credential resolution.
//!
//! A credential comes from one of two sources, picked by configuration:
//!
//! - [`FileCache`]: a plaintext key cached in the temp directory, prompted
//!   for and saved on first use.
//! - [`EnvFile`]: the `API_KEY` variable of a local `.env` file.

mod env_file;
mod file_cache;

use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

pub use env_file::{API_KEY_VAR, DEFAULT_ENV_FILE, EnvFile};
pub use file_cache::{FileCache, PROMPT_MESSAGE};

/// A non-empty DeepL API key.
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trims `raw` and returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The secret itself, for the authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Which credential source to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySource {
    /// Key cached in the temp directory, prompted for when missing.
    #[default]
    File,
    /// `API_KEY` from a local env file.
    Env,
}

/// A configured credential provider.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    FileCache(FileCache),
    EnvFile(EnvFile),
}

impl CredentialSource {
    /// Builds the provider for `source`. `env_file` only matters for
    /// [`KeySource::Env`].
    pub fn new(source: KeySource, env_file: Option<PathBuf>) -> Self {
        match source {
            KeySource::File => Self::FileCache(FileCache::default()),
            KeySource::Env => Self::EnvFile(
                env_file.map_or_else(EnvFile::default, EnvFile::new),
            ),
        }
    }

    /// Produces the API key or fails.
    pub fn resolve(&self) -> Result<ApiKey> {
        match self {
            Self::FileCache(cache) => cache.resolve(),
            Self::EnvFile(env) => env.resolve(),
        }
    }
}
