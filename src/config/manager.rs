use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::credential::KeySource;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_TARGET_LANG};

/// Default settings in the `[trad]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradConfig {
    /// Default target language code (e.g. "DE").
    pub to: Option<String>,
    /// Translate endpoint, e.g. the DeepL Pro URL.
    pub endpoint: Option<String>,
    /// Where the API key comes from.
    pub key_source: Option<KeySource>,
    /// Env file read by the `env` key source.
    pub env_file: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/trad/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub trad: TradConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Upper-cased target language code.
    pub target_lang: String,
    pub endpoint: String,
    pub key_source: KeySource,
    pub env_file: Option<PathBuf>,
}

/// CLI (and environment) overrides that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub key_source: Option<KeySource>,
    pub env_file: Option<PathBuf>,
}

/// Merges CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults
/// (`FR`, the DeepL free endpoint, the file key source).
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let target_lang = options
        .to
        .as_deref()
        .or(config_file.trad.to.as_deref())
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(DEFAULT_TARGET_LANG)
        .to_uppercase();

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.trad.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let key_source = options
        .key_source
        .or(config_file.trad.key_source)
        .unwrap_or_default();

    let env_file = options
        .env_file
        .as_ref()
        .or(config_file.trad.env_file.as_ref())
        .cloned();

    ResolvedConfig {
        target_lang,
        endpoint,
        key_source,
        env_file,
    }
}

/// Loads the optional configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/trad/config.toml`
    /// or `~/.config/trad/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Reads the file. A missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConfigFile::default()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file: {}", self.config_path.display())
                });
            }
        };

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Like [`Self::load`], but a broken file only produces a warning.
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_else(|e| {
            crate::warn!("{e:#}. Using built-in defaults.");
            ConfigFile::default()
        })
    }
}
