use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::ApiKey;

/// Env file read when none is configured.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variable holding the DeepL API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// API key read from a local env file.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl Default for EnvFile {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_ENV_FILE))
    }
}

impl EnvFile {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the env file and reads [`API_KEY_VAR`].
    ///
    /// As with `dotenvy::from_path`, a variable already set in the process
    /// environment wins over the file. The file must load either way.
    pub fn resolve(&self) -> Result<ApiKey> {
        let file_value = self.read_file_value()?;

        let process_value = std::env::var(API_KEY_VAR)
            .ok()
            .and_then(|value| ApiKey::parse(&value));

        if let Some(key) = process_value {
            tracing::debug!("using {API_KEY_VAR} from the process environment");
            return Ok(key);
        }

        match file_value.as_deref().and_then(ApiKey::parse) {
            Some(key) => {
                tracing::debug!(path = %self.path.display(), "using {API_KEY_VAR} from env file");
                Ok(key)
            }
            None => bail!(
                "{API_KEY_VAR} is not set in {}",
                self.path.display()
            ),
        }
    }

    fn read_file_value(&self) -> Result<Option<String>> {
        let entries = dotenvy::from_path_iter(&self.path)
            .with_context(|| format!("Error loading env file {}", self.path.display()))?;

        let mut value = None;
        for entry in entries {
            let (name, entry_value) = entry
                .with_context(|| format!("Error loading env file {}", self.path.display()))?;
            if name == API_KEY_VAR {
                value = Some(entry_value);
            }
        }

        Ok(value)
    }
}
