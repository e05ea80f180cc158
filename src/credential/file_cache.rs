use anyhow::{Context, Result, anyhow, bail};
use inquire::{Password, PasswordDisplayMode};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use super::ApiKey;
use crate::paths;
use crate::ui::is_prompt_cancelled;

/// Question asked when no key is cached yet.
pub const PROMPT_MESSAGE: &str = "No API key found. Please enter your DeepL API key:";

/// API key cached as a plaintext, owner-only file.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl Default for FileCache {
    fn default() -> Self {
        Self::new(paths::api_key_path())
    }
}

impl FileCache {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached key. Any read failure counts as "no key yet".
    pub fn read(&self) -> Option<ApiKey> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => ApiKey::parse(&contents),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no cached API key");
                None
            }
        }
    }

    /// Persists `key` with mode `0600`.
    pub fn save(&self, key: &ApiKey) -> Result<()> {
        crate::fs::write_private(&self.path, key.expose())
            .with_context(|| format!("Error saving API key to {}", self.path.display()))
    }

    /// Returns the cached key, prompting on the terminal when there is none.
    pub fn resolve(&self) -> Result<ApiKey> {
        self.resolve_with(prompt_for_key)
    }

    /// Like [`Self::resolve`] but with a custom source for the typed key.
    pub fn resolve_with<F>(&self, prompt: F) -> Result<ApiKey>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(key) = self.read() {
            tracing::debug!(path = %self.path.display(), "using cached API key");
            return Ok(key);
        }

        let input = prompt().context("Error reading API key")?;
        let Some(key) = ApiKey::parse(&input) else {
            bail!("Error reading API key: input is empty");
        };

        self.save(&key)?;
        crate::info!("API key saved");

        Ok(key)
    }
}

fn prompt_for_key() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!("stdin is not a terminal, cannot prompt for the API key");
    }

    Password::new(PROMPT_MESSAGE)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .map_err(|e| {
            if is_prompt_cancelled(&e) {
                anyhow!("API key prompt cancelled")
            } else {
                anyhow!(e)
            }
        })
}
