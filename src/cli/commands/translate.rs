use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::credential::{CredentialSource, KeySource};
use crate::translation::{TranslationClient, TranslationRequest, is_known_target};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub word: String,
    pub country: Option<String>,
    pub endpoint: Option<String>,
    pub key_source: Option<KeySource>,
    pub env_file: Option<PathBuf>,
}

/// Why a translate run stopped.
#[derive(Debug)]
pub enum TranslateFailure {
    /// Configuration or credential could not be resolved.
    Setup(anyhow::Error),
    /// The translate call failed (network, status or decode).
    Request(anyhow::Error),
}

impl TranslateFailure {
    /// Logs the failure: FATAL for setup, ERROR for the request.
    pub fn report(&self) {
        match self {
            Self::Setup(e) => crate::fatal!("{e:#}"),
            Self::Request(e) => crate::error!("Error translating word: {e:#}"),
        }
    }
}

impl fmt::Display for TranslateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(e) | Self::Request(e) => write!(f, "{e:#}"),
        }
    }
}

impl std::error::Error for TranslateFailure {}

/// Resolves the credential, translates the word and logs the result.
pub async fn run_translate(options: TranslateOptions) -> Result<String, TranslateFailure> {
    let config = load_merged_config(&options).map_err(TranslateFailure::Setup)?;

    if !is_known_target(&config.target_lang) {
        crate::warn!(
            "Target language '{}' is not a known DeepL code. Proceeding anyway...",
            config.target_lang
        );
    }

    let credential = CredentialSource::new(config.key_source, config.env_file.clone());
    let api_key = credential.resolve().map_err(TranslateFailure::Setup)?;

    let client = TranslationClient::new(config.endpoint.clone(), api_key);
    let request = TranslationRequest::new(options.word, Some(&config.target_lang));

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();

    let translation = result.map_err(TranslateFailure::Request)?;
    crate::info!("Translation: {}", Style::translation(&translation));

    Ok(translation)
}

fn load_merged_config(options: &TranslateOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolve_options = ResolveOptions {
        to: options.country.clone(),
        endpoint: options.endpoint.clone(),
        key_source: options.key_source,
        env_file: options.env_file.clone(),
    };

    let resolved = resolve_config(&resolve_options, &file_config);
    tracing::debug!(
        config_path = %manager.config_path().display(),
        target_lang = %resolved.target_lang,
        key_source = ?resolved.key_source,
        "resolved configuration"
    );

    Ok(resolved)
}
