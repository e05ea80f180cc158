use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::credential::ApiKey;

/// DeepL free-tier translate endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// Target language used when none is given.
pub const DEFAULT_TARGET_LANG: &str = "FR";

/// Body of a DeepL translate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    pub text: Vec<String>,
    pub target_lang: String,
}

impl TranslationRequest {
    /// Builds a request for one word, upper-casing the target code and
    /// falling back to [`DEFAULT_TARGET_LANG`].
    pub fn new(word: impl Into<String>, target_lang: Option<&str>) -> Self {
        let target_lang = target_lang
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map_or_else(|| DEFAULT_TARGET_LANG.to_string(), str::to_uppercase);

        Self {
            text: vec![word.into()],
            target_lang,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub detected_source_language: String,
    pub text: String,
}

impl TranslationResponse {
    /// Text of the first translation, or an empty string when DeepL
    /// returned none.
    pub fn into_first_text(self) -> String {
        self.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .unwrap_or_default()
    }
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: ApiKey,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: ApiKey) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Sends one translate request and returns the first translated text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        tracing::debug!(
            endpoint = %self.endpoint,
            target_lang = %request.target_lang,
            "sending translate request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.api_key.expose()),
            )
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {}", self.endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        if !status.is_success() {
            anyhow::bail!("API request failed with status {status}: {}", body.trim());
        }

        let decoded: TranslationResponse =
            serde_json::from_str(&body).context("Failed to decode API response")?;

        if let Some(first) = decoded.translations.first() {
            tracing::debug!(
                detected_source_language = %first.detected_source_language,
                "translation received"
            );
        } else {
            tracing::debug!("API returned no translations");
        }

        Ok(decoded.into_first_text())
    }
}
