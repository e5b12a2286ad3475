//! Gemini generateContent client.

use crate::error::{TranslateError, TranslateErrorKind, TranslateResult};
use crate::prompt::build_translation_prompt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

/// Gemini generateContent endpoint used for translations.
pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Translation endpoint configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, forwarded as the `key` query parameter.
    pub api_key: String,
    /// generateContent endpoint URL. Overridable for tests.
    pub endpoint: String,
}

impl GeminiConfig {
    /// Creates a config against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: GEMINI_API_URL.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY` from the environment. A missing key logs a
    /// warning but does not fail; translation calls fail per call.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("GEMINI_API_KEY is not set; translation will fail");
        }
        Self {
            api_key,
            endpoint: GEMINI_API_URL.to_string(),
        }
    }
}

/// One translation request.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate.
    pub text: String,
    /// Target language ("Arabic", "ar", "French", ...).
    pub target_language: String,
    /// Source language; auto-detected when absent.
    pub source_language: Option<String>,
    /// Anime-title mode; auto-detected when absent.
    pub is_anime_title: Option<bool>,
}

/// One translation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// The translated text.
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    /// Detected source language, when the source was not specified.
    #[serde(
        rename = "detectedLanguage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub detected_language: Option<String>,
}

/// Translation client over the Gemini generateContent API.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Translates a text.
    #[instrument(skip(self, request), fields(target = %request.target_language))]
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> TranslateResult<TranslationResponse> {
        if self.config.api_key.is_empty() {
            return Err(TranslateError::new(TranslateErrorKind::MissingApiKey));
        }
        if request.text.is_empty() {
            return Err(TranslateError::new(TranslateErrorKind::MissingField("text")));
        }
        if request.target_language.is_empty() {
            return Err(TranslateError::new(TranslateErrorKind::MissingField(
                "targetLanguage",
            )));
        }

        let prompt = build_translation_prompt(
            &request.text,
            &request.target_language,
            request.source_language.as_deref(),
            request.is_anime_title,
        );
        debug!(prompt_len = prompt.len(), "sending translation request");

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "temperature": 0.2,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 8192,
                "responseMimeType": "application/json"
            }
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslateError::new(TranslateErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::new(TranslateErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::new(TranslateErrorKind::InvalidResponse(e.to_string())))?;

        parse_response(&value)
    }
}

/// Extracts the translation from a generateContent response.
///
/// The model is asked for a JSON answer; when it answers with anything
/// else, the whole candidate text is taken as the translation.
fn parse_response(value: &Value) -> TranslateResult<TranslationResponse> {
    let text = value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            TranslateError::new(TranslateErrorKind::InvalidResponse(
                "response carried no candidate text".to_string(),
            ))
        })?;

    Ok(
        serde_json::from_str::<TranslationResponse>(text).unwrap_or_else(|_| {
            TranslationResponse {
                translated_text: text.to_string(),
                detected_language: None,
            }
        }),
    )
}
