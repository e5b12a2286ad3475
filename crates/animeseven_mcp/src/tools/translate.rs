//! Translation tool for MCP.

use crate::tools::{optional_str, required_str, McpTool};
use crate::{McpError, McpResult};
use animeseven_translate::{GeminiClient, TranslationRequest};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// Tool translating a text into a target language.
pub struct TranslateTextTool {
    translator: Arc<GeminiClient>,
}

impl TranslateTextTool {
    /// Creates the tool over an injected translation client.
    pub fn new(translator: Arc<GeminiClient>) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl McpTool for TranslateTextTool {
    fn name(&self) -> &str {
        "translateText"
    }

    fn description(&self) -> &str {
        "Translate a text into a target language. Anime titles are translated \
         semantically rather than transliterated."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to translate"
                },
                "targetLanguage": {
                    "type": "string",
                    "description": "Target language (e.g. 'Arabic', 'English', 'French')"
                },
                "sourceLanguage": {
                    "type": "string",
                    "description": "Source language (optional; auto-detected when absent)"
                },
                "isAnimeTitle": {
                    "type": "boolean",
                    "description": "Whether the text is an anime title, for a semantic \
                                    translation rather than a transliteration (default: auto-detected)"
                }
            },
            "required": ["text", "targetLanguage"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let request = TranslationRequest {
            text: required_str(&input, "text")?.to_string(),
            target_language: required_str(&input, "targetLanguage")?.to_string(),
            source_language: optional_str(&input, "sourceLanguage"),
            is_anime_title: input.get("isAnimeTitle").and_then(Value::as_bool),
        };

        let response = self.translator.translate(&request).await?;
        serde_json::to_value(response).map_err(|e| McpError::InternalError(e.to_string()))
    }
}
