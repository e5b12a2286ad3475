//! Gemini-backed translation for the Anime Seven tools.
//!
//! Descriptions and titles get translated to Arabic before publishing.
//! Anime titles are translated semantically, not transliterated, which
//! is why the prompt builder carries explicit examples.

mod error;
mod gemini;
mod prompt;

pub use error::{TranslateError, TranslateErrorKind, TranslateResult};
pub use gemini::{
    GeminiClient, GeminiConfig, TranslationRequest, TranslationResponse, GEMINI_API_URL,
};
pub use prompt::{build_translation_prompt, is_probably_anime_title};
