//! Translation error types.

use derive_getters::Getters;

/// Translation error variants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TranslateErrorKind {
    /// API key not configured.
    #[display("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// A required request field is empty.
    #[display("missing required field: {_0}")]
    MissingField(&'static str),

    /// Request failed before any response arrived.
    #[display("translation request failed: {_0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[display("translation API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or upstream message.
        message: String,
    },

    /// The response did not carry a usable candidate.
    #[display("translation API response is invalid: {_0}")]
    InvalidResponse(String),
}

impl TranslateErrorKind {
    /// True when the failure is caller-supplied data violating a
    /// contract rather than a remote failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            TranslateErrorKind::MissingApiKey | TranslateErrorKind::MissingField(_)
        )
    }
}

/// Translation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Translation error: {} at line {} in {}", kind, line, file)]
pub struct TranslateError {
    kind: TranslateErrorKind,
    line: u32,
    file: &'static str,
}

impl TranslateError {
    /// Creates a new error capturing the caller's location.
    #[track_caller]
    pub fn new(kind: TranslateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
