//! Catalog error types.

use derive_getters::Getters;

/// Catalog error variants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CatalogErrorKind {
    /// Request failed before any response arrived.
    #[display("catalog request failed: {_0}")]
    Request(String),

    /// The catalog answered with a non-success status.
    #[display("catalog API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or upstream message.
        message: String,
    },

    /// Response arrived but could not be decoded.
    #[display("failed to decode catalog response: {_0}")]
    Decode(String),
}

/// Catalog error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Catalog error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    kind: CatalogErrorKind,
    line: u32,
    file: &'static str,
}

impl CatalogError {
    /// Creates a new error capturing the caller's location.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
