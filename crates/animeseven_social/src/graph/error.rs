//! Graph API error types.
//!
//! Platform failures keep the remote error's structured fields so the
//! update workflow can classify them, and so operator-facing messages can
//! be rewritten for the error codes that come up in practice.

use animeseven_core::VideoUrlError;
use derive_getters::Getters;

fn fmt_code(code: &Option<i64>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

/// Graph API error variants.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum GraphErrorKind {
    /// Structured error returned by the platform.
    #[display("Facebook API error ({}): {}", fmt_code(code), message)]
    Api {
        /// Platform error code, when the response carried one.
        code: Option<i64>,
        /// Platform error message.
        message: String,
        /// Platform error type label.
        error_type: Option<String>,
        /// Platform trace id, useful when filing support reports.
        fbtrace_id: Option<String>,
    },

    /// Request failed before a structured platform error was available
    /// (connection error, non-JSON error body, ...).
    #[display("Facebook API request failed: {_0}")]
    Request(String),

    /// Response arrived but could not be decoded into the expected shape.
    #[display("failed to decode Facebook response: {_0}")]
    Decode(String),

    /// A payload could not be serialized for sending.
    #[display("failed to encode payload: {_0}")]
    Encode(String),

    /// A required credential is empty.
    #[display("missing credential: {_0} is not configured")]
    MissingCredential(&'static str),

    /// The cover image URL did not resolve to an image resource.
    #[display("URL does not point to a valid image (content type: {_0})")]
    InvalidImage(String),

    /// An episode server URL failed permalink validation.
    #[display("{_0}")]
    InvalidVideoUrl(VideoUrlError),

    /// The update text must be a JSON-encoded anime record when the
    /// target is an anime post under migration.
    #[display("update message must be JSON-encoded anime data for anime posts: {_0}")]
    InvalidUpdatePayload(String),

    /// The post is photo-backed, carries no episode comments, and cannot
    /// be updated through the API at all.
    #[display(
        "this photo-backed post cannot be updated through the API; \
         delete the existing post and create a new one"
    )]
    PhotoPostNotEditable,

    /// Transient image file could not be written or read.
    #[display("temporary image file error: {_0}")]
    Io(String),
}

impl GraphErrorKind {
    /// True when the failure is caller-supplied data violating a
    /// contract, as opposed to a remote or internal failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            GraphErrorKind::MissingCredential(_)
                | GraphErrorKind::InvalidImage(_)
                | GraphErrorKind::InvalidVideoUrl(_)
                | GraphErrorKind::InvalidUpdatePayload(_)
        )
    }

    /// Operator-facing message. Known platform error codes are rewritten
    /// into actionable guidance; everything else keeps the original code
    /// and text.
    pub fn guidance(&self) -> String {
        match self {
            GraphErrorKind::Api {
                code: Some(3),
                ..
            } => "Facebook API error: the application lacks the permissions required for this \
                  operation. Required permissions: 'publish_pages' and 'manage_pages'."
                .to_string(),
            GraphErrorKind::Api {
                code: Some(190),
                ..
            } => "Facebook API error: the access token has expired or is invalid. Generate a \
                  new access token."
                .to_string(),
            GraphErrorKind::Api {
                code: Some(100),
                message,
                ..
            } => format!(
                "Facebook API error: invalid or missing parameter, check the identifiers \
                 provided. Detail: {message}"
            ),
            other => other.to_string(),
        }
    }
}

/// Graph API error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Graph error: {} at line {} in {}", kind, line, file)]
pub struct GraphError {
    kind: GraphErrorKind,
    line: u32,
    file: &'static str,
}

impl GraphError {
    /// Creates a new error capturing the caller's location.
    #[track_caller]
    pub fn new(kind: GraphErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<VideoUrlError> for GraphError {
    #[track_caller]
    fn from(err: VideoUrlError) -> Self {
        GraphError::new(GraphErrorKind::InvalidVideoUrl(err))
    }
}

/// Result type for Graph API operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: Option<i64>, message: &str) -> GraphErrorKind {
        GraphErrorKind::Api {
            code,
            message: message.to_string(),
            error_type: None,
            fbtrace_id: None,
        }
    }

    #[test]
    fn permission_code_gets_guidance() {
        let guidance = api_error(Some(3), "(#3) denied").guidance();
        assert!(guidance.contains("publish_pages"));
        assert!(guidance.contains("manage_pages"));
    }

    #[test]
    fn expired_token_code_gets_guidance() {
        let guidance = api_error(Some(190), "token expired").guidance();
        assert!(guidance.contains("access token"));
    }

    #[test]
    fn parameter_code_keeps_remote_detail() {
        let guidance = api_error(Some(100), "Unsupported get request").guidance();
        assert!(guidance.contains("Unsupported get request"));
    }

    #[test]
    fn unknown_code_falls_through_with_code_and_text() {
        let guidance = api_error(Some(613), "call limit reached").guidance();
        assert!(guidance.contains("613"));
        assert!(guidance.contains("call limit reached"));
    }

    #[test]
    fn absent_code_displays_unknown() {
        let guidance = api_error(None, "mystery").guidance();
        assert!(guidance.contains("unknown"));
    }

    #[test]
    fn caller_errors_are_classified() {
        assert!(GraphErrorKind::MissingCredential("FACEBOOK_PAGE_ID").is_caller_error());
        assert!(GraphErrorKind::InvalidImage("application/pdf".to_string()).is_caller_error());
        assert!(!api_error(Some(3), "denied").is_caller_error());
        assert!(!GraphErrorKind::PhotoPostNotEditable.is_caller_error());
    }
}
