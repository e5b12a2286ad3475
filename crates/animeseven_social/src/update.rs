//! Post update outcome types and failure classification.
//!
//! The platform refuses in-place text edits on photo-backed posts; the
//! update workflow is a two-path state machine whose transition decision
//! lives here as a pure function, testable without any I/O. The driver
//! is [`crate::PageClient::update_post`].

use crate::graph::{GraphError, GraphErrorKind};

/// Terminal result of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The post's text was edited in place.
    Edited {
        /// Id of the updated post.
        post_id: String,
        /// Browsable URL, when the platform echoed one.
        post_url: Option<String>,
    },
    /// The post could not be edited; a replacement was created and the
    /// episode comments were migrated onto it.
    Recreated {
        /// Id of the post that could not be edited. Not deleted.
        old_post_id: String,
        /// Id of the replacement post.
        new_post_id: String,
        /// Browsable URL of the replacement, when available.
        post_url: Option<String>,
        /// Number of episode comments successfully re-attached.
        migrated_comments: usize,
    },
}

/// Next step after a failed direct update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDisposition {
    /// The failure marks a photo-backed node; enter the
    /// recreate-and-migrate fallback.
    PhotoNode,
    /// Unrelated failure; propagate without retrying anything.
    Fatal,
}

/// Classifies a direct-update failure.
///
/// Only two shapes route into the fallback: the platform's insufficient
/// permission error (code 3), and the parameter error (code 100) whose
/// message names the missing `message` field on a Photo node. Everything
/// else is fatal.
pub fn classify_update_error(err: &GraphError) -> UpdateDisposition {
    match err.kind() {
        GraphErrorKind::Api { code: Some(3), .. } => UpdateDisposition::PhotoNode,
        GraphErrorKind::Api {
            code: Some(100),
            message,
            ..
        } if message.contains("nonexisting field (message) on node type (Photo)") => {
            UpdateDisposition::PhotoNode
        }
        _ => UpdateDisposition::Fatal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: Option<i64>, message: &str) -> GraphError {
        GraphError::new(GraphErrorKind::Api {
            code,
            message: message.to_string(),
            error_type: None,
            fbtrace_id: None,
        })
    }

    #[test]
    fn permission_error_enters_fallback() {
        let err = api_error(Some(3), "(#3) Application does not have the capability");
        assert_eq!(classify_update_error(&err), UpdateDisposition::PhotoNode);
    }

    #[test]
    fn photo_field_error_enters_fallback() {
        let err = api_error(
            Some(100),
            "(#100) Tried accessing nonexisting field (message) on node type (Photo)",
        );
        assert_eq!(classify_update_error(&err), UpdateDisposition::PhotoNode);
    }

    #[test]
    fn other_code_100_errors_are_fatal() {
        let err = api_error(Some(100), "Unsupported get request");
        assert_eq!(classify_update_error(&err), UpdateDisposition::Fatal);
    }

    #[test]
    fn expired_token_is_fatal() {
        let err = api_error(Some(190), "Error validating access token");
        assert_eq!(classify_update_error(&err), UpdateDisposition::Fatal);
    }

    #[test]
    fn transport_errors_are_fatal() {
        let err = GraphError::new(GraphErrorKind::Request("connection reset".to_string()));
        assert_eq!(classify_update_error(&err), UpdateDisposition::Fatal);
    }
}
