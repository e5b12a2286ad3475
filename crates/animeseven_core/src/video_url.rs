//! Video permalink validation.
//!
//! Facebook-hosted episode links must be page video permalinks of the
//! shape `[...].facebook.com/<page-id>/videos/<video-id>/`. The check is
//! a gate, not a normalizer: tracking parameters and mobile subdomains
//! are the calling agent's job to strip before the URL gets here.

use regex::Regex;
use std::sync::LazyLock;

/// Human-readable description of the required permalink shape, used in
/// error messages and tool schemas.
pub const VIDEO_URL_FORMAT: &str = "[...].facebook.com/XXXXXXXXXX/videos/XXXXXXXXXX/";

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+\.facebook\.com/\d+/videos/\d+/?$").expect("valid video permalink regex")
});

/// The URL does not match the required permalink shape.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invalid Facebook video URL {url:?}: expected format {VIDEO_URL_FORMAT}")]
pub struct VideoUrlError {
    /// The rejected URL.
    pub url: String,
}

impl std::error::Error for VideoUrlError {}

/// Validates a Facebook video permalink.
///
/// Accepts any hostname ending in `facebook.com`, a numeric page id, a
/// numeric video id, and an optional trailing slash. Everything else is
/// rejected.
pub fn validate_video_url(url: &str) -> Result<(), VideoUrlError> {
    if VIDEO_URL.is_match(url) {
        Ok(())
    } else {
        Err(VideoUrlError {
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_permalink() {
        assert!(validate_video_url(
            "https://www.facebook.com/100064560333515/videos/1278144576105246/"
        )
        .is_ok());
    }

    #[test]
    fn accepts_missing_trailing_slash() {
        assert!(
            validate_video_url("https://www.facebook.com/100064560333515/videos/1278144576105246")
                .is_ok()
        );
    }

    #[test]
    fn accepts_any_facebook_subdomain() {
        assert!(validate_video_url("https://m.facebook.com/123/videos/456/").is_ok());
        assert!(validate_video_url("https://web.facebook.com/123/videos/456/").is_ok());
    }

    #[test]
    fn rejects_non_numeric_video_id() {
        assert!(
            validate_video_url("https://www.facebook.com/100064560333515/videos/abc/").is_err()
        );
    }

    #[test]
    fn rejects_other_hosts() {
        assert!(validate_video_url("https://www.youtube.com/123/videos/456/").is_err());
        assert!(validate_video_url("https://facebook.com.evil.example/123/videos/456/").is_err());
    }

    #[test]
    fn rejects_trailing_parameters() {
        // The agent is expected to strip these before validation.
        assert!(
            validate_video_url("https://www.facebook.com/123/videos/456/?idorvanity=789").is_err()
        );
        assert!(validate_video_url("https://www.facebook.com/123/videos/456/?app=fbl").is_err());
    }

    #[test]
    fn rejects_watch_style_urls() {
        assert!(validate_video_url("https://www.facebook.com/watch/?v=456").is_err());
    }

    #[test]
    fn error_names_the_required_format() {
        let err = validate_video_url("https://example.com/video").unwrap_err();
        assert!(err.to_string().contains(VIDEO_URL_FORMAT));
    }
}
