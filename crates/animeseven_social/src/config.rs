//! Graph API configuration.

use tracing::warn;

/// Facebook Graph API base URL, v19.
pub const GRAPH_API_BASE: &str = "https://graph.facebook.com/v19.0";

/// Credentials and endpoint for the page's Graph API access.
///
/// Constructed once at process start and handed to [`crate::PageClient`];
/// there is no global instance. Empty credentials are tolerated at
/// construction so the server can still start and expose its other tools —
/// the affected operations fail per call instead.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Page access token, forwarded as the `access_token` query parameter.
    pub access_token: String,
    /// Numeric id of the page being managed.
    pub page_id: String,
    /// Graph API base URL. Overridable for tests.
    pub base_url: String,
}

impl GraphConfig {
    /// Creates a config against the production Graph API endpoint.
    pub fn new(access_token: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            page_id: page_id.into(),
            base_url: GRAPH_API_BASE.to_string(),
        }
    }

    /// Reads `FACEBOOK_ACCESS_TOKEN` and `FACEBOOK_PAGE_ID` from the
    /// environment. Missing values log a warning but do not fail.
    pub fn from_env() -> Self {
        let access_token = std::env::var("FACEBOOK_ACCESS_TOKEN").unwrap_or_default();
        let page_id = std::env::var("FACEBOOK_PAGE_ID").unwrap_or_default();

        if access_token.is_empty() {
            warn!("FACEBOOK_ACCESS_TOKEN is not set; page operations will fail");
        }
        if page_id.is_empty() {
            warn!("FACEBOOK_PAGE_ID is not set; page operations will fail");
        }

        Self {
            access_token,
            page_id,
            base_url: GRAPH_API_BASE.to_string(),
        }
    }
}
