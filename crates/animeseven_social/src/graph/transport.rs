//! Transport seams for the Graph API and media downloads.
//!
//! [`crate::PageClient`] drives every workflow against these traits, so
//! tests can substitute call-recording fakes and exercise the failure
//! paths without a network.

use super::GraphResult;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Low-level Graph API transport.
///
/// Paths are relative to the configured Graph base URL; authentication is
/// the implementation's concern.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    /// GET with query parameters, returning the decoded JSON body.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> GraphResult<Value>;

    /// POST with a JSON body.
    async fn post(&self, path: &str, body: Value) -> GraphResult<Value>;

    /// Multipart POST attaching an image file as `source` alongside a
    /// `message` text field.
    async fn post_photo(&self, path: &str, message: &str, image: &Path) -> GraphResult<Value>;

    /// DELETE the addressed object.
    async fn delete(&self, path: &str) -> GraphResult<Value>;
}

/// A downloaded media resource.
#[derive(Debug, Clone)]
pub struct FetchedMedia {
    /// Declared content type, when the server sent one.
    pub content_type: Option<String>,
    /// Resource bytes.
    pub bytes: Vec<u8>,
}

/// Downloads externally hosted media (cover artwork).
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Fetches the resource at `url`.
    async fn fetch(&self, url: &str) -> GraphResult<FetchedMedia>;
}
