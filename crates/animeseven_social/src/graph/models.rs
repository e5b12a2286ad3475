//! Wire models for Graph API payloads.
//!
//! These match the JSON the platform actually returns for the field sets
//! we request. Timestamps stay as strings — they are passed through to
//! the caller, never computed on.

use serde::{Deserialize, Serialize};

/// Standard Graph API list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPage<T> {
    /// Page of results.
    pub data: Vec<T>,
    /// Pagination block, absent on the last page of some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Pagination block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    /// Cursor pair for cursor-based pagination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<Cursors>,
    /// URL of the next page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// URL of the previous page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// Cursor pair for cursor-based pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursors {
    /// Cursor pointing before the page.
    pub before: String,
    /// Cursor pointing after the page.
    pub after: String,
}

/// One page post, with the fields we request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePost {
    /// Post id.
    pub id: String,
    /// Post body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Platform-generated story line ("X updated their cover photo").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    /// Creation timestamp, as returned by the platform.
    pub created_time: String,
    /// Shareable permalink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_url: Option<String>,
}

/// One comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageComment {
    /// Comment id.
    pub id: String,
    /// Comment body. Episode payloads live here as JSON text.
    #[serde(default)]
    pub message: String,
    /// Creation timestamp, as returned by the platform.
    pub created_time: String,
    /// Comment author, when visible to the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<CommentAuthor>,
}

/// Comment author reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    /// Author id.
    pub id: String,
    /// Author display name.
    pub name: String,
}

/// Response of a photo upload: the photo id plus, when the upload also
/// created a feed post, that post's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUpload {
    /// Photo object id. Comments attach to this id.
    pub id: String,
    /// Underlying feed post id, when the platform echoes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// Handle for a post created by this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPost {
    /// Id used for follow-up calls (attaching episode comments).
    pub post_id: String,
    /// Browsable URL, when the platform echoed a feed post id.
    pub post_url: Option<String>,
}

/// Options for listing page posts.
#[derive(Debug, Clone, Default)]
pub struct PagePostsQuery {
    /// Page size (platform default 10, cap 100).
    pub limit: Option<u32>,
    /// Cursor: results after this point.
    pub after: Option<String>,
    /// Cursor: results before this point.
    pub before: Option<String>,
    /// Lower time bound (timestamp or date string).
    pub since: Option<String>,
    /// Upper time bound (timestamp or date string).
    pub until: Option<String>,
}
