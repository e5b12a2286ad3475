//! Graph API plumbing: wire models, error types, and the transport seam.

mod client;
mod error;
mod models;
mod transport;

pub use client::{GraphClient, HttpMediaFetcher};
pub use error::{GraphError, GraphErrorKind, GraphResult};
pub use models::{
    CommentAuthor, Cursors, GraphPage, PageComment, PagePost, PagePostsQuery, Paging, PhotoUpload,
    PublishedPost,
};
pub use transport::{FetchedMedia, GraphTransport, MediaFetcher};
