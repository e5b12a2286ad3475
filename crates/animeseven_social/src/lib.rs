//! Facebook page publishing integration for the Anime Seven tools.
//!
//! This crate talks to the Facebook Graph API on behalf of the MCP tool
//! layer. It covers:
//!
//! - Reading page posts and post comments, deleting comments
//! - Publishing an anime record as a page post with a photo attachment
//! - Attaching episode records as comments on a post
//! - Updating a post's text, including the recreate-and-migrate fallback
//!   for photo-backed posts that the platform refuses to edit in place
//!
//! # Architecture
//!
//! The network sits behind two seams: [`GraphTransport`] (the Graph API
//! calls) and [`MediaFetcher`] (the cover image download). [`PageClient`]
//! drives all workflows against those traits, so every failure path is
//! exercisable with in-process test doubles. [`GraphClient`] and
//! [`HttpMediaFetcher`] are the reqwest-backed production implementations.
//!
//! ```rust,no_run
//! use animeseven_social::{GraphConfig, PageClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PageClient::from_config(GraphConfig::from_env());
//! let posts = client.page_posts(&Default::default()).await?;
//! println!("{} posts", posts.data.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod graph;
mod page;
mod update;

pub use config::{GraphConfig, GRAPH_API_BASE};
pub use graph::{
    CommentAuthor, Cursors, FetchedMedia, GraphClient, GraphError, GraphErrorKind, GraphPage,
    GraphResult, GraphTransport, HttpMediaFetcher, MediaFetcher, PageComment, PagePost,
    PagePostsQuery, Paging, PhotoUpload, PublishedPost,
};
pub use page::{PageClient, MIGRATION_COMMENT_SCAN_LIMIT};
pub use update::{classify_update_error, UpdateDisposition, UpdateOutcome};
