//! Domain types for the Anime Seven publishing tools.
//!
//! This crate holds the data model shared by the service crates:
//!
//! - **Anime records**: the JSON payload published as a page post
//!   ([`AnimePost`] and its nested structures)
//! - **Episode records**: the JSON payload stored as a post comment
//!   ([`Episode`]), together with the comment codec that encodes episodes
//!   to wire text and filters episode-shaped comments back out of
//!   arbitrary comment bodies ([`DecodedComment`])
//! - **Permalink validation**: the video URL gate applied before any
//!   comment is created ([`validate_video_url`])
//!
//! Everything here is pure data — no I/O, no async.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anime;
mod episode;
mod video_url;

pub use anime::{
    AiringStatus, AnimeData, AnimeImage, AnimeInfo, AnimePost, AnimeTag, AnimeTitle, MediaType,
    Season,
};
pub use episode::{DecodedComment, Episode, EpisodeServer, EpisodeTag, ServerKind};
pub use video_url::{validate_video_url, VideoUrlError, VIDEO_URL_FORMAT};
