//! Episode record model and the comment codec.
//!
//! Episodes are stored as JSON text in the body of a post comment. The
//! codec here is used in two directions: encoding an episode before a
//! comment is created, and scanning existing comment bodies during post
//! migration. Most comment bodies on a page are ordinary audience text,
//! so decoding is a filter that never errors — see [`DecodedComment`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload discriminant for episode comments.
///
/// Deserialization rejects any value other than `"episode"`, which is
/// what separates episode payloads from arbitrary comment text during a
/// migration scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EpisodeTag {
    /// The only accepted value, serialized as `"episode"`.
    #[default]
    #[serde(rename = "episode")]
    Episode,
}

/// One playable episode, attached to an anime post as a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Payload discriminant, always `"episode"`.
    #[serde(rename = "type")]
    pub tag: EpisodeTag,
    /// Ordinal as text ("1", "2", ...). Not required to be numeric.
    #[serde(rename = "episodeNumber")]
    pub episode_number: String,
    /// Display title, conventionally a localized "Episode N" label.
    pub title: String,
    /// Attribution, free text.
    #[serde(rename = "addedBy")]
    pub added_by: String,
    /// Free-form duration ("24:30" or a bare number of minutes).
    pub duration: String,
    /// Whether the episode is filler rather than canon.
    #[serde(rename = "isFiller")]
    pub is_filler: bool,
    /// Delivery mirrors, in priority order.
    pub servers: Vec<EpisodeServer>,
    /// Release timestamp.
    #[serde(rename = "releaseDate")]
    pub release_date: DateTime<Utc>,
}

/// One delivery mirror for an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeServer {
    /// Server display name.
    pub name: String,
    /// Video quality label ("HD", "SD", ...).
    pub quality: String,
    /// Video URL. Must match the page video permalink format when
    /// `kind` is [`ServerKind::Facebook`].
    pub url: String,
    /// Hosting platform. Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ServerKind,
}

/// Hosting platform for an episode server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerKind {
    /// Hosted as a Facebook page video. URL is validated before use.
    Facebook,
    /// Hosted on YouTube.
    Youtube,
    /// Hosted on Dailymotion.
    Dailymotion,
    /// Any other host.
    Other,
}

impl From<String> for ServerKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "facebook" => ServerKind::Facebook,
            "youtube" => ServerKind::Youtube,
            "dailymotion" => ServerKind::Dailymotion,
            _ => ServerKind::Other,
        }
    }
}

impl From<ServerKind> for String {
    fn from(kind: ServerKind) -> Self {
        match kind {
            ServerKind::Facebook => "facebook",
            ServerKind::Youtube => "youtube",
            ServerKind::Dailymotion => "dailymotion",
            ServerKind::Other => "other",
        }
        .to_string()
    }
}

/// Outcome of decoding one comment body.
///
/// `NotEpisode` is an expected, frequent result — it marks ordinary
/// audience comments, not a defect — so it is a variant rather than an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedComment {
    /// The body decoded to a structurally valid episode record.
    Episode(Episode),
    /// The body is not valid JSON, or lacks the episode discriminant,
    /// or is structurally incomplete.
    NotEpisode,
}

impl DecodedComment {
    /// Returns the decoded episode, discarding the filter outcome.
    pub fn into_episode(self) -> Option<Episode> {
        match self {
            DecodedComment::Episode(episode) => Some(episode),
            DecodedComment::NotEpisode => None,
        }
    }
}

impl Episode {
    /// Encodes the episode into comment-body wire text.
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a comment body, filtering out everything that is not an
    /// episode payload.
    pub fn from_comment(text: &str) -> DecodedComment {
        match serde_json::from_str::<Episode>(text) {
            Ok(episode) => DecodedComment::Episode(episode),
            Err(_) => DecodedComment::NotEpisode,
        }
    }
}
