//! Anime record model.
//!
//! These structs mirror the JSON payload stored in the body of a page
//! post. Field renames keep the wire format identical to the payloads
//! already published on the page, so historic posts keep decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload discriminant for anime posts.
///
/// Deserialization rejects any value other than `"anime"`, so parsing a
/// post body into [`AnimePost`] doubles as a type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimeTag {
    /// The only accepted value, serialized as `"anime"`.
    #[default]
    #[serde(rename = "anime")]
    Anime,
}

/// One catalog entry, as published to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimePost {
    /// Payload discriminant, always `"anime"`.
    #[serde(rename = "type")]
    pub tag: AnimeTag,
    /// The anime record itself.
    pub data: AnimeData,
}

/// The anime record carried by an [`AnimePost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeData {
    /// Localized titles.
    pub title: AnimeTitle,
    /// Free-text synopsis, expected target language is Arabic.
    pub description: String,
    /// Catalog metadata. Optional on the wire.
    #[serde(default)]
    pub info: AnimeInfo,
    /// Cover artwork reference. Fetched at publish time, never stored.
    pub image: AnimeImage,
    /// Last modification timestamp. Stamped at decode time when a
    /// caller-supplied payload omits it.
    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Localized titles. Only the English title is required; the Arabic title
/// is usually filled in by a translation pass before publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeTitle {
    /// English title.
    pub en: String,
    /// Japanese title.
    #[serde(default)]
    pub jp: String,
    /// Arabic title.
    #[serde(default)]
    pub ar: String,
}

/// Catalog metadata for an anime. Numeric fields the catalog does not
/// know are `None`, not zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimeInfo {
    /// Episode count, when known.
    #[serde(default)]
    pub episodes: Option<u32>,
    /// Release year, when known.
    #[serde(default)]
    pub year: Option<i32>,
    /// Catalog score, when known.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Genre names, in catalog order.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Production studio.
    #[serde(default)]
    pub studio: String,
    /// Catalog rank, when known.
    #[serde(default)]
    pub rank: Option<u32>,
    /// Airing status.
    #[serde(default)]
    pub status: AiringStatus,
    /// Media type (TV, movie, OVA, ...). Serialized as `type`.
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    /// Broadcast season.
    #[serde(default)]
    pub season: Season,
}

/// Cover artwork reference. The image is externally hosted; publishing
/// downloads it and re-uploads the bytes as the post photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeImage {
    /// Catalog-side identifier for the artwork.
    #[serde(default)]
    pub id: String,
    /// Source URL of the artwork.
    pub url: String,
}

/// Airing status vocabulary.
///
/// The upstream catalog occasionally grows new status strings; anything
/// unrecognized is carried through verbatim in [`AiringStatus::Other`]
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AiringStatus {
    /// Finished airing.
    Finished,
    /// Currently airing.
    Airing,
    /// Announced but not yet aired.
    Upcoming,
    /// Status not known.
    #[default]
    Unknown,
    /// Unrecognized upstream vocabulary, passed through verbatim.
    Other(String),
}

impl From<String> for AiringStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "finished" | "Finished Airing" => AiringStatus::Finished,
            "airing" | "Currently Airing" => AiringStatus::Airing,
            "upcoming" | "Not yet aired" => AiringStatus::Upcoming,
            "unknown" | "" => AiringStatus::Unknown,
            _ => AiringStatus::Other(s),
        }
    }
}

impl From<AiringStatus> for String {
    fn from(status: AiringStatus) -> Self {
        match status {
            AiringStatus::Finished => "finished".to_string(),
            AiringStatus::Airing => "airing".to_string(),
            AiringStatus::Upcoming => "upcoming".to_string(),
            AiringStatus::Unknown => "unknown".to_string(),
            AiringStatus::Other(s) => s,
        }
    }
}

/// Broadcast season vocabulary, uppercase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    /// Winter season.
    Winter,
    /// Spring season.
    Spring,
    /// Summer season.
    Summer,
    /// Fall season.
    Fall,
    /// Season not known.
    #[default]
    Unknown,
    /// Unrecognized upstream vocabulary, passed through verbatim.
    Other(String),
}

impl From<String> for Season {
    fn from(s: String) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "WINTER" => Season::Winter,
            "SPRING" => Season::Spring,
            "SUMMER" => Season::Summer,
            "FALL" | "AUTUMN" => Season::Fall,
            "UNKNOWN" | "" => Season::Unknown,
            _ => Season::Other(s),
        }
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        match season {
            Season::Winter => "WINTER".to_string(),
            Season::Spring => "SPRING".to_string(),
            Season::Summer => "SUMMER".to_string(),
            Season::Fall => "FALL".to_string(),
            Season::Unknown => "UNKNOWN".to_string(),
            Season::Other(s) => s,
        }
    }
}

/// Media type vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    /// Television series.
    Tv,
    /// Feature film.
    Movie,
    /// Original video animation.
    Ova,
    /// Original net animation.
    Ona,
    /// Special episode.
    Special,
    /// Music video.
    Music,
    /// Media type not known.
    #[default]
    Unknown,
    /// Unrecognized upstream vocabulary, passed through verbatim.
    Other(String),
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "TV" => MediaType::Tv,
            "MOVIE" => MediaType::Movie,
            "OVA" => MediaType::Ova,
            "ONA" => MediaType::Ona,
            "SPECIAL" => MediaType::Special,
            "MUSIC" => MediaType::Music,
            "UNKNOWN" | "" => MediaType::Unknown,
            _ => MediaType::Other(s),
        }
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Tv => "TV".to_string(),
            MediaType::Movie => "MOVIE".to_string(),
            MediaType::Ova => "OVA".to_string(),
            MediaType::Ona => "ONA".to_string(),
            MediaType::Special => "SPECIAL".to_string(),
            MediaType::Music => "MUSIC".to_string(),
            MediaType::Unknown => "UNKNOWN".to_string(),
            MediaType::Other(s) => s,
        }
    }
}
