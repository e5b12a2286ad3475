//! Jikan v4 search client.

use crate::error::{CatalogError, CatalogErrorKind, CatalogResult};
use animeseven_core::{
    AiringStatus, AnimeData, AnimeImage, AnimeInfo, AnimePost, AnimeTag, AnimeTitle, MediaType,
    Season,
};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

/// Jikan API base URL. Free, occasionally slow.
pub const JIKAN_API_BASE: &str = "https://api.jikan.moe/v4";

/// Catalog endpoint configuration.
#[derive(Debug, Clone)]
pub struct JikanConfig {
    /// Catalog base URL. Overridable for tests.
    pub base_url: String,
}

impl Default for JikanConfig {
    fn default() -> Self {
        Self {
            base_url: JIKAN_API_BASE.to_string(),
        }
    }
}

/// Search client for the Jikan catalog.
#[derive(Clone, Default)]
pub struct JikanClient {
    http: Client,
    config: JikanConfig,
}

impl JikanClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: JikanConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Searches the catalog by title, returning publish-ready records.
    ///
    /// Adult content is filtered out at the API. The Arabic title of
    /// every result is empty; it gets filled in by a translation pass
    /// before publishing.
    #[instrument(skip(self))]
    pub async fn search(&self, title: &str, limit: u32) -> CatalogResult<Vec<AnimePost>> {
        debug!(title, limit, "catalog search");

        let response = self
            .http
            .get(format!(
                "{}/anime",
                self.config.base_url.trim_end_matches('/')
            ))
            .query(&[
                ("q", title),
                ("limit", &limit.to_string()),
                ("sfw", "true"),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::new(CatalogErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::new(CatalogErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::new(CatalogErrorKind::Decode(e.to_string())))?;

        let results = value
            .get("data")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(results.iter().map(map_entry).collect())
    }
}

/// Maps one raw catalog entry into a publish-ready record.
fn map_entry(entry: &Value) -> AnimePost {
    let text = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let genres = entry
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(|g| g.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let studio = entry
        .pointer("/studios/0/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();

    let image_url = entry
        .pointer("/images/jpg/large_image_url")
        .or_else(|| entry.pointer("/images/jpg/image_url"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut title_en = text("title_english");
    if title_en.is_empty() {
        // Not every entry carries an English title; fall back to the
        // catalog's default (usually romaji).
        title_en = text("title");
    }

    AnimePost {
        tag: AnimeTag::Anime,
        data: AnimeData {
            title: AnimeTitle {
                en: title_en,
                jp: text("title_japanese"),
                ar: String::new(),
            },
            description: text("synopsis"),
            info: AnimeInfo {
                episodes: entry
                    .get("episodes")
                    .and_then(Value::as_u64)
                    .map(|n| n as u32),
                year: entry.get("year").and_then(Value::as_i64).map(|n| n as i32),
                rating: entry.get("score").and_then(Value::as_f64),
                genres,
                studio,
                rank: entry.get("rank").and_then(Value::as_u64).map(|n| n as u32),
                status: AiringStatus::from(text("status")),
                media_type: MediaType::from(text("type")),
                season: Season::from(text("season")),
            },
            image: AnimeImage {
                id: format!(
                    "anime-{}",
                    entry.get("mal_id").and_then(Value::as_u64).unwrap_or(0)
                ),
                url: image_url,
            },
            updated_at: Utc::now(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "mal_id": 37521,
            "title": "Vinland Saga",
            "title_english": "Vinland Saga",
            "title_japanese": "ヴィンランド・サガ",
            "synopsis": "Young Thorfinn grew up listening to the stories of old sailors.",
            "episodes": 24,
            "year": 2019,
            "score": 8.8,
            "rank": 40,
            "status": "Finished Airing",
            "type": "TV",
            "season": "summer",
            "genres": [
                {"mal_id": 1, "name": "Action"},
                {"mal_id": 2, "name": "Adventure"}
            ],
            "studios": [{"mal_id": 858, "name": "Wit Studio"}],
            "images": {
                "jpg": {
                    "image_url": "https://cdn.myanimelist.net/images/anime/small.jpg",
                    "large_image_url": "https://cdn.myanimelist.net/images/anime/large.jpg"
                }
            }
        })
    }

    #[test]
    fn maps_full_entry() {
        let post = map_entry(&fixture());
        assert_eq!(post.data.title.en, "Vinland Saga");
        assert_eq!(post.data.title.ar, "");
        assert_eq!(post.data.info.episodes, Some(24));
        assert_eq!(post.data.info.status, AiringStatus::Finished);
        assert_eq!(post.data.info.season, Season::Summer);
        assert_eq!(post.data.info.media_type, MediaType::Tv);
        assert_eq!(post.data.info.studio, "Wit Studio");
        assert_eq!(
            post.data.info.genres,
            vec!["Action".to_string(), "Adventure".to_string()]
        );
        assert_eq!(
            post.data.image.url,
            "https://cdn.myanimelist.net/images/anime/large.jpg"
        );
        assert_eq!(post.data.image.id, "anime-37521");
    }

    #[test]
    fn falls_back_to_default_title_and_small_image() {
        let mut entry = fixture();
        entry["title_english"] = Value::Null;
        entry["images"]["jpg"]
            .as_object_mut()
            .unwrap()
            .remove("large_image_url");

        let post = map_entry(&entry);
        assert_eq!(post.data.title.en, "Vinland Saga");
        assert_eq!(
            post.data.image.url,
            "https://cdn.myanimelist.net/images/anime/small.jpg"
        );
    }

    #[test]
    fn missing_numerics_stay_unknown() {
        let mut entry = fixture();
        entry["episodes"] = Value::Null;
        entry["year"] = Value::Null;
        entry["rank"] = Value::Null;
        entry["score"] = Value::Null;
        entry["status"] = json!("Not yet aired");

        let post = map_entry(&entry);
        assert_eq!(post.data.info.episodes, None);
        assert_eq!(post.data.info.year, None);
        assert_eq!(post.data.info.rank, None);
        assert_eq!(post.data.info.rating, None);
        assert_eq!(post.data.info.status, AiringStatus::Upcoming);
    }

    #[test]
    fn empty_entry_maps_to_unknowns() {
        let post = map_entry(&json!({}));
        assert_eq!(post.data.title.en, "");
        assert_eq!(post.data.info.status, AiringStatus::Unknown);
        assert_eq!(post.data.info.season, Season::Unknown);
        assert_eq!(post.data.info.studio, "Unknown");
        assert_eq!(post.data.image.id, "anime-0");
    }
}
