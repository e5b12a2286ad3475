//! Page workflows: reading, publishing, commenting, and updating posts.

use crate::config::GraphConfig;
use crate::graph::{
    GraphClient, GraphError, GraphErrorKind, GraphPage, GraphResult, GraphTransport,
    HttpMediaFetcher, MediaFetcher, PageComment, PagePost, PagePostsQuery, PhotoUpload,
    PublishedPost,
};
use crate::update::{classify_update_error, UpdateDisposition, UpdateOutcome};
use animeseven_core::{validate_video_url, AnimePost, Episode, ServerKind};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Comment page size used when scanning an old post for episode payloads
/// during migration.
pub const MIGRATION_COMMENT_SCAN_LIMIT: u32 = 100;

const POST_FIELDS: &str = "id,message,story,created_time,permalink_url";
const COMMENT_FIELDS: &str = "id,message,created_time,from";

/// High-level client for the managed page.
///
/// Owns no network code of its own: everything goes through the injected
/// [`GraphTransport`] and [`MediaFetcher`] seams.
#[derive(Clone)]
pub struct PageClient {
    transport: Arc<dyn GraphTransport>,
    media: Arc<dyn MediaFetcher>,
    config: GraphConfig,
}

impl PageClient {
    /// Creates a client over explicit transport implementations.
    pub fn new(
        transport: Arc<dyn GraphTransport>,
        media: Arc<dyn MediaFetcher>,
        config: GraphConfig,
    ) -> Self {
        Self {
            transport,
            media,
            config,
        }
    }

    /// Creates a client backed by the production HTTP transports.
    pub fn from_config(config: GraphConfig) -> Self {
        Self {
            transport: Arc::new(GraphClient::new(config.clone())),
            media: Arc::new(HttpMediaFetcher::new()),
            config,
        }
    }

    fn require_token(&self) -> GraphResult<()> {
        if self.config.access_token.is_empty() {
            return Err(GraphError::new(GraphErrorKind::MissingCredential(
                "FACEBOOK_ACCESS_TOKEN",
            )));
        }
        Ok(())
    }

    fn require_page(&self) -> GraphResult<()> {
        if self.config.page_id.is_empty() {
            return Err(GraphError::new(GraphErrorKind::MissingCredential(
                "FACEBOOK_PAGE_ID",
            )));
        }
        Ok(())
    }

    fn decode<T: serde::de::DeserializeOwned>(value: Value) -> GraphResult<T> {
        serde_json::from_value(value)
            .map_err(|e| GraphError::new(GraphErrorKind::Decode(e.to_string())))
    }

    fn post_url_from(value: &Value) -> Option<String> {
        value
            .get("post_id")
            .and_then(Value::as_str)
            .map(|p| format!("https://www.facebook.com/{p}"))
    }

    /// Lists posts on the managed page.
    #[instrument(skip(self, query))]
    pub async fn page_posts(&self, query: &PagePostsQuery) -> GraphResult<GraphPage<PagePost>> {
        self.require_page()?;
        self.require_token()?;

        let mut params = vec![
            ("limit", query.limit.unwrap_or(10).to_string()),
            ("fields", POST_FIELDS.to_string()),
        ];
        let cursors = [
            ("after", &query.after),
            ("before", &query.before),
            ("since", &query.since),
            ("until", &query.until),
        ];
        for (name, value) in cursors {
            if let Some(value) = value {
                params.push((name, value.clone()));
            }
        }

        let value = self
            .transport
            .get(&format!("{}/posts", self.config.page_id), &params)
            .await?;
        Self::decode(value)
    }

    /// Lists comments on a post.
    #[instrument(skip(self))]
    pub async fn post_comments(
        &self,
        post_id: &str,
        limit: u32,
        after: Option<&str>,
    ) -> GraphResult<GraphPage<PageComment>> {
        self.require_token()?;

        let mut params = vec![
            ("limit", limit.to_string()),
            ("fields", COMMENT_FIELDS.to_string()),
        ];
        if let Some(after) = after {
            params.push(("after", after.to_string()));
        }

        let value = self
            .transport
            .get(&format!("{post_id}/comments"), &params)
            .await?;
        Self::decode(value)
    }

    /// Deletes a comment.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: &str) -> GraphResult<()> {
        self.require_token()?;
        self.transport.delete(comment_id).await?;
        Ok(())
    }

    /// Publishes an anime record as a new page post with the cover image
    /// attached as a photo.
    ///
    /// The cover is downloaded first and must declare an `image/*`
    /// content type; nothing is sent to the page otherwise. The image
    /// bytes pass through a scoped temporary file that is removed on
    /// every exit path.
    #[instrument(skip(self, anime), fields(title = %anime.data.title.en))]
    pub async fn publish_anime(&self, anime: &AnimePost) -> GraphResult<PublishedPost> {
        self.require_page()?;
        self.require_token()?;

        let message = serde_json::to_string(anime)
            .map_err(|e| GraphError::new(GraphErrorKind::Encode(e.to_string())))?;

        let media = self.media.fetch(&anime.data.image.url).await?;
        let content_type = media.content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(GraphError::new(GraphErrorKind::InvalidImage(content_type)));
        }

        let cover = tempfile::NamedTempFile::new()
            .map_err(|e| GraphError::new(GraphErrorKind::Io(e.to_string())))?;
        tokio::fs::write(cover.path(), &media.bytes)
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Io(e.to_string())))?;

        let value = self
            .transport
            .post_photo(
                &format!("{}/photos", self.config.page_id),
                &message,
                cover.path(),
            )
            .await?;

        let upload: PhotoUpload = Self::decode(value)?;
        let published = PublishedPost {
            post_url: upload
                .post_id
                .map(|p| format!("https://www.facebook.com/{p}")),
            post_id: upload.id,
        };
        info!(post_id = %published.post_id, "anime published");
        Ok(published)
    }

    /// Attaches an episode record to a post as a comment.
    ///
    /// Every Facebook-hosted server URL is validated against the video
    /// permalink format before any network call; a single invalid URL
    /// fails the whole episode with nothing sent.
    #[instrument(skip(self, episode), fields(episode = %episode.episode_number))]
    pub async fn add_episode_comment(
        &self,
        post_id: &str,
        episode: &Episode,
    ) -> GraphResult<String> {
        self.require_token()?;

        for server in &episode.servers {
            if server.kind == ServerKind::Facebook {
                validate_video_url(&server.url)?;
            }
        }

        let message = episode
            .to_wire()
            .map_err(|e| GraphError::new(GraphErrorKind::Encode(e.to_string())))?;

        let value = self
            .transport
            .post(&format!("{post_id}/comments"), json!({ "message": message }))
            .await?;

        value
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                GraphError::new(GraphErrorKind::Decode(
                    "comment response carried no id".to_string(),
                ))
            })
    }

    /// Updates a post's text.
    ///
    /// Tries an in-place edit first. When the platform rejects the edit
    /// in a way that marks the post as photo-backed (see
    /// [`classify_update_error`]), falls back to recreating the post and
    /// migrating its episode comments. Any other failure propagates
    /// unchanged; the direct edit is never retried.
    #[instrument(skip(self, message))]
    pub async fn update_post(&self, post_id: &str, message: &str) -> GraphResult<UpdateOutcome> {
        self.require_token()?;

        match self
            .transport
            .post(post_id, json!({ "message": message }))
            .await
        {
            Ok(value) => Ok(UpdateOutcome::Edited {
                post_url: Self::post_url_from(&value),
                post_id: value
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or(post_id)
                    .to_string(),
            }),
            Err(err) => match classify_update_error(&err) {
                UpdateDisposition::Fatal => Err(err),
                UpdateDisposition::PhotoNode => {
                    info!(post_id, "in-place edit rejected for photo-backed post, recreating");
                    self.recreate_and_migrate(post_id, message).await
                }
            },
        }
    }

    /// Fallback path: rebuild the post and carry its episodes forward.
    ///
    /// Episode payloads are recovered by running the comment codec over
    /// the old post's comments; ordinary audience comments fall out of
    /// the filter silently. A post with no recoverable episodes is not
    /// under migration management and is left untouched.
    async fn recreate_and_migrate(
        &self,
        old_post_id: &str,
        message: &str,
    ) -> GraphResult<UpdateOutcome> {
        let comments = self
            .post_comments(old_post_id, MIGRATION_COMMENT_SCAN_LIMIT, None)
            .await?;

        let episodes: Vec<Episode> = comments
            .data
            .iter()
            .filter_map(|comment| Episode::from_comment(&comment.message).into_episode())
            .collect();

        if episodes.is_empty() {
            return Err(GraphError::new(GraphErrorKind::PhotoPostNotEditable));
        }
        info!(episodes = episodes.len(), "anime post detected, migrating");

        // The fallback rebuilds the post from scratch, so the update text
        // must be a whole anime record, not free text.
        let anime: AnimePost = serde_json::from_str(message)
            .map_err(|e| GraphError::new(GraphErrorKind::InvalidUpdatePayload(e.to_string())))?;

        let new_post = self.publish_anime(&anime).await?;

        let mut migrated = 0usize;
        for episode in &episodes {
            match self.add_episode_comment(&new_post.post_id, episode).await {
                Ok(_) => migrated += 1,
                Err(err) => {
                    // Best-effort per episode: one bad payload must not
                    // sink the rest of the migration.
                    warn!(
                        episode = %episode.episode_number,
                        error = %err,
                        "failed to migrate episode comment, skipping"
                    );
                }
            }
        }

        info!(
            old_post_id,
            new_post_id = %new_post.post_id,
            migrated,
            recovered = episodes.len(),
            "post recreated"
        );

        Ok(UpdateOutcome::Recreated {
            old_post_id: old_post_id.to_string(),
            new_post_id: new_post.post_id,
            post_url: new_post.post_url,
            migrated_comments: migrated,
        })
    }
}
