//! Facebook page tools for MCP.
//!
//! These wrap the page client workflows: reading posts and comments,
//! deleting comments, publishing anime records and attaching episode
//! comments.

use crate::tools::{optional_str, required_str, McpTool};
use crate::{McpError, McpResult};
use animeseven_core::{AnimePost, Episode, VIDEO_URL_FORMAT};
use animeseven_social::{PageClient, PagePostsQuery};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

// ============================================================================
// Tool: fbGetPagePosts
// ============================================================================

/// Tool listing the managed page's posts.
pub struct GetPagePostsTool {
    page: Arc<PageClient>,
}

impl GetPagePostsTool {
    /// Creates the tool over an injected page client.
    pub fn new(page: Arc<PageClient>) -> Self {
        Self { page }
    }
}

#[async_trait]
impl McpTool for GetPagePostsTool {
    fn name(&self) -> &str {
        "fbGetPagePosts"
    }

    fn description(&self) -> &str {
        "Fetch posts from the managed Facebook page (100 max per call)."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Number of posts to fetch (default 10)",
                    "default": 10
                },
                "after": {
                    "type": "string",
                    "description": "'After' cursor for pagination"
                },
                "before": {
                    "type": "string",
                    "description": "'Before' cursor for pagination"
                },
                "since": {
                    "type": "string",
                    "description": "Start timestamp or date"
                },
                "until": {
                    "type": "string",
                    "description": "End timestamp or date"
                }
            },
            "required": []
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let query = PagePostsQuery {
            limit: input
                .get("limit")
                .and_then(Value::as_u64)
                .map(|n| n.clamp(1, 100) as u32),
            after: optional_str(&input, "after"),
            before: optional_str(&input, "before"),
            since: optional_str(&input, "since"),
            until: optional_str(&input, "until"),
        };

        let posts = self.page.page_posts(&query).await?;
        serde_json::to_value(posts).map_err(|e| McpError::InternalError(e.to_string()))
    }
}

// ============================================================================
// Tool: fbGetPostComments
// ============================================================================

/// Tool listing the comments on a post.
pub struct GetPostCommentsTool {
    page: Arc<PageClient>,
}

impl GetPostCommentsTool {
    /// Creates the tool over an injected page client.
    pub fn new(page: Arc<PageClient>) -> Self {
        Self { page }
    }
}

#[async_trait]
impl McpTool for GetPostCommentsTool {
    fn name(&self) -> &str {
        "fbGetPostComments"
    }

    fn description(&self) -> &str {
        "List the comments on a Facebook post. Episode payloads live in comment bodies."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "postId": {
                    "type": "string",
                    "description": "Facebook post id"
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of comments to fetch (default 25)",
                    "default": 25
                },
                "after": {
                    "type": "string",
                    "description": "Cursor for fetching more comments"
                }
            },
            "required": ["postId"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let post_id = required_str(&input, "postId")?;
        let limit = input
            .get("limit")
            .and_then(Value::as_u64)
            .unwrap_or(25)
            .clamp(1, 100) as u32;
        let after = optional_str(&input, "after");

        let comments = self
            .page
            .post_comments(post_id, limit, after.as_deref())
            .await?;
        serde_json::to_value(comments).map_err(|e| McpError::InternalError(e.to_string()))
    }
}

// ============================================================================
// Tool: fbDeleteComment
// ============================================================================

/// Tool deleting an unwanted comment (spam and the like).
pub struct DeleteCommentTool {
    page: Arc<PageClient>,
}

impl DeleteCommentTool {
    /// Creates the tool over an injected page client.
    pub fn new(page: Arc<PageClient>) -> Self {
        Self { page }
    }
}

#[async_trait]
impl McpTool for DeleteCommentTool {
    fn name(&self) -> &str {
        "fbDeleteComment"
    }

    fn description(&self) -> &str {
        "Delete a comment from the page. Requires confirm=true."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "commentId": {
                    "type": "string",
                    "description": "Id of the comment to delete"
                },
                "confirm": {
                    "type": "boolean",
                    "description": "Deletion confirmation (must be true)",
                    "default": false
                }
            },
            "required": ["commentId", "confirm"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let comment_id = required_str(&input, "commentId")?;

        // The confirmation gate comes before anything touches the
        // network.
        if !input.get("confirm").and_then(Value::as_bool).unwrap_or(false) {
            return Err(McpError::InvalidParams(
                "you must confirm the deletion (confirm=true)".to_string(),
            ));
        }

        self.page.delete_comment(comment_id).await?;
        Ok(json!({ "success": true, "commentId": comment_id }))
    }
}

// ============================================================================
// Tool: fbPostAnime
// ============================================================================

/// Tool publishing an anime record as a page post with its cover photo.
pub struct PostAnimeTool {
    page: Arc<PageClient>,
}

impl PostAnimeTool {
    /// Creates the tool over an injected page client.
    pub fn new(page: Arc<PageClient>) -> Self {
        Self { page }
    }
}

#[async_trait]
impl McpTool for PostAnimeTool {
    fn name(&self) -> &str {
        "fbPostAnime"
    }

    fn description(&self) -> &str {
        "Publish an anime record to the Facebook page with its cover image. \
         Returns the postId and postUrl needed to attach episode comments."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "animeData": {
                    "type": "object",
                    "description": "The anime payload",
                    "properties": {
                        "type": {
                            "type": "string",
                            "description": "Payload type (must be 'anime')",
                            "enum": ["anime"]
                        },
                        "data": {
                            "type": "object",
                            "description": "The anime record",
                            "properties": {
                                "title": {
                                    "type": "object",
                                    "description": "Titles in several languages",
                                    "properties": {
                                        "en": { "type": "string", "description": "English title" },
                                        "jp": { "type": "string", "description": "Japanese title" },
                                        "ar": { "type": "string", "description": "Arabic title" }
                                    },
                                    "required": ["en"]
                                },
                                "description": {
                                    "type": "string",
                                    "description": "Description in Arabic. Generate one from the \
                                                    title and available info when the catalog has none."
                                },
                                "info": {
                                    "type": "object",
                                    "description": "Catalog metadata",
                                    "properties": {
                                        "episodes": { "type": "integer", "description": "Episode count (null if unknown)" },
                                        "year": { "type": "integer", "description": "Release year (null if unknown)" },
                                        "rating": { "type": "number", "description": "Score (null if unknown)" },
                                        "genres": { "type": "array", "items": { "type": "string" }, "description": "Genre list" },
                                        "studio": { "type": "string", "description": "Production studio" },
                                        "rank": { "type": "integer", "description": "Rank (null if unknown)" },
                                        "status": { "type": "string", "description": "Airing status (e.g. 'finished', 'airing')" },
                                        "type": { "type": "string", "description": "Media type (e.g. 'TV', 'MOVIE')" },
                                        "season": { "type": "string", "description": "Season (e.g. 'SPRING', 'WINTER')" }
                                    }
                                },
                                "image": {
                                    "type": "object",
                                    "description": "Cover artwork",
                                    "properties": {
                                        "id": { "type": "string", "description": "Artwork id" },
                                        "url": { "type": "string", "description": "Cover image URL" }
                                    },
                                    "required": ["url"]
                                },
                                "updatedAt": {
                                    "type": "string",
                                    "description": "Last update timestamp (RFC 3339)"
                                }
                            },
                            "required": ["title", "description", "image"]
                        }
                    },
                    "required": ["type", "data"]
                }
            },
            "required": ["animeData"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let anime_data = input
            .get("animeData")
            .cloned()
            .ok_or_else(|| McpError::InvalidParams("missing 'animeData'".to_string()))?;

        let anime: AnimePost = serde_json::from_value(anime_data)
            .map_err(|e| McpError::InvalidParams(format!("invalid anime data: {e}")))?;

        let published = self.page.publish_anime(&anime).await?;
        Ok(json!({
            "success": true,
            "postId": published.post_id,
            "postUrl": published.post_url,
            "note": "To attach episodes to this post, use the fbAddEpisodeComment tool with this postId"
        }))
    }
}

// ============================================================================
// Tool: fbAddEpisodeComment
// ============================================================================

/// Tool attaching an episode record to a post as a comment.
pub struct AddEpisodeCommentTool {
    page: Arc<PageClient>,
}

impl AddEpisodeCommentTool {
    /// Creates the tool over an injected page client.
    pub fn new(page: Arc<PageClient>) -> Self {
        Self { page }
    }
}

#[async_trait]
impl McpTool for AddEpisodeCommentTool {
    fn name(&self) -> &str {
        "fbAddEpisodeComment"
    }

    fn description(&self) -> &str {
        "Attach an episode as a comment on a Facebook anime post."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "postId": {
                    "type": "string",
                    "description": "Id of the post to comment on; returned by fbPostAnime as 'postId'"
                },
                "episode": {
                    "type": "object",
                    "description": "The episode payload",
                    "properties": {
                        "type": {
                            "type": "string",
                            "description": "Payload type (must be 'episode')",
                            "enum": ["episode"]
                        },
                        "episodeNumber": {
                            "type": "string",
                            "description": "Episode number"
                        },
                        "title": {
                            "type": "string",
                            "description": "Episode title"
                        },
                        "addedBy": {
                            "type": "string",
                            "description": "Who added the episode"
                        },
                        "duration": {
                            "type": "string",
                            "description": "Episode duration in minutes"
                        },
                        "isFiller": {
                            "type": "boolean",
                            "description": "Whether the episode is filler",
                            "default": false
                        },
                        "servers": {
                            "type": "array",
                            "description": "Servers hosting the episode",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": {
                                        "type": "string",
                                        "description": "Server name",
                                        "default": "facebook"
                                    },
                                    "quality": {
                                        "type": "string",
                                        "description": "Video quality ('HD' by default, 'SD', 'FHD')",
                                        "default": "HD"
                                    },
                                    "url": {
                                        "type": "string",
                                        "description": format!("Video URL (required format: {VIDEO_URL_FORMAT})"),
                                        "pattern": "^.+\\.facebook\\.com/\\d+/videos/\\d+/?$"
                                    },
                                    "type": {
                                        "type": "string",
                                        "description": "Server type",
                                        "enum": ["facebook", "youtube", "dailymotion", "other"]
                                    }
                                },
                                "required": ["name", "quality", "url", "type"]
                            },
                            "minItems": 1
                        },
                        "releaseDate": {
                            "type": "string",
                            "description": "Episode release date",
                            "format": "date-time"
                        }
                    },
                    "required": [
                        "type",
                        "episodeNumber",
                        "title",
                        "addedBy",
                        "duration",
                        "isFiller",
                        "servers",
                        "releaseDate"
                    ]
                }
            },
            "required": ["postId", "episode"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let post_id = required_str(&input, "postId")?.to_string();
        let episode = input
            .get("episode")
            .cloned()
            .ok_or_else(|| McpError::InvalidParams("missing 'episode'".to_string()))?;

        let episode: Episode = serde_json::from_value(episode)
            .map_err(|e| McpError::InvalidParams(format!("invalid episode data: {e}")))?;

        let comment_id = self.page.add_episode_comment(&post_id, &episode).await?;
        Ok(json!({ "success": true, "commentId": comment_id }))
    }
}
