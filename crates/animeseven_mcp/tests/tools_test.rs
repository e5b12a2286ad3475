//! Tests for the MCP tool layer over counting transport doubles.

use animeseven_catalog::{JikanClient, JikanConfig};
use animeseven_mcp::{
    standard_registry, AddEpisodeCommentTool, DeleteCommentTool, McpError, McpTool, PostAnimeTool,
    TranslateTextTool,
};
use animeseven_social::{
    FetchedMedia, GraphConfig, GraphResult, GraphTransport, MediaFetcher, PageClient,
};
use animeseven_translate::{GeminiClient, GeminiConfig};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Transport double that answers everything and counts calls.
#[derive(Default)]
struct CountingTransport {
    calls: Mutex<Vec<String>>,
}

impl CountingTransport {
    fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphTransport for CountingTransport {
    async fn get(&self, path: &str, _query: &[(&str, String)]) -> GraphResult<Value> {
        self.calls.lock().unwrap().push(format!("get {path}"));
        Ok(json!({ "data": [] }))
    }

    async fn post(&self, path: &str, _body: Value) -> GraphResult<Value> {
        self.calls.lock().unwrap().push(format!("post {path}"));
        Ok(json!({ "id": "comment_1" }))
    }

    async fn post_photo(&self, path: &str, _message: &str, _image: &Path) -> GraphResult<Value> {
        self.calls.lock().unwrap().push(format!("post_photo {path}"));
        Ok(json!({ "id": "777", "post_id": "111_777" }))
    }

    async fn delete(&self, path: &str) -> GraphResult<Value> {
        self.calls.lock().unwrap().push(format!("delete {path}"));
        Ok(json!({ "success": true }))
    }
}

struct ImageFetcher;

#[async_trait]
impl MediaFetcher for ImageFetcher {
    async fn fetch(&self, _url: &str) -> GraphResult<FetchedMedia> {
        Ok(FetchedMedia {
            content_type: Some("image/jpeg".to_string()),
            bytes: vec![0xFF, 0xD8, 0xFF],
        })
    }
}

fn page_client(transport: Arc<CountingTransport>) -> Arc<PageClient> {
    Arc::new(PageClient::new(
        transport,
        Arc::new(ImageFetcher),
        GraphConfig::new("token", "111"),
    ))
}

fn episode_json(url: &str) -> Value {
    json!({
        "type": "episode",
        "episodeNumber": "1",
        "title": "الحلقة 1",
        "addedBy": "Anime Seven",
        "duration": "24",
        "isFiller": false,
        "servers": [
            { "name": "facebook", "quality": "HD", "url": url, "type": "facebook" }
        ],
        "releaseDate": "2024-05-12T18:00:00Z"
    })
}

fn anime_json() -> Value {
    json!({
        "type": "anime",
        "data": {
            "title": { "en": "God Eater", "jp": "", "ar": "آكل الآلهة" },
            "description": "وصف",
            "info": {
                "episodes": 13, "year": 2015, "rating": 7.2,
                "genres": ["Action"], "studio": "ufotable",
                "rank": 2504, "status": "finished", "type": "TV", "season": "SUMMER"
            },
            "image": { "id": "anime-28626", "url": "https://cdn.example.com/ge.jpg" },
            "updatedAt": "2024-05-12T09:30:00Z"
        }
    })
}

// ---------------------------------------------------------------------------
// Registry surface
// ---------------------------------------------------------------------------

#[test]
fn standard_registry_exposes_the_full_tool_surface() {
    let transport = Arc::new(CountingTransport::default());
    let registry = standard_registry(
        page_client(transport),
        Arc::new(JikanClient::new(JikanConfig::default())),
        Arc::new(GeminiClient::new(GeminiConfig::new("test"))),
    );

    let names: Vec<String> = registry
        .list()
        .iter()
        .map(|t| t.name().to_string())
        .collect();
    let expected = [
        "animeSearch",
        "fbAddEpisodeComment",
        "fbDeleteComment",
        "fbGetPagePosts",
        "fbGetPostComments",
        "fbPostAnime",
        "guideAnimeExample",
        "guideAnimeOverview",
        "guideAnimeSteps",
        "guideAnimeTips",
        "translateText",
    ];
    assert_eq!(names, expected);
}

#[tokio::test]
async fn guide_tools_return_workflow_text() {
    let transport = Arc::new(CountingTransport::default());
    let registry = standard_registry(
        page_client(transport),
        Arc::new(JikanClient::new(JikanConfig::default())),
        Arc::new(GeminiClient::new(GeminiConfig::new("test"))),
    );

    for name in [
        "guideAnimeOverview",
        "guideAnimeSteps",
        "guideAnimeTips",
        "guideAnimeExample",
    ] {
        let value = registry.execute(name, json!({})).await.unwrap();
        let text = value.as_str().unwrap();
        assert!(!text.is_empty(), "{name} returned empty text");
    }

    let tips = registry.execute("guideAnimeTips", json!({})).await.unwrap();
    assert!(tips.as_str().unwrap().contains("idorvanity"));
}

// ---------------------------------------------------------------------------
// fbDeleteComment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_without_confirmation_fails_and_issues_no_request() {
    let transport = Arc::new(CountingTransport::default());
    let tool = DeleteCommentTool::new(page_client(transport.clone()));

    let err = tool
        .execute(json!({ "commentId": "c1", "confirm": false }))
        .await
        .unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));

    let err = tool.execute(json!({ "commentId": "c1" })).await.unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));

    assert_eq!(transport.count(), 0, "no delete request may be issued");
}

#[tokio::test]
async fn delete_with_confirmation_succeeds() {
    let transport = Arc::new(CountingTransport::default());
    let tool = DeleteCommentTool::new(page_client(transport.clone()));

    let result = tool
        .execute(json!({ "commentId": "c1", "confirm": true }))
        .await
        .unwrap();

    assert_eq!(result, json!({ "success": true, "commentId": "c1" }));
    assert_eq!(transport.count(), 1);
}

// ---------------------------------------------------------------------------
// fbAddEpisodeComment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_video_url_is_rejected_before_any_request() {
    let transport = Arc::new(CountingTransport::default());
    let tool = AddEpisodeCommentTool::new(page_client(transport.clone()));

    let err = tool
        .execute(json!({
            "postId": "post_1",
            "episode": episode_json("https://www.facebook.com/123/videos/abc/")
        }))
        .await
        .unwrap_err();

    match err {
        McpError::InvalidParams(message) => {
            assert!(message.contains("facebook.com"), "message: {message}")
        }
        other => panic!("expected InvalidParams, got {other:?}"),
    }
    assert_eq!(transport.count(), 0);
}

#[tokio::test]
async fn valid_episode_is_attached() {
    let transport = Arc::new(CountingTransport::default());
    let tool = AddEpisodeCommentTool::new(page_client(transport.clone()));

    let result = tool
        .execute(json!({
            "postId": "post_1",
            "episode": episode_json(
                "https://www.facebook.com/100064560333515/videos/1278144576105246/"
            )
        }))
        .await
        .unwrap();

    assert_eq!(result["success"], true);
    assert_eq!(result["commentId"], "comment_1");
    assert_eq!(transport.count(), 1);
}

#[tokio::test]
async fn structurally_invalid_episode_is_invalid_params() {
    let transport = Arc::new(CountingTransport::default());
    let tool = AddEpisodeCommentTool::new(page_client(transport.clone()));

    let err = tool
        .execute(json!({ "postId": "post_1", "episode": { "type": "episode" } }))
        .await
        .unwrap_err();

    assert!(matches!(err, McpError::InvalidParams(_)));
    assert_eq!(transport.count(), 0);
}

// ---------------------------------------------------------------------------
// fbPostAnime
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_anime_publishes_and_reports_handles() {
    let transport = Arc::new(CountingTransport::default());
    let tool = PostAnimeTool::new(page_client(transport.clone()));

    let result = tool
        .execute(json!({ "animeData": anime_json() }))
        .await
        .unwrap();

    assert_eq!(result["success"], true);
    assert_eq!(result["postId"], "777");
    assert_eq!(result["postUrl"], "https://www.facebook.com/111_777");
}

#[tokio::test]
async fn post_anime_rejects_malformed_payloads() {
    let transport = Arc::new(CountingTransport::default());
    let tool = PostAnimeTool::new(page_client(transport.clone()));

    let err = tool.execute(json!({})).await.unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));

    let err = tool
        .execute(json!({ "animeData": { "type": "anime" } }))
        .await
        .unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));

    assert_eq!(transport.count(), 0);
}

// ---------------------------------------------------------------------------
// translateText
// ---------------------------------------------------------------------------

#[tokio::test]
async fn translate_requires_text_and_target() {
    let tool = TranslateTextTool::new(Arc::new(GeminiClient::new(GeminiConfig::new("test"))));

    let err = tool.execute(json!({ "text": "Hello" })).await.unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));

    let err = tool
        .execute(json!({ "targetLanguage": "Arabic" }))
        .await
        .unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

#[test]
fn schemas_declare_their_contracts() {
    let transport = Arc::new(CountingTransport::default());
    let page = page_client(transport);

    let delete = DeleteCommentTool::new(page.clone());
    let schema = delete.input_schema();
    assert_eq!(schema["required"], json!(["commentId", "confirm"]));

    let add = AddEpisodeCommentTool::new(page);
    let schema = add.input_schema();
    let url = &schema["properties"]["episode"]["properties"]["servers"]["items"]["properties"]
        ["url"];
    assert_eq!(url["pattern"], "^.+\\.facebook\\.com/\\d+/videos/\\d+/?$");
}
