//! Catalog search tool for MCP.

use crate::tools::{required_str, McpTool};
use crate::{McpError, McpResult};
use animeseven_catalog::JikanClient;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// Tool searching the anime catalog by title.
pub struct AnimeSearchTool {
    catalog: Arc<JikanClient>,
}

impl AnimeSearchTool {
    /// Creates the tool over an injected catalog client.
    pub fn new(catalog: Arc<JikanClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl McpTool for AnimeSearchTool {
    fn name(&self) -> &str {
        "animeSearch"
    }

    fn description(&self) -> &str {
        "Search anime information by title."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Anime title to search for"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results (default 5)",
                    "default": 5
                }
            },
            "required": ["title"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let title = required_str(&input, "title")?;
        let limit = input
            .get("limit")
            .and_then(Value::as_u64)
            .unwrap_or(5)
            .clamp(1, 25) as u32;

        let results = self.catalog.search(title, limit).await?;
        serde_json::to_value(results).map_err(|e| McpError::InternalError(e.to_string()))
    }
}
