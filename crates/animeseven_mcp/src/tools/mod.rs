//! Tool implementations for the MCP server.

mod catalog;
mod facebook;
mod guides;
mod translate;

pub use catalog::AnimeSearchTool;
pub use facebook::{
    AddEpisodeCommentTool, DeleteCommentTool, GetPagePostsTool, GetPostCommentsTool, PostAnimeTool,
};
pub use guides::guide_tools;
pub use translate::TranslateTextTool;

use crate::{McpError, McpResult};
use animeseven_catalog::JikanClient;
use animeseven_social::PageClient;
use animeseven_translate::GeminiClient;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for MCP tools.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Returns the tool name.
    fn name(&self) -> &str;

    /// Returns the tool description for the LLM.
    fn description(&self) -> &str;

    /// Returns the input schema as JSON Schema.
    fn input_schema(&self) -> Value;

    /// Executes the tool with the given input.
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Registry for managing MCP tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Lists all registered tools.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        let mut tools: Vec<_> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    /// Executes a tool by name.
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        tool.execute(input).await
    }

    /// Gets the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builds the full tool set over the injected service clients.
pub fn standard_registry(
    page: Arc<PageClient>,
    catalog: Arc<JikanClient>,
    translator: Arc<GeminiClient>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Page tools
    registry.register(Arc::new(GetPagePostsTool::new(page.clone())));
    registry.register(Arc::new(GetPostCommentsTool::new(page.clone())));
    registry.register(Arc::new(DeleteCommentTool::new(page.clone())));
    registry.register(Arc::new(PostAnimeTool::new(page.clone())));
    registry.register(Arc::new(AddEpisodeCommentTool::new(page)));

    // Catalog and translation
    registry.register(Arc::new(AnimeSearchTool::new(catalog)));
    registry.register(Arc::new(TranslateTextTool::new(translator)));

    // Workflow guides
    for tool in guide_tools() {
        registry.register(tool);
    }

    tracing::info!("tool registry initialized with {} tools", registry.len());
    registry
}

/// Plucks a required string argument out of a tool input.
pub(crate) fn required_str<'a>(input: &'a Value, name: &str) -> McpResult<&'a str> {
    input
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| McpError::InvalidParams(format!("missing '{name}'")))
}

/// Plucks an optional string argument out of a tool input.
pub(crate) fn optional_str(input: &Value, name: &str) -> Option<String> {
    input
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
}
