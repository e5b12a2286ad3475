//! Model Context Protocol (MCP) server for the Anime Seven publishing
//! tools.
//!
//! This crate exposes the page publishing workflow, the catalog search
//! and the translation service as standardized tools an LLM agent can
//! call over stdio.
//!
//! # Features
//!
//! - **Facebook tools**: list posts and comments, delete comments,
//!   publish anime records, attach episode comments
//! - **Catalog tool**: search the anime catalog by title
//! - **Translation tool**: translate text (Arabic-focused)
//! - **Guide tools**: static instructions walking an agent through the
//!   whole publishing workflow
//!
//! # Usage
//!
//! ```no_run
//! use animeseven_mcp::{standard_registry, McpServer};
//! use animeseven_catalog::{JikanClient, JikanConfig};
//! use animeseven_social::{GraphConfig, PageClient};
//! use animeseven_translate::{GeminiClient, GeminiConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = standard_registry(
//!         Arc::new(PageClient::from_config(GraphConfig::from_env())),
//!         Arc::new(JikanClient::new(JikanConfig::default())),
//!         Arc::new(GeminiClient::new(GeminiConfig::from_env())),
//!     );
//!     let server = McpServer::builder()
//!         .name("animeseven-mcp-tools")
//!         .version(env!("CARGO_PKG_VERSION"))
//!         .tools(registry)
//!         .build()?;
//!     server.run_stdio().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{McpServer, McpServerBuilder};
pub use tools::{
    standard_registry, AddEpisodeCommentTool, AnimeSearchTool, DeleteCommentTool,
    GetPagePostsTool, GetPostCommentsTool, McpTool, PostAnimeTool, ToolRegistry,
    TranslateTextTool,
};
