//! Anime Seven MCP server binary.

use animeseven_catalog::{JikanClient, JikanConfig};
use animeseven_mcp::{standard_registry, McpServer};
use animeseven_social::{GraphConfig, PageClient};
use animeseven_translate::{GeminiClient, GeminiConfig};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Diagnostics go to stderr; stdout belongs to the protocol stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Starting Anime Seven MCP server");

    // Configuration is read once here and injected; missing credentials
    // warn but do not stop the server, so the other tools stay usable.
    let page = Arc::new(PageClient::from_config(GraphConfig::from_env()));
    let catalog = Arc::new(JikanClient::new(JikanConfig::default()));
    let translator = Arc::new(GeminiClient::new(GeminiConfig::from_env()));

    let registry = standard_registry(page, catalog, translator);

    let server = McpServer::builder()
        .name("animeseven-mcp-tools")
        .version(env!("CARGO_PKG_VERSION"))
        .tools(registry)
        .build()?;

    server.run_stdio().await?;

    Ok(())
}
