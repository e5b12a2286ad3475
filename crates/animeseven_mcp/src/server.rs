//! MCP server over newline-delimited JSON-RPC 2.0.
//!
//! The protocol stream owns stdout, so nothing else in the process may
//! print there; diagnostics go to stderr through tracing.

use crate::tools::ToolRegistry;
use crate::{McpError, McpResult};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// Protocol revision answered to `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server dispatching tool calls over stdio.
pub struct McpServer {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl McpServer {
    /// Creates a new server builder.
    pub fn builder() -> McpServerBuilder {
        McpServerBuilder::default()
    }

    /// Runs the server over stdin/stdout until the stream closes.
    #[instrument(skip(self))]
    pub async fn run_stdio(self) -> McpResult<()> {
        info!(
            name = %self.name,
            version = %self.version,
            tools = self.tools.len(),
            "MCP server ready, listening on stdio"
        );
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serves the protocol over arbitrary byte streams.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(reader).lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| McpError::InternalError(format!("stdin read failed: {e}")))?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                let mut out = serde_json::to_string(&response)
                    .map_err(|e| McpError::InternalError(e.to_string()))?;
                out.push('\n');
                writer
                    .write_all(out.as_bytes())
                    .await
                    .map_err(|e| McpError::InternalError(format!("stdout write failed: {e}")))?;
                writer
                    .flush()
                    .await
                    .map_err(|e| McpError::InternalError(format!("stdout flush failed: {e}")))?;
            }
        }

        info!("input stream closed, shutting down");
        Ok(())
    }

    /// Handles one request line. Returns `None` for notifications, which
    /// are never answered.
    async fn handle_line(&self, line: &str) -> Option<Value> {
        let request: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable request line");
                return Some(error_response(
                    Value::Null,
                    &McpError::ParseError(e.to_string()),
                ));
            }
        };

        let id = request.get("id").cloned();
        let method = request
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let params = request.get("params").cloned().unwrap_or(json!({}));

        debug!(method = %method, "request");

        let Some(id) = id else {
            // Notification: process nothing, answer nothing.
            return None;
        };

        let result = self.dispatch(&method, params).await;
        Some(match result {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(err) => error_response(id, &err),
        })
    }

    async fn dispatch(&self, method: &str, params: Value) -> McpResult<Value> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": self.name, "version": self.version }
            })),
            "ping" => Ok(json!({})),
            "tools/list" => {
                let tools: Vec<Value> = self
                    .tools
                    .list()
                    .iter()
                    .map(|tool| {
                        json!({
                            "name": tool.name(),
                            "description": tool.description(),
                            "inputSchema": tool.input_schema(),
                        })
                    })
                    .collect();
                Ok(json!({ "tools": tools }))
            }
            "tools/call" => {
                let name = params
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        McpError::InvalidRequest("tools/call requires a tool name".to_string())
                    })?;
                let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

                let value = self.tools.execute(name, arguments).await?;
                Ok(json!({
                    "content": [{ "type": "text", "text": render(&value) }]
                }))
            }
            other => Err(McpError::ToolNotFound(format!("unknown method: {other}"))),
        }
    }
}

/// Renders a tool result as response text: strings stay as they are,
/// everything else is pretty-printed JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn error_response(id: Value, err: &McpError) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": err.code(), "message": err.to_string() }
    })
}

/// Builder for the MCP server.
#[derive(Default)]
pub struct McpServerBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
}

impl McpServerBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the server.
    pub fn build(self) -> McpResult<McpServer> {
        Ok(McpServer {
            name: self.name.unwrap_or_else(|| "animeseven-mcp-tools".to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools: self.tools.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::McpTool;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct UpperTool;

    #[async_trait]
    impl McpTool for UpperTool {
        fn name(&self) -> &str {
            "upper"
        }

        fn description(&self) -> &str {
            "Uppercases a text"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object", "properties": { "text": { "type": "string" } } })
        }

        async fn execute(&self, input: Value) -> McpResult<Value> {
            let text = input
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| McpError::InvalidParams("missing 'text'".to_string()))?;
            Ok(json!({ "text": text.to_uppercase() }))
        }
    }

    fn server() -> McpServer {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(UpperTool));
        McpServer::builder()
            .name("test-server")
            .version("0.0.1")
            .tools(tools)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn initialize_answers_server_info() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .await
            .unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "test-server");
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn notifications_are_not_answered() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn tools_list_reports_registered_tools() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .await
            .unwrap();
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "upper");
        assert!(tools[0]["inputSchema"]["properties"]["text"].is_object());
    }

    #[tokio::test]
    async fn tools_call_wraps_result_as_text_content() {
        let response = server()
            .handle_line(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"upper","arguments":{"text":"abc"}}}"#,
            )
            .await
            .unwrap();
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("ABC"));
    }

    #[tokio::test]
    async fn invalid_tool_arguments_become_invalid_params() {
        let response = server()
            .handle_line(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"upper","arguments":{}}}"#,
            )
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let response = server()
            .handle_line(r#"{"jsonrpc":"2.0","id":5,"method":"bogus/method"}"#)
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn garbage_line_is_a_parse_error() {
        let response = server().handle_line("{not json").await.unwrap();
        assert_eq!(response["error"]["code"], -32700);
        assert_eq!(response["id"], Value::Null);
    }

    #[tokio::test]
    async fn serve_answers_over_byte_streams() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
        );
        let mut output = Vec::new();

        server()
            .serve(input.as_bytes(), &mut output)
            .await
            .unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&output)
            .unwrap()
            .lines()
            .collect();
        // Two requests answered, the notification skipped.
        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], 1);
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["id"], 2);
    }
}
