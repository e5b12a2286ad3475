//! Error types for the MCP server.

use animeseven_catalog::CatalogError;
use animeseven_social::GraphError;
use animeseven_translate::TranslateError;

/// Errors surfaced to the protocol client.
#[derive(Debug, Clone, derive_more::Display)]
pub enum McpError {
    /// A request line was not valid JSON.
    #[display("Parse error: {_0}")]
    ParseError(String),

    /// The request envelope was malformed.
    #[display("Invalid request: {_0}")]
    InvalidRequest(String),

    /// No tool registered under the requested name.
    #[display("Tool not found: {_0}")]
    ToolNotFound(String),

    /// Caller-supplied arguments violate a tool's contract.
    #[display("Invalid params: {_0}")]
    InvalidParams(String),

    /// Remote platform call failed, or an unclassified failure.
    #[display("Internal error: {_0}")]
    InternalError(String),
}

impl std::error::Error for McpError {}

impl McpError {
    /// JSON-RPC error code for this error.
    pub fn code(&self) -> i64 {
        match self {
            McpError::ParseError(_) => -32700,
            McpError::InvalidRequest(_) => -32600,
            McpError::ToolNotFound(_) => -32601,
            McpError::InvalidParams(_) => -32602,
            McpError::InternalError(_) => -32603,
        }
    }
}

impl From<GraphError> for McpError {
    fn from(err: GraphError) -> Self {
        if err.kind().is_caller_error() {
            McpError::InvalidParams(err.kind().to_string())
        } else {
            // Known platform error codes are rewritten into actionable
            // guidance; everything else keeps the code and text.
            McpError::InternalError(err.kind().guidance())
        }
    }
}

impl From<CatalogError> for McpError {
    fn from(err: CatalogError) -> Self {
        McpError::InternalError(err.kind().to_string())
    }
}

impl From<TranslateError> for McpError {
    fn from(err: TranslateError) -> Self {
        if err.kind().is_caller_error() {
            McpError::InvalidParams(err.kind().to_string())
        } else {
            McpError::InternalError(err.kind().to_string())
        }
    }
}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
