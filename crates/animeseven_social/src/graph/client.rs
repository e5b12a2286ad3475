//! reqwest-backed implementations of the transport seams.

use super::{FetchedMedia, GraphError, GraphErrorKind, GraphResult, GraphTransport, MediaFetcher};
use crate::config::GraphConfig;
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, instrument};

const USER_AGENT: &str = "AnimeSeven-MCP/0.1.0";

/// Production Graph API transport over HTTPS.
///
/// Appends the configured access token to every request and decodes the
/// platform's structured error body on non-success responses.
#[derive(Clone)]
pub struct GraphClient {
    http: Client,
    config: GraphConfig,
}

impl GraphClient {
    /// Creates a transport for the configured endpoint.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Decodes a Graph response, turning non-success statuses into
    /// [`GraphErrorKind::Api`] when the body carries the platform's
    /// structured error, and [`GraphErrorKind::Request`] otherwise.
    async fn decode(response: reqwest::Response) -> GraphResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::api_error(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Decode(e.to_string())))
    }

    fn api_error(status: u16, body: &str) -> GraphError {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            if let Some(error) = value.get("error") {
                return GraphError::new(GraphErrorKind::Api {
                    code: error.get("code").and_then(Value::as_i64),
                    message: error
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    error_type: error
                        .get("type")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    fbtrace_id: error
                        .get("fbtrace_id")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                });
            }
        }
        GraphError::new(GraphErrorKind::Request(format!("HTTP {status}: {body}")))
    }
}

#[async_trait]
impl GraphTransport for GraphClient {
    #[instrument(skip(self, query), fields(path))]
    async fn get(&self, path: &str, query: &[(&str, String)]) -> GraphResult<Value> {
        let url = self.url(path);
        debug!(url = %url, "Graph API GET");

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("access_token", self.config.access_token.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Request(e.to_string())))?;

        Self::decode(response).await
    }

    #[instrument(skip(self, body), fields(path))]
    async fn post(&self, path: &str, body: Value) -> GraphResult<Value> {
        let url = self.url(path);
        debug!(url = %url, "Graph API POST");

        let response = self
            .http
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("access_token", self.config.access_token.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Request(e.to_string())))?;

        Self::decode(response).await
    }

    #[instrument(skip(self, message, image), fields(path))]
    async fn post_photo(&self, path: &str, message: &str, image: &Path) -> GraphResult<Value> {
        let url = self.url(path);
        debug!(url = %url, "Graph API multipart POST");

        let bytes = tokio::fs::read(image)
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Io(e.to_string())))?;

        let form = multipart::Form::new()
            .text("message", message.to_string())
            .part(
                "source",
                multipart::Part::bytes(bytes).file_name("anime_cover.jpg"),
            );

        let response = self
            .http
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("access_token", self.config.access_token.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Request(e.to_string())))?;

        Self::decode(response).await
    }

    #[instrument(skip(self), fields(path))]
    async fn delete(&self, path: &str) -> GraphResult<Value> {
        let url = self.url(path);
        debug!(url = %url, "Graph API DELETE");

        let response = self
            .http
            .delete(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("access_token", self.config.access_token.as_str())])
            .send()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Request(e.to_string())))?;

        Self::decode(response).await
    }
}

/// Production media downloader.
#[derive(Clone, Default)]
pub struct HttpMediaFetcher {
    http: Client,
}

impl HttpMediaFetcher {
    /// Creates a downloader with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaFetcher for HttpMediaFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> GraphResult<FetchedMedia> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GraphError::new(GraphErrorKind::Request(format!(
                "image download failed: HTTP {status} for {url}"
            ))));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GraphError::new(GraphErrorKind::Request(e.to_string())))?
            .to_vec();

        Ok(FetchedMedia {
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_becomes_api_error() {
        let body = r#"{
            "error": {
                "message": "(#3) Application does not have the capability",
                "type": "OAuthException",
                "code": 3,
                "fbtrace_id": "AbCdEf"
            }
        }"#;
        let err = GraphClient::api_error(403, body);
        match err.kind() {
            GraphErrorKind::Api {
                code,
                message,
                error_type,
                fbtrace_id,
            } => {
                assert_eq!(*code, Some(3));
                assert!(message.contains("capability"));
                assert_eq!(error_type.as_deref(), Some("OAuthException"));
                assert_eq!(fbtrace_id.as_deref(), Some("AbCdEf"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unstructured_error_body_becomes_request_error() {
        let err = GraphClient::api_error(502, "<html>Bad Gateway</html>");
        match err.kind() {
            GraphErrorKind::Request(msg) => {
                assert!(msg.contains("502"));
                assert!(msg.contains("Bad Gateway"));
            }
            other => panic!("expected Request error, got {other:?}"),
        }
    }
}
