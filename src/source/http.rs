//! HTTP content source.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{RawContentItem, SourceConfig};
use crate::source::{ContentSource, parse_items, published_newest_first};
use crate::utils::http::create_async_client;

/// Fetches content items from a remote JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: Client,
    endpoint: String,
}

impl HttpContentSource {
    /// Build a source with its own client from the source settings.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self::with_client(
            create_async_client(config)?,
            config.endpoint.clone(),
        ))
    }

    /// Build a source around an existing client.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_published(&self) -> Result<Vec<RawContentItem>> {
        log::debug!("Fetching content from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(&self.endpoint, status.as_u16()));
        }

        let body = response.bytes().await?;
        let items = parse_items(&body)?;
        Ok(published_newest_first(items))
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one canned response on a local port and return its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/content.json")
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_error() {
        let url = serve_once("503 Service Unavailable", "[]").await;
        let source = HttpContentSource::with_client(local_client(), url.clone());

        match source.fetch_published().await {
            Err(AppError::Fetch { endpoint, status }) => {
                assert_eq!(status, 503);
                assert_eq!(endpoint, url);
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_returns_published_newest_first() {
        let body = r#"[
            {"slug": "older", "status": "published", "publishDate": "2024-01-01"},
            {"slug": "draft", "status": "draft", "publishDate": "2024-06-01"},
            {"slug": "newer", "status": "published", "publishDate": "2024-03-01T10:00:00"}
        ]"#;
        let url = serve_once("200 OK", body).await;
        let source = HttpContentSource::with_client(local_client(), url);

        let items = source.fetch_published().await.unwrap();
        let slugs: Vec<_> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_non_array_body_fails() {
        let url = serve_once("200 OK", r#"{"items": []}"#).await;
        let source = HttpContentSource::with_client(local_client(), url);

        let err = source.fetch_published().await.unwrap_err();
        assert!(!err.is_fetch());
    }
}
