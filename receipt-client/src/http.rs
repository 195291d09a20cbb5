// receipt-client/src/http.rs
// HTTP transport - network client and shared response type

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

/// Raw HTTP answer, before any endpoint-specific interpretation
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text (lossy)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Reason phrase of the status, empty for unknown codes
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// e.g. "HTTP 502 Bad Gateway"
    pub fn status_line(&self) -> String {
        format!("HTTP {} {}", self.status.as_u16(), self.status_text())
            .trim_end()
            .to_string()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

/// HTTP transport trait
///
/// Paths are relative to the transport's base URL. Non-success statuses are
/// returned as `Ok`; interpreting them is up to the caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str) -> ClientResult<HttpResponse>;
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<HttpResponse>;
    async fn post_empty(&self, path: &str) -> ClientResult<HttpResponse>;
}

/// Run a transport call within `limit`
pub(crate) async fn with_timeout<T, F>(limit: Duration, future: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    tokio::time::timeout(limit, future)
        .await
        .map_err(|_| ClientError::Timeout(limit))?
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        if base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL is empty".into()));
        }
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read(response: reqwest::Response) -> ClientResult<HttpResponse> {
        let status = response.status();
        let body = response.bytes().await?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get(&self, path: &str) -> ClientResult<HttpResponse> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::read(response).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<HttpResponse> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::read(response).await
    }

    async fn post_empty(&self, path: &str) -> ClientResult<HttpResponse> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::read(response).await
    }
}
