// receipt-client/src/http_oneshot.rs
// Oneshot HTTP client - in-memory calls against an axum Router

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use tower::ServiceExt;

use crate::http::{HttpClient, HttpResponse};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-process)
///
/// Drives an axum `Router` through Tower's `oneshot`, so a fake print bridge
/// or template API can stand in for the real services without sockets.
///
/// # Example
///
/// ```ignore
/// use axum::{Json, Router, routing::get};
/// use receipt_client::OneshotHttpClient;
///
/// let bridge = Router::new().route("/health", get(|| async {
///     Json(serde_json::json!({ "status": "ok", "printer_ready": true, "timestamp": "" }))
/// }));
/// let client = OneshotHttpClient::new(bridge);
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn uri(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/'))
    }

    fn build_request(method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(Self::uri(path))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))
    }

    async fn execute(&self, request: Request<Body>) -> ClientResult<HttpResponse> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Connection(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Connection(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get(&self, path: &str) -> ClientResult<HttpResponse> {
        let request = Self::build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<HttpResponse> {
        let bytes = serde_json::to_vec(body)?;
        let request = Self::build_request(Method::POST, path, Body::from(bytes))?;
        self.execute(request).await
    }

    async fn post_empty(&self, path: &str) -> ClientResult<HttpResponse> {
        let request = Self::build_request(Method::POST, path, Body::empty())?;
        self.execute(request).await
    }
}
