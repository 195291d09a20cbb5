// receipt-client/tests/common/mod.rs
// Fake template API and print bridge built as axum Routers

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use receipt_client::{ClientConfig, OneshotHttpClient, ReceiptClient};
use serde_json::{Value, json};

/// Canned answer of one endpoint
#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    /// Sleep, then answer 200 with the value
    Slow(Duration, Value),
}

impl Reply {
    pub fn ok(value: Value) -> Self {
        Reply::Json(StatusCode::OK, value)
    }

    async fn respond(self) -> Response {
        match self {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Text(status, body) => (status, body).into_response(),
            Reply::Slow(delay, body) => {
                tokio::time::sleep(delay).await;
                Json(body).into_response()
            }
        }
    }
}

/// Shared state of a fake service: replies + what was received
#[derive(Debug, Clone)]
pub struct FakeState {
    pub templates: Arc<Mutex<Reply>>,
    pub health: Arc<Mutex<Reply>>,
    pub print: Arc<Mutex<Reply>>,
    pub template_hits: Arc<AtomicUsize>,
    pub print_hits: Arc<AtomicUsize>,
    pub bodies: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            templates: Arc::new(Mutex::new(Reply::ok(json!([])))),
            health: Arc::new(Mutex::new(Reply::ok(healthy()))),
            print: Arc::new(Mutex::new(Reply::ok(json!({ "message": "printed" })))),
            template_hits: Arc::new(AtomicUsize::new(0)),
            print_hits: Arc::new(AtomicUsize::new(0)),
            bodies: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeState {
    pub fn set_templates(&self, reply: Reply) {
        *self.templates.lock() = reply;
    }

    pub fn set_health(&self, reply: Reply) {
        *self.health.lock() = reply;
    }

    pub fn set_print(&self, reply: Reply) {
        *self.print.lock() = reply;
    }

    pub fn template_hits(&self) -> usize {
        self.template_hits.load(Ordering::SeqCst)
    }

    pub fn print_hits(&self) -> usize {
        self.print_hits.load(Ordering::SeqCst)
    }

    /// (path, body) of every print request, oldest first
    pub fn received(&self) -> Vec<(String, Value)> {
        self.bodies.lock().clone()
    }
}

pub fn healthy() -> Value {
    json!({ "status": "ok", "printer_ready": true, "timestamp": "2026-10-16T09:00:00Z" })
}

pub fn template_collection() -> Value {
    json!([
        {
            "id": 1,
            "name": "Старый шаблон",
            "is_used": false,
            "style": { "global": { "width": 80 }, "components": [] }
        },
        {
            "id": 2,
            "name": "H-58C",
            "is_used": true,
            "style": {
                "global": { "width": 58, "font_family": "monospace" },
                "components": [
                    { "id": "totals", "type": "totals", "order": 3, "enabled": true },
                    { "id": "logo", "type": "image", "order": 0, "enabled": false },
                    { "id": "header", "type": "header", "order": 1, "enabled": true }
                ]
            }
        }
    ])
}

async fn templates(State(state): State<FakeState>) -> Response {
    state.template_hits.fetch_add(1, Ordering::SeqCst);
    let reply = state.templates.lock().clone();
    reply.respond().await
}

async fn health(State(state): State<FakeState>) -> Response {
    let reply = state.health.lock().clone();
    reply.respond().await
}

async fn record(state: &FakeState, path: &str, body: Value) -> Response {
    state.print_hits.fetch_add(1, Ordering::SeqCst);
    state.bodies.lock().push((path.to_string(), body));
    let reply = state.print.lock().clone();
    reply.respond().await
}

async fn print_sale(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    record(&state, "/print-sale-receipt", body).await
}

async fn print_shift(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    record(&state, "/print-shift-closure", body).await
}

async fn test_print(State(state): State<FakeState>) -> Response {
    record(&state, "/test-print", Value::Null).await
}

/// Template API + bridge endpoints on one router
pub fn router(state: FakeState) -> Router {
    Router::new()
        .route("/api/v1/receipt/template/", get(templates))
        .route("/health", get(health))
        .route("/print-sale-receipt", post(print_sale))
        .route("/print-shift-closure", post(print_shift))
        .route("/test-print", post(test_print))
        .with_state(state)
}

/// Receipt client whose both transports hit the fake router
pub fn client(state: &FakeState) -> ReceiptClient<OneshotHttpClient> {
    let http = OneshotHttpClient::new(router(state.clone()));
    ReceiptClient::with_transports(http.clone(), http, &ClientConfig::default())
}
