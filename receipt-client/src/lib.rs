//! Receipt Client - print orchestration for the POS front-end
//!
//! Fetches the active receipt template, talks to the local print bridge
//! and turns every print attempt into an operator notification.
//!
//! ## Example
//!
//! ```no_run
//! use receipt_client::ClientConfig;
//! use shared::models::SaleData;
//!
//! # async fn run() -> receipt_client::ClientResult<()> {
//! let client = ClientConfig::default().build_client()?;
//! let sale = SaleData::new(serde_json::json!({ "id": 42, "total": "120.00" }));
//! let outcome = client.sale().print_with_fallback(&sale).await;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod http_oneshot;
pub mod notify;
pub mod service;
pub mod template;

pub use bridge::PrintBridge;
pub use client::ReceiptClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, HttpResponse, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;
pub use notify::{InMemorySurface, NotificationPresenter, TokioScheduler};
pub use service::{SaleReceiptService, ShiftClosureReceiptService, messages};
pub use template::{TemplateCache, TemplateFetcher};
