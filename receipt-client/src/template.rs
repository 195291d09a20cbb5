//! Receipt template cache and fetcher

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use shared::models::ReceiptTemplate;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::http::{HttpClient, with_timeout};
use crate::{ClientError, ClientResult};

/// Template collection endpoint of the configuration API
pub const TEMPLATE_PATH: &str = "api/v1/receipt/template/";

/// Active template cache
///
/// Filled once, kept until explicitly invalidated. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct TemplateCache {
    inner: Arc<RwLock<Option<Arc<ReceiptTemplate>>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Arc<ReceiptTemplate>> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, template: Arc<ReceiptTemplate>) {
        *self.inner.write().await = Some(template);
    }

    /// Drop the cached template; the next fetch goes to the network
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_none()
    }
}

/// Fetches the active receipt template from the configuration API
#[derive(Debug, Clone)]
pub struct TemplateFetcher<C> {
    http: C,
    cache: TemplateCache,
    timeout: Duration,
}

impl<C: HttpClient> TemplateFetcher<C> {
    pub fn new(http: C, timeout: Duration) -> Self {
        Self {
            http,
            cache: TemplateCache::new(),
            timeout,
        }
    }

    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    /// Active template, from cache when available
    ///
    /// `Ok(None)` means the API has no template flagged `is_used`; that is
    /// an expected state, not a failure. Concurrent first calls may each
    /// reach the network.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> ClientResult<Option<Arc<ReceiptTemplate>>> {
        if let Some(template) = self.cache.get().await {
            debug!(template_id = template.id, "Using cached receipt template");
            return Ok(Some(template));
        }

        let response = with_timeout(self.timeout, self.http.get(TEMPLATE_PATH)).await?;
        if !response.is_success() {
            return Err(ClientError::Fetch {
                status: response.status.as_u16(),
                text: response.status_text().to_string(),
            });
        }

        // Entries stay undecoded until one is selected
        let entries: Vec<Value> = response.json()?;
        for entry in &entries {
            debug!(
                template_id = %entry.get("id").unwrap_or(&serde_json::Value::Null),
                name = %entry.get("name").unwrap_or(&serde_json::Value::Null),
                is_used = %entry.get("is_used").unwrap_or(&serde_json::Value::Null),
                "Fetched receipt template"
            );
        }

        let Some(entry) = ReceiptTemplate::select_active(&entries) else {
            let listing = entries
                .iter()
                .map(|entry| {
                    format!(
                        "{} (is_used={})",
                        entry.get("name").unwrap_or(&Value::Null),
                        entry.get("is_used").unwrap_or(&Value::Null)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            warn!(templates = %listing, "No active receipt template");
            return Ok(None);
        };

        let active = ReceiptTemplate::deserialize(entry)
            .map_err(|e| ClientError::InvalidResponse(format!("active receipt template: {e}")))?;

        for component in active.active_components() {
            debug!(
                id = %component.id,
                kind = %component.kind,
                order = component.order,
                "Template component"
            );
        }

        let active = Arc::new(active);
        self.cache.set(active.clone()).await;
        info!(template_id = active.id, name = %active.name, "Receipt template cached");
        Ok(Some(active))
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
