//! Client configuration

use std::time::Duration;

use crate::{ClientResult, NetworkHttpClient, ReceiptClient};

/// Default print bridge address (local daemon)
pub const DEFAULT_BRIDGE_URL: &str = "http://localhost:3001";

/// Default template API address
pub const DEFAULT_TEMPLATE_API_URL: &str = "http://localhost:8000";

/// Client configuration for the template API and the print bridge
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Print bridge base URL (e.g., "http://localhost:3001")
    pub bridge_url: String,

    /// Configuration API base URL serving receipt templates
    pub template_api_url: String,

    /// Budget for `GET /health`
    pub health_timeout: Duration,

    /// Budget for print requests
    pub print_timeout: Duration,

    /// Budget for the template request
    pub template_timeout: Duration,

    /// How long a notification stays on screen
    pub notification_ttl: Duration,
}

impl ClientConfig {
    /// Create a configuration with default timeouts
    pub fn new(bridge_url: impl Into<String>, template_api_url: impl Into<String>) -> Self {
        Self {
            bridge_url: bridge_url.into(),
            template_api_url: template_api_url.into(),
            health_timeout: Duration::from_secs(5),
            print_timeout: Duration::from_secs(10),
            template_timeout: Duration::from_secs(10),
            notification_ttl: Duration::from_secs(5),
        }
    }

    /// Set the print bridge URL
    pub fn with_bridge_url(mut self, url: impl Into<String>) -> Self {
        self.bridge_url = url.into();
        self
    }

    /// Set the template API URL
    pub fn with_template_api_url(mut self, url: impl Into<String>) -> Self {
        self.template_api_url = url.into();
        self
    }

    /// Set the health check timeout
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    /// Set the print timeout
    pub fn with_print_timeout(mut self, timeout: Duration) -> Self {
        self.print_timeout = timeout;
        self
    }

    /// Set the template fetch timeout
    pub fn with_template_timeout(mut self, timeout: Duration) -> Self {
        self.template_timeout = timeout;
        self
    }

    /// Set the notification lifetime
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Create a network-backed receipt client from this configuration
    pub fn build_client(&self) -> ClientResult<ReceiptClient<NetworkHttpClient>> {
        ReceiptClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BRIDGE_URL, DEFAULT_TEMPLATE_API_URL)
    }
}
