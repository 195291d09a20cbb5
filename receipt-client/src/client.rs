//! Receipt client - wires both services from one configuration

use crate::bridge::PrintBridge;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::service::{SaleReceiptService, ShiftClosureReceiptService};
use crate::template::TemplateFetcher;
use crate::{ClientConfig, ClientResult};

/// Entry point handed to sale and shift workflows
///
/// Constructed explicitly and passed by reference; clones share the
/// template cache.
#[derive(Debug, Clone)]
pub struct ReceiptClient<C> {
    sale: SaleReceiptService<C>,
    shift: ShiftClosureReceiptService<C>,
}

impl ReceiptClient<NetworkHttpClient> {
    /// Network transports for both the template API and the bridge
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let template_http = NetworkHttpClient::new(&config.template_api_url)?;
        let bridge_http = NetworkHttpClient::new(&config.bridge_url)?;
        Ok(Self::with_transports(template_http, bridge_http, config))
    }
}

impl<C: HttpClient + Clone> ReceiptClient<C> {
    /// Custom transports (e.g. `OneshotHttpClient` in tests)
    pub fn with_transports(template_http: C, bridge_http: C, config: &ClientConfig) -> Self {
        let templates = TemplateFetcher::new(template_http, config.template_timeout);
        let bridge = PrintBridge::new(bridge_http, config.health_timeout, config.print_timeout);

        Self {
            sale: SaleReceiptService::new(templates, bridge.clone()),
            shift: ShiftClosureReceiptService::new(bridge),
        }
    }

    pub fn sale(&self) -> &SaleReceiptService<C> {
        &self.sale
    }

    pub fn shift(&self) -> &ShiftClosureReceiptService<C> {
        &self.shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config() {
        let client = ClientConfig::default().build_client().unwrap();
        assert!(client.sale().templates().cache().is_empty().await);
    }

    #[test]
    fn test_from_config_rejects_empty_url() {
        let config = ClientConfig::default().with_bridge_url("");
        assert!(ReceiptClient::from_config(&config).is_err());
    }
}
