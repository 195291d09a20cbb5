//! Print bridge client
//!
//! Talks to the local print daemon that owns the thermal printer:
//! - `GET /health` readiness probe
//! - `POST /print-sale-receipt` sale data + template
//! - `POST /print-shift-closure` shift data only
//! - `POST /test-print` built-in test page
//!
//! Every call is a single attempt; nothing is retried here.

use std::time::Duration;

use shared::models::{
    BridgeErrorBody, HealthStatus, PrintServiceResponse, ReceiptTemplate, SaleData,
    SaleReceiptJob, ShiftClosureData,
};
use tracing::{info, instrument, warn};

use crate::http::{HttpClient, HttpResponse, with_timeout};
use crate::{ClientError, ClientResult};

pub const HEALTH_PATH: &str = "health";
pub const PRINT_SALE_PATH: &str = "print-sale-receipt";
pub const PRINT_SHIFT_PATH: &str = "print-shift-closure";
pub const TEST_PRINT_PATH: &str = "test-print";

#[derive(Debug, Clone)]
pub struct PrintBridge<C> {
    http: C,
    health_timeout: Duration,
    print_timeout: Duration,
}

impl<C: HttpClient> PrintBridge<C> {
    pub fn new(http: C, health_timeout: Duration, print_timeout: Duration) -> Self {
        Self {
            http,
            health_timeout,
            print_timeout,
        }
    }

    /// Readiness probe
    ///
    /// Any failure (timeout, refused connection, non-success status, body
    /// that is not JSON) is reported as `ServiceUnavailable`.
    #[instrument(skip(self))]
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let response = match with_timeout(self.health_timeout, self.http.get(HEALTH_PATH)).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Print bridge health check failed");
                return Err(ClientError::ServiceUnavailable {
                    timed_out: e.is_timeout(),
                    reason: e.to_string(),
                });
            }
        };

        if !response.is_success() {
            warn!(status = response.status.as_u16(), "Print bridge unhealthy");
            return Err(ClientError::ServiceUnavailable {
                reason: response.status_line(),
                timed_out: false,
            });
        }

        let health: HealthStatus = match response.json() {
            Ok(health) => health,
            Err(e) => {
                warn!(error = %e, "Print bridge health body unreadable");
                return Err(ClientError::ServiceUnavailable {
                    reason: e.to_string(),
                    timed_out: false,
                });
            }
        };
        info!(
            status = ?health.status(),
            printer_ready = health.printer_ready(),
            "Print bridge healthy"
        );
        Ok(health)
    }

    #[instrument(skip_all, fields(sale_id = ?sale.id(), template_id = template.id))]
    pub async fn print_sale(
        &self,
        sale: &SaleData,
        template: &ReceiptTemplate,
    ) -> ClientResult<PrintServiceResponse> {
        let job = SaleReceiptJob {
            sale_data: sale,
            template,
        };
        let response =
            with_timeout(self.print_timeout, self.http.post(PRINT_SALE_PATH, &job)).await?;
        Self::into_print_response(response)
    }

    #[instrument(skip_all, fields(shift_id = ?shift.id()))]
    pub async fn print_shift_closure(
        &self,
        shift: &ShiftClosureData,
    ) -> ClientResult<PrintServiceResponse> {
        let response =
            with_timeout(self.print_timeout, self.http.post(PRINT_SHIFT_PATH, shift)).await?;
        Self::into_print_response(response)
    }

    #[instrument(skip(self))]
    pub async fn test_print(&self) -> ClientResult<PrintServiceResponse> {
        let response =
            with_timeout(self.print_timeout, self.http.post_empty(TEST_PRINT_PATH)).await?;
        Self::into_print_response(response)
    }

    fn into_print_response(response: HttpResponse) -> ClientResult<PrintServiceResponse> {
        if !response.is_success() {
            let message = serde_json::from_slice::<BridgeErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| response.status_line());
            warn!(status = response.status.as_u16(), error = %message, "Print bridge rejected job");
            return Err(ClientError::PrintService(message));
        }

        let body: PrintServiceResponse = response.json()?;
        info!(message = ?body.message(), "Print job accepted");
        Ok(body)
    }
}
