//! Sale and shift-closure receipt services
//!
//! Thin orchestration over [`TemplateFetcher`] and [`PrintBridge`]. The
//! `print_with_fallback` variants never fail: they fold the result into a
//! [`PrintOutcome`] ready for the notification presenter.

use std::sync::Arc;

use shared::models::{
    HealthStatus, PrintOutcome, PrintServiceResponse, ReceiptTemplate, SaleData, ShiftClosureData,
};
use tracing::{error, info, instrument, warn};

use crate::bridge::PrintBridge;
use crate::http::HttpClient;
use crate::template::TemplateFetcher;
use crate::{ClientError, ClientResult};

/// Operator-facing texts
pub mod messages {
    pub const SALE_PRINTED: &str = "Чек напечатан на термопринтере H-58C";
    pub const SALE_PRINT_FAILED: &str = "Не удалось напечатать чек на термопринтере";
    pub const SHIFT_PRINTED: &str = "Отчёт о закрытии смены напечатан на термопринтере H-58C";
    pub const SHIFT_PRINT_FAILED: &str = "Не удалось напечатать отчёт о закрытии смены";
    pub const TEST_PRINTED: &str = "Тестовый чек напечатан";
    pub const TEST_PRINT_FAILED: &str = "Не удалось напечатать тестовый чек";
}

fn fold_outcome<T>(result: ClientResult<T>, success: &str, failure: &str) -> PrintOutcome {
    match result {
        Ok(_) => PrintOutcome::thermal(success),
        Err(e) => PrintOutcome::failed(failure, e.to_string()),
    }
}

/// Sale receipt printing (requires an active template)
#[derive(Debug, Clone)]
pub struct SaleReceiptService<C> {
    templates: TemplateFetcher<C>,
    bridge: PrintBridge<C>,
}

impl<C: HttpClient> SaleReceiptService<C> {
    pub fn new(templates: TemplateFetcher<C>, bridge: PrintBridge<C>) -> Self {
        Self { templates, bridge }
    }

    pub fn templates(&self) -> &TemplateFetcher<C> {
        &self.templates
    }

    /// Active template (cached after the first successful fetch)
    pub async fn active_template(&self) -> ClientResult<Option<Arc<ReceiptTemplate>>> {
        self.templates.fetch().await
    }

    pub async fn check_printer(&self) -> ClientResult<HealthStatus> {
        self.bridge.health().await
    }

    /// One dispatch attempt
    #[instrument(skip_all, fields(sale_id = ?sale.id()))]
    pub async fn print_sale_receipt(&self, sale: &SaleData) -> ClientResult<PrintServiceResponse> {
        let template = self.templates.fetch().await?.ok_or(ClientError::NoTemplate)?;
        let prepared = template.prepared();
        self.bridge.print_sale(sale, &prepared).await
    }

    pub async fn print_with_fallback(&self, sale: &SaleData) -> PrintOutcome {
        let result = self.print_sale_receipt(sale).await;
        if let Err(e) = &result {
            error!(error = %e, "Sale receipt print failed");
        }
        fold_outcome(result, messages::SALE_PRINTED, messages::SALE_PRINT_FAILED)
    }

    /// Health probe followed by the bridge's test page
    #[instrument(skip(self))]
    pub async fn test_print(&self) -> ClientResult<PrintServiceResponse> {
        let health = self.bridge.health().await?;
        if !health.printer_ready() {
            warn!(status = ?health.status(), "Printer reports not ready, sending test page anyway");
        }
        let response = self.bridge.test_print().await?;
        info!(message = ?response.message(), "Test receipt printed");
        Ok(response)
    }

    pub async fn test_print_outcome(&self) -> PrintOutcome {
        fold_outcome(
            self.test_print().await,
            messages::TEST_PRINTED,
            messages::TEST_PRINT_FAILED,
        )
    }
}

/// Shift-closure receipt printing
///
/// Never consults the template; the bridge formats shift reports itself.
#[derive(Debug, Clone)]
pub struct ShiftClosureReceiptService<C> {
    bridge: PrintBridge<C>,
}

impl<C: HttpClient> ShiftClosureReceiptService<C> {
    pub fn new(bridge: PrintBridge<C>) -> Self {
        Self { bridge }
    }

    pub async fn check_printer(&self) -> ClientResult<HealthStatus> {
        self.bridge.health().await
    }

    pub async fn print_shift_closure_receipt(
        &self,
        shift: &ShiftClosureData,
    ) -> ClientResult<PrintServiceResponse> {
        self.bridge.print_shift_closure(shift).await
    }

    pub async fn print_with_fallback(&self, shift: &ShiftClosureData) -> PrintOutcome {
        let result = self.print_shift_closure_receipt(shift).await;
        if let Err(e) = &result {
            error!(error = %e, "Shift closure receipt print failed");
        }
        fold_outcome(result, messages::SHIFT_PRINTED, messages::SHIFT_PRINT_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PrintMethod;
    use std::time::Duration;

    #[test]
    fn test_fold_success() {
        let outcome = fold_outcome::<()>(Ok(()), "ok", "bad");
        assert!(outcome.success);
        assert_eq!(outcome.method, PrintMethod::Thermal);
        assert_eq!(outcome.message, "ok");
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_fold_failure_keeps_error_text() {
        let outcome = fold_outcome::<()>(
            Err(ClientError::Timeout(Duration::from_secs(10))),
            "ok",
            "bad",
        );
        assert!(!outcome.success);
        assert_eq!(outcome.method, PrintMethod::Failed);
        assert_eq!(outcome.message, "bad");
        assert_eq!(outcome.error.as_deref(), Some("Request timed out after 10s"));
    }
}
