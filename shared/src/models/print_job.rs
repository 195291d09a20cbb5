//! Print job payloads exchanged with the print bridge

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::receipt_template::ReceiptTemplate;

/// Completed sale snapshot, forwarded to the bridge as-is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SaleData(pub Value);

/// Closed shift snapshot, forwarded to the bridge as-is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ShiftClosureData(pub Value);

impl SaleData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// `id` field, for logging only
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }
}

impl ShiftClosureData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }
}

/// Body of `POST /print-sale-receipt`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceiptJob<'a> {
    pub sale_data: &'a SaleData,
    pub template: &'a ReceiptTemplate,
}

/// Bridge answer to a print request
///
/// Kept as the raw JSON body; accessors read the well-known keys without
/// imposing a shape on the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PrintServiceResponse(pub Value);

impl PrintServiceResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Echoed sale identifier, number or string
    pub fn sale_id(&self) -> Option<&Value> {
        self.0.get("sale_id")
    }

    pub fn timestamp(&self) -> Option<&Value> {
        self.0.get("timestamp")
    }

    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    pub fn printer_ready(&self) -> Option<bool> {
        self.0.get("printer_ready").and_then(Value::as_bool)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Bridge answer to `GET /health`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HealthStatus(pub Value);

impl HealthStatus {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Anything but a literal `true` counts as not ready
    pub fn printer_ready(&self) -> bool {
        self.0
            .get("printer_ready")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn timestamp(&self) -> Option<&Value> {
        self.0.get("timestamp")
    }
}

/// Error body returned by the bridge on failure
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeErrorBody {
    pub error: Option<String>,
}
