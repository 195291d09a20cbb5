//! Uniform print result shown to the operator

use serde::{Deserialize, Serialize};

/// How the document ended up being printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMethod {
    Thermal,
    Failed,
}

/// Outcome of a print attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintOutcome {
    pub success: bool,
    pub method: PrintMethod,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PrintOutcome {
    pub fn thermal(message: impl Into<String>) -> Self {
        Self {
            success: true,
            method: PrintMethod::Thermal,
            message: message.into(),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            method: PrintMethod::Failed,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
