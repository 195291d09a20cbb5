//! Shared types for the receipt printing workspace
//!
//! Wire models exchanged with the template API and the print bridge,
//! plus the uniform print outcome shown to the operator.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
