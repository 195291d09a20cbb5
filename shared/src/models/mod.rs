//! Data models
//!
//! Shared between receipt-client and its front-ends.

pub mod print_job;
pub mod print_outcome;
pub mod receipt_template;

// Re-exports
pub use print_job::*;
pub use print_outcome::*;
pub use receipt_template::*;
