//! Command-line configuration
//!
//! Every option can also be given through the environment (a `.env` file in
//! the working directory is loaded first):
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | PRINT_BRIDGE_URL | http://localhost:3001 | print bridge address |
//! | TEMPLATE_API_URL | http://localhost:8000 | receipt template API |
//! | HEALTH_TIMEOUT_MS | 5000 | health check budget |
//! | PRINT_TIMEOUT_MS | 10000 | print request budget |
//! | TEMPLATE_TIMEOUT_MS | 10000 | template request budget |
//! | LOG_LEVEL | info | log level (RUST_LOG wins) |
//! | LOG_JSON | false | JSON console logs |
//! | LOG_DIR | - | daily rotating log files |

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use receipt_client::ClientConfig;
use receipt_client::config::{DEFAULT_BRIDGE_URL, DEFAULT_TEMPLATE_API_URL};
use serde_json::Value;

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-cli")]
#[command(about = "Print receipts through the local thermal print bridge")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub client: ClientArgs,

    #[clap(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the services live and how long to wait for them
#[derive(Debug, Clone, Args)]
pub struct ClientArgs {
    #[arg(long, env = "PRINT_BRIDGE_URL", default_value = DEFAULT_BRIDGE_URL)]
    pub bridge_url: String,

    #[arg(long, env = "TEMPLATE_API_URL", default_value = DEFAULT_TEMPLATE_API_URL)]
    pub template_api_url: String,

    #[arg(long, env = "HEALTH_TIMEOUT_MS", default_value_t = 5_000)]
    pub health_timeout_ms: u64,

    #[arg(long, env = "PRINT_TIMEOUT_MS", default_value_t = 10_000)]
    pub print_timeout_ms: u64,

    #[arg(long, env = "TEMPLATE_TIMEOUT_MS", default_value_t = 10_000)]
    pub template_timeout_ms: u64,
}

impl ClientArgs {
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.bridge_url, &self.template_api_url)
            .with_health_timeout(Duration::from_millis(self.health_timeout_ms))
            .with_print_timeout(Duration::from_millis(self.print_timeout_ms))
            .with_template_timeout(Duration::from_millis(self.template_timeout_ms))
    }
}

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// JSON console output
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    /// Directory for daily rotating log files
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Ask the print bridge whether the printer is ready
    Health,
    /// Show the active receipt template
    Template,
    /// Print the bridge's built-in test receipt
    TestPrint,
    /// Print a sale receipt from a JSON file
    Sale { file: PathBuf },
    /// Print a shift-closure report from a JSON file
    Shift { file: PathBuf },
}

/// Read a JSON document (sale or shift snapshot)
pub fn load_json(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}
