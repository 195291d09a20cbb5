//! Logging Infrastructure
//!
//! - Console output on stderr (pretty for development, JSON for production)
//! - Optional daily rotating files under `log_dir`

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Examples
/// ```ignore
/// // Development setup (console only)
/// init_logger("debug", false, None)?;
///
/// // Production setup (console + file)
/// init_logger("info", true, Some(Path::new("/var/log/receipt")))?;
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let json_console = json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
    });

    let pretty_console = (!json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_writer(std::io::stderr)
    });

    let file_layer = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "receipt");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(appender)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(pretty_console)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
