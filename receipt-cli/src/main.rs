//! receipt-cli: thermal receipt printing from the terminal
//!
//! Thin front-end over `receipt-client`:
//! - `health`      bridge readiness
//! - `template`    active receipt template
//! - `test-print`  bridge test page
//! - `sale FILE`   sale receipt from a JSON snapshot
//! - `shift FILE`  shift-closure report from a JSON snapshot

mod config;
mod console;
mod logger;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use receipt_client::{NotificationPresenter, TokioScheduler};
use shared::models::{PrintOutcome, ReceiptTemplate, SaleData, ShiftClosureData};

use crate::config::{Cli, Command, load_json};
use crate::console::ConsoleSurface;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(
        &cli.log.log_level,
        cli.log.log_json,
        cli.log.log_dir.as_deref(),
    ) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "receipt-cli failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.client.to_client_config();
    tracing::debug!(bridge = %config.bridge_url, templates = %config.template_api_url, "Configuration loaded");

    let client = config.build_client().context("failed to build receipt client")?;
    let presenter = NotificationPresenter::new(
        Arc::new(ConsoleSurface::new()),
        Arc::new(TokioScheduler::current()?),
    )
    .with_ttl(config.notification_ttl);

    match cli.command {
        Command::Health => {
            let health = client.sale().check_printer().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
            Ok(if health.printer_ready() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Template => {
            match client.sale().active_template().await? {
                Some(template) => print_template(&template),
                None => println!("No active receipt template"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::TestPrint => {
            let outcome = client.sale().test_print_outcome().await;
            Ok(report(&presenter, &outcome))
        }
        Command::Sale { file } => {
            let sale = SaleData::new(load_json(&file)?);
            let outcome = client.sale().print_with_fallback(&sale).await;
            Ok(report(&presenter, &outcome))
        }
        Command::Shift { file } => {
            let shift = ShiftClosureData::new(load_json(&file)?);
            let outcome = client.shift().print_with_fallback(&shift).await;
            Ok(report(&presenter, &outcome))
        }
    }
}

fn report(presenter: &NotificationPresenter, outcome: &PrintOutcome) -> ExitCode {
    let _notification = presenter.show(outcome);
    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_template(template: &ReceiptTemplate) {
    println!("#{} {}", template.id, template.name);
    match &template.style.global.width {
        Some(Value::String(width)) => println!("  width: {width}"),
        Some(width) => println!("  width: {width} mm"),
        None => {}
    }
    for component in template.active_components() {
        println!("  {:>3}  {:<16} {}", component.order, component.kind, component.id);
    }
}
