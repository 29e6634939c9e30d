// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zombie-hunter: find CronJobs that stopped doing useful work

mod color;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use config::{JoinMode, Layer, Settings};
use exit_error::ExitError;
use output::OutputFormat;
use std::path::{Path, PathBuf};
use zh_adapters::{FileInventory, Inventory, JoinStrategy, KubeInventory};
use zh_core::SystemClock;
use zh_engine::{ScanError, Scanner};

#[derive(Parser, Debug)]
#[command(
    name = "zombie-hunter",
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH")),
    about = "Find zombie CronJobs in your Kubernetes cluster",
    long_about = "Find zombie CronJobs in your Kubernetes cluster.\n\n\
        A CronJob is a zombie when it has not succeeded within the threshold, \
        or has never produced a Job at all. Each zombie gets a confidence score \
        from its history: long silences and all-failed histories score high, \
        suspended CronJobs score low.",
    styles = color::styles()
)]
struct Cli {
    /// Consider a CronJob a zombie after N days without success [default: 30]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    days: Option<i64>,

    /// Namespace to scan, or "all" [default: all]
    #[arg(long, short = 'n', value_name = "NS")]
    namespace: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', value_enum)]
    format: Option<OutputFormat>,

    /// How Jobs are matched to their CronJob [default: owner]
    #[arg(long, value_enum)]
    join: Option<JoinMode>,

    /// Label key for `--join label` [default: cronjob]
    #[arg(long, value_name = "KEY")]
    label_key: Option<String>,

    /// Read CronJobs and Jobs from `kubectl get cronjobs,jobs -A -o json` output
    #[arg(long, value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Maximum concurrent history lookups [default: 8]
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Config file [default: <config dir>/zombie-hunter/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn layer(&self) -> Layer {
        Layer {
            days: self.days,
            namespace: self.namespace.clone(),
            format: self.format,
            join: self.join,
            label_key: self.label_key.clone(),
            concurrency: self.concurrency,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("Error: {}", exit.message);
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let file = config::load(cli.config.as_deref())?;
    let settings = Settings::from_layer(file.overlay(Layer::from_env()).overlay(cli.layer()));
    tracing::debug!(?settings, "resolved settings");

    let inventory = open_inventory(cli.from_file.as_deref(), settings.join.clone()).await?;
    let scanner = Scanner::new(inventory, SystemClock);
    let report = scanner.scan(&settings.scan_options()).await.map_err(|e| match e {
        ScanError::Inventory(_) => ExitError::inventory_unavailable(e.to_string()),
    })?;

    let colorize = settings.format == OutputFormat::Table && color::should_colorize();
    let stdout = std::io::stdout();
    output::render(&report, settings.format, colorize, &mut stdout.lock())
}

async fn open_inventory(
    from_file: Option<&Path>,
    join: JoinStrategy,
) -> Result<Box<dyn Inventory>, ExitError> {
    let inventory: Box<dyn Inventory> = match from_file {
        Some(path) => Box::new(
            FileInventory::load(path, join)
                .map_err(|e| ExitError::inventory_unavailable(e.to_string()))?,
        ),
        None => Box::new(
            KubeInventory::connect(join)
                .await
                .map_err(|e| ExitError::inventory_unavailable(e.to_string()))?,
        ),
    };
    Ok(inventory)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
