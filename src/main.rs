//! EasyPay worker record extractor
//!
//! Opens the application, waits for the operator to log in and reach the
//! worker-detail screen, scrapes it, and writes one JSON snapshot file.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use easypay_extract::browser::{BrowserConfig, BrowserController};
use easypay_extract::extraction::WorkerExtractor;
use easypay_extract::gate::SessionGate;
use easypay_extract::page::CdpPage;
use easypay_extract::plan::ExtractionPlan;
use easypay_extract::snapshot::SnapshotWriter;

/// EasyPay worker record extractor
#[derive(Parser, Debug)]
#[command(name = "ep-extract")]
#[command(version)]
#[command(about = "Snapshot an EasyPay worker record into a JSON file")]
struct Args {
    /// Application URL
    #[arg(long, default_value = "http://pceasy/")]
    url: String,

    /// Directory the snapshot file is written to
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Locator that marks the worker-detail screen as ready
    #[arg(long, default_value = "#edtNom")]
    marker: String,

    /// How long to wait for the manual login/navigation, in milliseconds
    #[arg(long, default_value_t = 300_000)]
    gate_timeout_ms: u64,

    /// Extract only the worker name
    #[arg(long)]
    name_only: bool,

    /// Run the browser headless (only useful against an already
    /// authenticated session)
    #[arg(long)]
    headless: bool,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    url::Url::parse(&args.url).with_context(|| format!("invalid application URL: {}", args.url))?;

    let mut config = BrowserConfig::builder().headless(args.headless);
    if let Some(ref path) = args.chrome_path {
        config = config.chrome_path(path.clone());
    }

    let controller = BrowserController::with_config(config.build())
        .await
        .context("failed to launch browser")?;

    let outcome = run(&controller, &args).await;

    if let Err(e) = controller.close().await {
        error!("Browser close failed: {}", e);
    }

    outcome
}

async fn run(controller: &BrowserController, args: &Args) -> anyhow::Result<()> {
    let handle = controller
        .navigate(&args.url)
        .await
        .with_context(|| format!("failed to open {}", args.url))?;
    let page = CdpPage::new(handle);

    info!("Please log in manually and navigate to the worker page");
    info!(
        "Waiting up to {}s for {} to appear",
        args.gate_timeout_ms / 1000,
        args.marker
    );

    SessionGate::await_ready(&page, &args.marker, args.gate_timeout_ms)
        .await
        .context("worker page never became ready")?;

    let plan = if args.name_only {
        ExtractionPlan::worker_name_only()
    } else {
        ExtractionPlan::worker_full()
    };

    let snapshot = WorkerExtractor::extract(&page, &plan).await;

    let path = SnapshotWriter::write(&snapshot, &args.output_dir)
        .with_context(|| format!("failed to write snapshot under {}", args.output_dir.display()))?;

    info!(
        "Extraction completed: {} ({} fields, {} grid rows)",
        path.display(),
        snapshot.field_count(),
        snapshot.grid_row_count()
    );

    Ok(())
}
