//! rollcall command-line shell.
//!
//! Thin binary around the collector crates: parses arguments, initializes
//! tracing, launches the live page, runs the collection loop, and exports
//! the roster as CSV. Business logic lives in the `crates/` libraries.

use anyhow::Context;
use clap::Parser;
use rollcall_collector::{export, CollectSummary, Collector};
use rollcall_core::AppConfig;
use rollcall_page::live::target_host;
use rollcall_page::LivePage;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(about = "Scrolls a following-list page and exports the followed users as CSV")]
struct Cli {
    /// URL of the following-list page to collect from
    url: String,

    /// Output CSV path (defaults to the configured filename)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rollcall=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    info!("Starting rollcall v{}", env!("CARGO_PKG_VERSION"));

    let host = target_host(&cli.url)
        .with_context(|| format!("invalid target URL '{}'", cli.url))?;

    let mut config = AppConfig::load_with_env().context("failed to load configuration")?;
    if cli.headed {
        config.browser.headless = false;
    }

    info!("Collecting following list from {}", host);
    let page = LivePage::launch(&config, &cli.url)
        .await
        .context("failed to launch browser")?;

    let mut collector = Collector::new(config.collector.clone());
    let mut summary: Option<CollectSummary> = None;

    // An interrupt leaves the roster holding every completed pass, so the
    // partial result is still exported below.
    tokio::select! {
        result = collector.run(&page) => {
            summary = Some(result.context("collection run failed")?);
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted; exporting partial results");
        }
    }

    let roster = collector.roster();
    if roster.is_empty() {
        warn!(
            "No users found. Check that you are logged in, the account is not \
             private, and the selectors match the site's markup."
        );
    } else {
        let output = cli
            .output
            .unwrap_or_else(|| PathBuf::from(&config.export.filename));

        match export::write_csv(roster, &output) {
            Ok(()) => info!(
                "Done: {} users exported to {}",
                roster.len(),
                output.display()
            ),
            Err(e) => {
                // Degrade to manual handling rather than losing the run
                warn!(
                    "Could not write {} ({e}); printing CSV to stdout instead",
                    output.display()
                );
                println!("{}", export::to_csv(roster));
            }
        }
    }

    if let Some(summary) = summary {
        info!(
            reason = ?summary.reason,
            passes = summary.passes,
            load_more_attempts = summary.load_more_attempts,
            "run summary"
        );
    }

    if let Err(e) = page.close().await {
        warn!("Browser did not shut down cleanly: {e}");
    }

    Ok(())
}
