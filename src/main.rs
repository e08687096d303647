//! Shop-Harvest main entry point
//!
//! This is the command-line interface for the Shop-Harvest product crawler.

use anyhow::Context;
use clap::Parser;
use shop_harvest::config::{load_config, validate, Config};
use shop_harvest::crawler::crawl;
use shop_harvest::output::{
    error_log_layer, open_error_log, print_summary, CrawlSummary, CsvSink, ProductSink,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Shop-Harvest: a single-site product crawler
///
/// Shop-Harvest crawls one e-commerce site, visiting product-listing pages
/// first, and writes the products it finds to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "shop-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A single-site product crawler", long_about = None)]
struct Cli {
    /// Stop dispatching new fetches after this many minutes
    #[arg(long, value_name = "MINUTES")]
    time_limit: Option<u64>,

    /// Stop after this many pages have been fetched successfully
    #[arg(long, value_name = "PAGES")]
    page_limit: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Products CSV file (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Error log file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    error_log: Option<String>,

    /// Maximum number of fetches in flight
    #[arg(long, value_name = "N")]
    concurrency: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;

    setup_logging(cli.verbose, cli.quiet, Path::new(&config.output.error_log_path))?;

    tracing::info!("Harvesting {}", config.site.base_url);
    let outcome = match crawl(&config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let mut sink = CsvSink::new(&config.output.products_path);
    sink.write_products(&outcome.products)
        .with_context(|| format!("Failed to write {}", config.output.products_path))?;

    print_summary(&CrawlSummary::from_outcome(&outcome));

    Ok(())
}

/// Loads the config file (or the defaults) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if cli.time_limit.is_some() {
        config.crawler.time_limit = cli.time_limit;
    }
    if cli.page_limit.is_some() {
        config.crawler.page_limit = cli.page_limit;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if let Some(output) = &cli.output {
        config.output.products_path = output.clone();
    }
    if let Some(error_log) = &cli.error_log {
        config.output.error_log_path = error_log.clone();
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber
///
/// Console verbosity follows `-v`/`-q`. Every error-level event is also
/// appended to `error_log` without ANSI colouring.
fn setup_logging(verbose: u8, quiet: bool, error_log: &Path) -> anyhow::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shop_harvest=info,warn"),
            1 => EnvFilter::new("shop_harvest=debug,info"),
            2 => EnvFilter::new("shop_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let log_file = open_error_log(error_log)
        .with_context(|| format!("Failed to open error log {}", error_log.display()))?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_log_layer(Mutex::new(log_file)))
        .init();

    Ok(())
}
