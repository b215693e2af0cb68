use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use bookwalk::app::Aggregator;
use bookwalk::cli::Cli;
use bookwalk::config::Config;
use bookwalk::fetch::{HttpFetcher, SnapshotCache};
use bookwalk::report;

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();
    info!(qty = %cli.qty, venues = config.enabled_exchanges().len(), "bookwalk starting");

    let fetcher = match HttpFetcher::from_config(&config) {
        Ok(fetcher) => Arc::new(fetcher),
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let cache = SnapshotCache::new(Duration::from_secs(config.fetch.cache_window_secs));
    let aggregator = Aggregator::new(fetcher, cache, config.enabled_exchanges());

    println!(
        "Fetching order books for {} {}...",
        report::format_qty(cli.qty),
        config.market.asset
    );

    match aggregator.price(cli.qty).await {
        Some(result) => {
            println!();
            print!("{}", report::render(&result, &config.market.asset));
        }
        None => println!("No order book data available from any exchange."),
    }
}
