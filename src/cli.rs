//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// Consolidated order book liquidity pricer.
///
/// Fetches level-2 snapshots from the configured venues, merges them into
/// one book, and prices a market buy and sell of the requested quantity.
#[derive(Parser, Debug)]
#[command(name = "bookwalk", version, about)]
pub struct Cli {
    /// Quantity to price on both sides of the consolidated book
    #[arg(short, long, default_value = "10", value_parser = parse_quantity)]
    pub qty: Decimal,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override configured log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit JSON logs instead of the pretty format
    #[arg(long)]
    pub json_logs: bool,
}

/// Parses the quantity argument, rejecting negatives before they reach the
/// pricing walk.
fn parse_quantity(raw: &str) -> Result<Decimal, String> {
    let quantity: Decimal = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a decimal quantity"))?;
    if quantity < Decimal::ZERO {
        return Err("quantity cannot be negative".to_string());
    }
    Ok(quantity)
}
