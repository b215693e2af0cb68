//! Application configuration loading and validation.
//!
//! Configuration comes from a TOML file with built-in defaults. A missing
//! file is not an error; the tool runs out of the box against the public
//! Coinbase and Gemini BTC-USD endpoints. An unreadable or invalid file is
//! an error, reported before logging is even initialized.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::error::{ConfigError, Result};
use crate::exchange::Exchange;

/// Public Coinbase Exchange level-2 book endpoint for BTC-USD.
pub const COINBASE_BOOK_URL: &str =
    "https://api.exchange.coinbase.com/products/BTC-USD/book?level=2";

/// Public Gemini book endpoint for BTCUSD.
pub const GEMINI_BOOK_URL: &str = "https://api.gemini.com/v1/book/BTCUSD";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Traded market parameters.
    #[serde(default)]
    pub market: MarketConfig,
    /// Venue endpoints.
    #[serde(default)]
    pub venues: VenuesConfig,
    /// Fetch timeout and cache behavior.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Display parameters for the traded market.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Unit label used when printing quantities.
    #[serde(default = "default_asset")]
    pub asset: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            asset: default_asset(),
        }
    }
}

/// One venue's book endpoint.
///
/// Overriding a venue table in the file requires restating its `url`; only
/// an absent table falls back to the built-in endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    /// Full URL of the venue's book endpoint.
    pub url: String,
    /// Disabled venues are skipped entirely, not fetched and not merged.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Book endpoints, one table per supported venue.
#[derive(Debug, Clone, Deserialize)]
pub struct VenuesConfig {
    #[serde(default = "default_coinbase")]
    pub coinbase: VenueConfig,
    #[serde(default = "default_gemini")]
    pub gemini: VenueConfig,
}

impl Default for VenuesConfig {
    fn default() -> Self {
        Self {
            coinbase: default_coinbase(),
            gemini: default_gemini(),
        }
    }
}

/// Fetch timeout and cache behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How long a fetch outcome is reused before the venue is asked again.
    #[serde(default = "default_cache_window_secs")]
    pub cache_window_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            cache_window_secs: default_cache_window_secs(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_asset() -> String {
    "BTC".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_coinbase() -> VenueConfig {
    VenueConfig {
        url: COINBASE_BOOK_URL.to_string(),
        enabled: true,
    }
}

fn default_gemini() -> VenueConfig {
    VenueConfig {
        url: GEMINI_BOOK_URL.to_string(),
        enabled: true,
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_window_secs() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Loads configuration from `path`, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the config table for one exchange.
    #[must_use]
    pub fn venue(&self, exchange: Exchange) -> &VenueConfig {
        match exchange {
            Exchange::Coinbase => &self.venues.coinbase,
            Exchange::Gemini => &self.venues.gemini,
        }
    }

    /// Exchanges that will be queried, in a fixed order.
    ///
    /// The order matters: consolidation is stable, so equal-price levels
    /// across venues land in this order.
    #[must_use]
    pub fn enabled_exchanges(&self) -> Vec<Exchange> {
        Exchange::ALL
            .into_iter()
            .filter(|&exchange| self.venue(exchange).enabled)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let urls = [
            ("venues.coinbase.url", &self.venues.coinbase),
            ("venues.gemini.url", &self.venues.gemini),
        ];
        for (field, venue) in urls {
            if !venue.enabled {
                continue;
            }
            Url::parse(&venue.url).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }

        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.enabled_exchanges().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "venues",
                reason: "at least one venue must be enabled".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initializes the global tracing subscriber from this config.
    ///
    /// `RUST_LOG` wins over the configured level when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .json()
                    .init();
            }
            _ => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
        }
    }
}
