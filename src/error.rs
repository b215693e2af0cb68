//! Error types for the crate.
//!
//! Two kinds of failure exist here and they deliberately do not mix:
//! [`ConfigError`] aborts startup, while [`FetchError`] stays inside the
//! fetch layer and degrades to an absent venue snapshot. Running out of
//! liquidity is not an error at all; it is carried in
//! [`SweepResult`](crate::domain::SweepResult).

use thiserror::Error;

use crate::exchange::Exchange;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    /// A field parsed but holds a value the application cannot run with.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// A venue snapshot could not be retrieved.
///
/// This covers transport failures, non-success statuses, and bodies that do
/// not decode as the venue's book shape. The cache boundary converts it into
/// an absent quote; past that point unavailability and an empty book are
/// indistinguishable.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request failed in transit or the body did not decode.
    #[error("{exchange}: request failed: {source}")]
    Http {
        exchange: Exchange,
        #[source]
        source: reqwest::Error,
    },

    /// The venue answered with a non-success status.
    #[error("{exchange}: server returned {status}")]
    Status {
        exchange: Exchange,
        status: reqwest::StatusCode,
    },
}

/// Top-level application error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
