//! Venue snapshot retrieval.
//!
//! [`BookFetch`] is the seam between the aggregation pipeline and the
//! network, so the pipeline and cache can be exercised against stub venues
//! in tests. The production implementation is a thin `reqwest` wrapper;
//! every failure mode (transport, non-success status, undecodable body)
//! surfaces as a [`FetchError`], which the cache boundary downgrades to an
//! absent quote.

pub mod cache;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use cache::{Clock, SnapshotCache, SystemClock};

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::exchange::{coinbase, gemini, Exchange, RawBook};

/// Retrieves one venue's raw order book snapshot.
#[async_trait]
pub trait BookFetch: Send + Sync {
    /// Fetches the current snapshot for `exchange`.
    async fn fetch(&self, exchange: Exchange) -> std::result::Result<RawBook, FetchError>;
}

/// HTTP fetcher for the public venue book endpoints.
pub struct HttpFetcher {
    client: Client,
    coinbase_url: String,
    gemini_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher with the given per-venue endpoints.
    ///
    /// The request timeout rides on `client`; the fetcher adds none of its
    /// own.
    #[must_use]
    pub fn new(client: Client, coinbase_url: String, gemini_url: String) -> Self {
        Self {
            client,
            coinbase_url,
            gemini_url,
        }
    }

    /// Builds a fetcher from application config, with the configured request
    /// timeout on the underlying client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.fetch.timeout_secs))
            .build()?;

        Ok(Self::new(
            client,
            config.venue(Exchange::Coinbase).url.clone(),
            config.venue(Exchange::Gemini).url.clone(),
        ))
    }

    fn url(&self, exchange: Exchange) -> &str {
        match exchange {
            Exchange::Coinbase => &self.coinbase_url,
            Exchange::Gemini => &self.gemini_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        exchange: Exchange,
    ) -> std::result::Result<T, FetchError> {
        let url = self.url(exchange);
        debug!(exchange = %exchange, url, "requesting order book");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http { exchange, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { exchange, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Http { exchange, source })
    }
}

#[async_trait]
impl BookFetch for HttpFetcher {
    async fn fetch(&self, exchange: Exchange) -> std::result::Result<RawBook, FetchError> {
        match exchange {
            Exchange::Coinbase => {
                let snapshot = self.get_json::<coinbase::Snapshot>(exchange).await?;
                Ok(RawBook::Coinbase(snapshot))
            }
            Exchange::Gemini => {
                let snapshot = self.get_json::<gemini::Snapshot>(exchange).await?;
                Ok(RawBook::Gemini(snapshot))
            }
        }
    }
}
