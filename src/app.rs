//! Aggregation pipeline: fetch every venue, normalize, consolidate, price.

use std::sync::Arc;

use futures_util::future;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::{consolidate, sweep_cost, Book, PriceLevel, SweepResult};
use crate::exchange::{normalize, Exchange};
use crate::fetch::{BookFetch, SnapshotCache};

/// Consolidated market answer for one requested quantity.
#[derive(Debug, Clone)]
pub struct LiquidityReport {
    /// Quantity the caller asked to price.
    pub quantity: Decimal,
    /// Best bid across all venues, if any bid liquidity exists.
    pub best_bid: Option<PriceLevel>,
    /// Best ask across all venues, if any ask liquidity exists.
    pub best_ask: Option<PriceLevel>,
    /// Cost of buying `quantity` against the consolidated asks.
    pub buy: SweepResult,
    /// Proceeds of selling `quantity` into the consolidated bids.
    pub sell: SweepResult,
}

/// Orchestrates the venue fetches and the pricing walk.
pub struct Aggregator {
    fetcher: Arc<dyn BookFetch>,
    cache: SnapshotCache,
    venues: Vec<Exchange>,
}

impl Aggregator {
    /// Creates an aggregator over the given venues.
    #[must_use]
    pub fn new(fetcher: Arc<dyn BookFetch>, cache: SnapshotCache, venues: Vec<Exchange>) -> Self {
        Self {
            fetcher,
            cache,
            venues,
        }
    }

    /// Prices a buy and a sell of `quantity` against the consolidated book.
    ///
    /// Every venue resolves, to a snapshot or to nothing, before anything
    /// is merged. Returns `None` when no venue contributed a single level;
    /// the walk never runs against a book that is empty on both sides.
    pub async fn price(&self, quantity: Decimal) -> Option<LiquidityReport> {
        let quotes = future::join_all(self.venues.iter().map(|&exchange| async move {
            let quote = self.cache.get_or_fetch(exchange, self.fetcher.as_ref()).await;
            (exchange, quote)
        }))
        .await;

        let books: Vec<Book> = quotes
            .iter()
            .map(|(exchange, quote)| {
                let normalized = normalize(quote.as_ref());
                if normalized.dropped_bids > 0 || normalized.dropped_asks > 0 {
                    debug!(
                        exchange = %exchange,
                        dropped_bids = normalized.dropped_bids,
                        dropped_asks = normalized.dropped_asks,
                        "dropped unparsable levels"
                    );
                }
                info!(
                    exchange = %exchange,
                    bids = normalized.book.bids().len(),
                    asks = normalized.book.asks().len(),
                    "book normalized"
                );
                normalized.book
            })
            .collect();

        let merged = consolidate(books);
        if merged.is_empty() {
            warn!("no levels from any venue");
            return None;
        }

        Some(LiquidityReport {
            quantity,
            best_bid: merged.best_bid().copied(),
            best_ask: merged.best_ask().copied(),
            buy: sweep_cost(merged.asks(), quantity),
            sell: sweep_cost(merged.bids(), quantity),
        })
    }
}
