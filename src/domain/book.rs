//! Canonical order book types and cross-venue consolidation.
//!
//! An order book has two sides:
//! - **Bids**: buy interest, sorted by price descending (best bid first)
//! - **Asks**: sell interest, sorted by price ascending (best ask first)
//!
//! The ordering invariant is established once, in [`Book::new`], and every
//! accessor relies on it. The sort is stable, so levels that share a price
//! keep their input order and [`consolidate`] stays deterministic for a
//! given venue order.

use super::money::{Price, Size};

/// A single price level in an order book.
///
/// Represents aggregated size at a specific price point (level-2 depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    price: Price,
    size: Size,
}

impl PriceLevel {
    /// Creates a new price level.
    #[must_use]
    pub const fn new(price: Price, size: Size) -> Self {
        Self { price, size }
    }

    /// Returns the price at this level.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the size available at this level.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

/// A two-sided order book snapshot.
///
/// Either side may be empty: a venue with no visible depth and an
/// unavailable venue both normalize to empty sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl Book {
    /// Creates a book from unordered levels, sorting bids descending and
    /// asks ascending by price.
    #[must_use]
    pub fn new(mut bids: Vec<PriceLevel>, mut asks: Vec<PriceLevel>) -> Self {
        bids.sort_by(|a, b| b.price.cmp(&a.price));
        asks.sort_by(|a, b| a.price.cmp(&b.price));
        Self { bids, asks }
    }

    /// Creates a book with no levels on either side.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns all bid levels (price descending).
    #[must_use]
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// Returns all ask levels (price ascending).
    #[must_use]
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    /// Returns the best bid (highest buy price).
    #[must_use]
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Returns the best ask (lowest sell price).
    #[must_use]
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// Returns `true` if neither side has any levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Merges per-venue books into one consolidated book.
///
/// Sides are concatenated across venues and re-sorted best-first. Levels
/// from different venues that happen to share a price stay distinct
/// entries; consolidation never sums sizes. The stable sort keeps
/// equal-price levels in venue input order.
#[must_use]
pub fn consolidate<I>(books: I) -> Book
where
    I: IntoIterator<Item = Book>,
{
    let mut bids = Vec::new();
    let mut asks = Vec::new();
    for book in books {
        bids.extend(book.bids);
        asks.extend(book.asks);
    }
    Book::new(bids, asks)
}
