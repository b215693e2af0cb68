//! Gemini order book shape.
//!
//! `GET /v1/book/{symbol}` returns the full book as keyed objects:
//!
//! ```json
//! {
//!   "bids": [{"price": "96500.01", "amount": "0.52", "timestamp": "1700000000"}],
//!   "asks": [{"price": "96500.02", "amount": "1.10", "timestamp": "1700000000"}]
//! }
//! ```
//!
//! Price and amount are decimal strings; the timestamp is ignored.

use serde::Deserialize;
use serde_json::Value;

use super::NormalizedBook;
use crate::domain::{Book, PriceLevel};

/// Raw Gemini book snapshot.
///
/// Same policy as the Coinbase shape: `bids` and `asks` must be present for
/// the payload to count as a book at all, while individual entries stay
/// untyped and are validated one by one.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub bids: Vec<Value>,
    pub asks: Vec<Value>,
}

/// Converts a Gemini snapshot into the canonical book.
#[must_use]
pub fn normalize(snapshot: &Snapshot) -> NormalizedBook {
    let bids: Vec<PriceLevel> = snapshot.bids.iter().filter_map(parse_level).collect();
    let asks: Vec<PriceLevel> = snapshot.asks.iter().filter_map(parse_level).collect();

    NormalizedBook {
        dropped_bids: snapshot.bids.len() - bids.len(),
        dropped_asks: snapshot.asks.len() - asks.len(),
        book: Book::new(bids, asks),
    }
}

/// Parses one `{price, amount}` entry.
fn parse_level(entry: &Value) -> Option<PriceLevel> {
    super::positive_level(
        super::decimal_value(entry.get("price")?),
        super::decimal_value(entry.get("amount")?),
    )
}
