//! Coinbase Exchange level-2 book shape.
//!
//! `GET /products/{product}/book?level=2` returns aggregated depth:
//!
//! ```json
//! {
//!   "sequence": 123456789,
//!   "bids": [["96500.01", "0.52", 3]],
//!   "asks": [["96500.02", "1.10", 1]]
//! }
//! ```
//!
//! Each entry is a positional `[price, size, order_count]` array with price
//! and size as decimal strings. Only price and size are read here.

use serde::Deserialize;
use serde_json::Value;

use super::NormalizedBook;
use crate::domain::{Book, PriceLevel};

/// Raw Coinbase level-2 snapshot.
///
/// `bids` and `asks` are required: a payload missing either does not
/// deserialize, and the fetch layer reports that as venue unavailability.
/// Individual entries stay untyped so one malformed entry cannot poison
/// the rest of the snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub bids: Vec<Value>,
    pub asks: Vec<Value>,
}

/// Converts a Coinbase snapshot into the canonical book.
///
/// Entries whose price or size is missing, unparsable, or not strictly
/// positive are dropped and counted; surviving entries are unaffected.
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

/// Parses one positional `[price, size, ...]` entry.
fn parse_level(entry: &Value) -> Option<PriceLevel> {
    let entry = entry.as_array()?;
    super::positive_level(
        super::decimal_value(entry.first()?),
        super::decimal_value(entry.get(1)?),
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    const LEVEL2_BODY: &str = r#"{
        "sequence": 123456789,
        "bids": [
            ["96500.01", "0.52", 3],
            ["96499.50", "1.00", 1]
        ],
        "asks": [
            ["96500.02", "1.10", 1],
            ["96501.00", "0.25", 2]
        ],
        "auction_mode": false
    }"#;

    #[test]
    fn deserializes_level2_payload() {
        let snapshot: Snapshot = serde_json::from_str(LEVEL2_BODY).unwrap();
        assert_eq!(snapshot.bids.len(), 2);
        assert_eq!(snapshot.asks.len(), 2);
    }

    #[test]
    fn missing_side_fails_deserialization() {
        let result = serde_json::from_str::<Snapshot>(r#"{"bids": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn normalizes_into_sorted_book() {
        let snapshot: Snapshot = serde_json::from_str(LEVEL2_BODY).unwrap();
        let normalized = normalize(&snapshot);

        let best_bid = normalized.book.best_bid().unwrap();
        assert_eq!(best_bid.price(), dec!(96500.01));
        assert_eq!(best_bid.size(), dec!(0.52));

        let best_ask = normalized.book.best_ask().unwrap();
        assert_eq!(best_ask.price(), dec!(96500.02));
        assert_eq!(normalized.dropped_bids, 0);
        assert_eq!(normalized.dropped_asks, 0);
    }

    #[test]
    fn drops_malformed_entries_and_keeps_the_rest() {
        let body = r#"{
            "bids": [
                ["abc", 1],
                ["100.00", "2.0", 4],
                ["99.00"],
                "not-an-array"
            ],
            "asks": [
                ["101.00", "0", 1],
                ["102.00", "1.5", 1]
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        let normalized = normalize(&snapshot);

        assert_eq!(normalized.book.bids().len(), 1);
        assert_eq!(normalized.book.bids()[0].price(), dec!(100));
        assert_eq!(normalized.dropped_bids, 3);

        assert_eq!(normalized.book.asks().len(), 1);
        assert_eq!(normalized.book.asks()[0].price(), dec!(102));
        assert_eq!(normalized.dropped_asks, 1);
    }

    #[test]
    fn accepts_bare_number_entries() {
        let body = r#"{"bids": [[100.5, 2]], "asks": []}"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        let normalized = normalize(&snapshot);

        assert_eq!(normalized.book.bids().len(), 1);
        assert_eq!(normalized.book.bids()[0].price(), dec!(100.5));
        assert_eq!(normalized.book.bids()[0].size(), dec!(2));
    }

    #[test]
    fn empty_sides_normalize_to_empty_book() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"bids": [], "asks": []}"#).unwrap();
        let normalized = normalize(&snapshot);
        assert!(normalized.book.is_empty());
    }
}
