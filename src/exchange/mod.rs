//! Venue-specific order book shapes and their normalizers.
//!
//! Each supported exchange publishes level-2 depth in its own JSON shape:
//! Coinbase uses positional `[price, size, order_count]` arrays, Gemini
//! uses `{price, amount, timestamp}` objects. One normalizer per shape
//! converts a raw snapshot into the canonical [`Book`], dropping entries
//! that fail to parse as strictly positive decimals and counting what was
//! dropped.

pub mod coinbase;
pub mod gemini;

use std::fmt;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::domain::{Book, PriceLevel};

/// Supported exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    Coinbase,
    Gemini,
}

impl Exchange {
    /// Every exchange this build knows how to normalize.
    pub const ALL: [Exchange; 2] = [Exchange::Coinbase, Exchange::Gemini];

    /// Lowercase name used in logs and config keys.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Exchange::Coinbase => "coinbase",
            Exchange::Gemini => "gemini",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw venue snapshot, still in the venue's own shape.
///
/// Carried opaquely between the fetch layer and [`normalize`]; nothing else
/// looks inside.
#[derive(Debug, Clone)]
pub enum RawBook {
    Coinbase(coinbase::Snapshot),
    Gemini(gemini::Snapshot),
}

impl RawBook {
    /// The exchange this snapshot came from.
    #[must_use]
    pub const fn exchange(&self) -> Exchange {
        match self {
            RawBook::Coinbase(_) => Exchange::Coinbase,
            RawBook::Gemini(_) => Exchange::Gemini,
        }
    }
}

/// A normalized book plus visibility into what normalization discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBook {
    /// The canonical book, ordering invariants established.
    pub book: Book,
    /// Bid entries dropped for failing to parse as positive decimals.
    pub dropped_bids: usize,
    /// Ask entries dropped for failing to parse as positive decimals.
    pub dropped_asks: usize,
}

/// Normalizes a fetched quote into the canonical book.
///
/// An absent quote (fetch failure or undecodable payload) becomes an empty
/// book rather than an error; downstream, unavailability and "no visible
/// liquidity" look the same.
#[must_use]
pub fn normalize(quote: Option<&RawBook>) -> NormalizedBook {
    match quote {
        Some(RawBook::Coinbase(snapshot)) => coinbase::normalize(snapshot),
        Some(RawBook::Gemini(snapshot)) => gemini::normalize(snapshot),
        None => NormalizedBook::default(),
    }
}

/// Extracts a `Decimal` from a JSON value that may be a string
/// (`"50000.12"`) or a bare number, the two encodings seen across venue
/// APIs.
fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

/// Builds a level only when both fields parsed and are strictly positive.
fn positive_level(price: Option<Decimal>, size: Option<Decimal>) -> Option<PriceLevel> {
    let price = price?;
    let size = size?;
    if price > Decimal::ZERO && size > Decimal::ZERO {
        Some(PriceLevel::new(price, size))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn decimal_value_accepts_strings_and_numbers() {
        assert_eq!(decimal_value(&json!("50000.12")), Some(dec!(50000.12)));
        assert_eq!(decimal_value(&json!(" 1.5 ")), Some(dec!(1.5)));
        assert_eq!(decimal_value(&json!(42)), Some(dec!(42)));
        assert_eq!(decimal_value(&json!(0.25)), Some(dec!(0.25)));
    }

    #[test]
    fn decimal_value_rejects_non_numeric_shapes() {
        assert_eq!(decimal_value(&json!("abc")), None);
        assert_eq!(decimal_value(&json!("")), None);
        assert_eq!(decimal_value(&json!(null)), None);
        assert_eq!(decimal_value(&json!(["1"])), None);
        assert_eq!(decimal_value(&json!({"price": "1"})), None);
    }

    #[test]
    fn positive_level_requires_both_fields_positive() {
        assert!(positive_level(Some(dec!(100)), Some(dec!(1))).is_some());
        assert!(positive_level(Some(dec!(0)), Some(dec!(1))).is_none());
        assert!(positive_level(Some(dec!(100)), Some(dec!(0))).is_none());
        assert!(positive_level(Some(dec!(-100)), Some(dec!(1))).is_none());
        assert!(positive_level(None, Some(dec!(1))).is_none());
        assert!(positive_level(Some(dec!(100)), None).is_none());
    }

    #[test]
    fn absent_quote_normalizes_to_empty_book() {
        let normalized = normalize(None);
        assert!(normalized.book.is_empty());
        assert_eq!(normalized.dropped_bids, 0);
        assert_eq!(normalized.dropped_asks, 0);
    }

    #[test]
    fn exchange_names_match_config_keys() {
        assert_eq!(Exchange::Coinbase.to_string(), "coinbase");
        assert_eq!(Exchange::Gemini.to_string(), "gemini");
    }

    #[test]
    fn raw_book_reports_its_exchange() {
        let raw = RawBook::Coinbase(coinbase::Snapshot {
            bids: vec![],
            asks: vec![],
        });
        assert_eq!(raw.exchange(), Exchange::Coinbase);
    }
}
