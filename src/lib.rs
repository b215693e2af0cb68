//! bookwalk: consolidated order book liquidity pricing.
//!
//! Fetches level-2 order book snapshots from multiple cryptocurrency
//! exchanges, normalizes each venue's shape into a common book, merges the
//! books into one consolidated view, and walks the merged depth to answer
//! what a market buy or sell of N units would cost right now.
//!
//! # Architecture
//!
//! Data flows one way, from raw venue payloads to a priced report:
//!
//! - [`exchange`]: per-venue payload shapes and their normalizers
//! - [`domain`]: canonical book types, consolidation, the liquidity walk
//! - [`fetch`]: HTTP snapshot retrieval and the per-venue cache
//! - [`app`]: the aggregation pipeline
//! - [`config`], [`cli`], [`report`]: TOML configuration, argument parsing,
//!   report rendering
//!
//! The core (normalize, consolidate, sweep) is pure and synchronous. Venue
//! unavailability degrades to an empty book instead of an error, so one
//! venue being down never hides the others' liquidity.
//!
//! # Example
//!
//! ```
//! use bookwalk::domain::{consolidate, sweep_cost, Book, PriceLevel};
//! use rust_decimal_macros::dec;
//!
//! let coinbase = Book::new(vec![], vec![PriceLevel::new(dec!(100), dec!(1))]);
//! let gemini = Book::new(vec![], vec![PriceLevel::new(dec!(101), dec!(2))]);
//!
//! let merged = consolidate([coinbase, gemini]);
//! let buy = sweep_cost(merged.asks(), dec!(2));
//!
//! assert_eq!(buy.total_cost, dec!(201));
//! assert!(!buy.is_partial());
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod fetch;
pub mod report;
