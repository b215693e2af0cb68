//! Monetary types for price and size representation.
//!
//! Both aliases resolve to [`Decimal`] so book arithmetic is exact; binary
//! floats never appear in the pipeline.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Order size represented as a Decimal for precision.
pub type Size = Decimal;
