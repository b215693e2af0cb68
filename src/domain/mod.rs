//! Exchange-agnostic order book domain.
//!
//! Everything in here is pure and synchronous: books are immutable value
//! types, consolidation builds a new book, and the liquidity walk reads a
//! slice. IO lives in [`fetch`](crate::fetch) and [`app`](crate::app).

mod book;
mod money;
mod sweep;

pub use book::{consolidate, Book, PriceLevel};
pub use money::{Price, Size};
pub use sweep::{sweep_cost, SweepResult};
