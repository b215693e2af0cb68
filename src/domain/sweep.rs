//! Liquidity consumption over one side of a book.
//!
//! Pricing a market order against level-2 depth is a greedy walk from the
//! best price outward: take as much of each level as is still needed and
//! accumulate `taken * price`. Running out of depth is a reportable
//! outcome, not an error, so the shortfall travels in the result.

use rust_decimal::Decimal;

use super::book::PriceLevel;
use super::money::{Price, Size};

/// Outcome of walking one side of a book for a target quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Exact cost of the consumed levels, with no intermediate rounding.
    pub total_cost: Price,
    /// Quantity the visible depth could not satisfy.
    pub unfilled: Size,
}

impl SweepResult {
    /// Returns `true` if the walk ran out of liquidity before the target.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.unfilled > Decimal::ZERO
    }
}

/// Walks `levels` best-first and prices a market order of `quantity`.
///
/// `levels` must already be in best-first order for the direction being
/// priced: ascending for a buy over asks, descending for a sell over bids.
/// Both [`Book`](super::book::Book) sides guarantee this by construction.
/// A negative `quantity` is treated as zero, so `total_cost` and `unfilled`
/// are never negative. A level whose cost cannot be represented in
/// [`Decimal`] ends the walk; the remainder reports as unfilled.
#[must_use]
pub fn sweep_cost(levels: &[PriceLevel], quantity: Size) -> SweepResult {
    let mut remaining = quantity.max(Decimal::ZERO);
    let mut total_cost = Decimal::ZERO;

    for level in levels {
        if remaining <= Decimal::ZERO {
            break;
        }
        let take = remaining.min(level.size());
        // Checked arithmetic: a product or running total past Decimal's
        // range means the rest of the depth is unusable, not a panic.
        let Some(total) = take
            .checked_mul(level.price())
            .and_then(|cost| total_cost.checked_add(cost))
        else {
            break;
        };
        total_cost = total;
        remaining -= take;
    }

    SweepResult {
        total_cost,
        unfilled: remaining,
    }
}
