//! Operator-facing rendering of a liquidity report.
//!
//! The pipeline carries exact decimals end to end; rounding to display
//! precision happens here and nowhere earlier.

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::app::LiquidityReport;

/// Formats a dollar amount with two fraction digits and thousands
/// separators, e.g. `$1,234,567.89`.
///
/// Rounds half away from zero at the second fraction digit.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text.as_str(), ""),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${sign}{grouped}.{fraction:0<2}")
}

/// Formats a quantity for display, with trailing zeros trimmed.
#[must_use]
pub fn format_qty(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Renders the report block printed after a successful aggregation.
///
/// Shortfall lines appear directly under the side they apply to; a partial
/// fill still shows the cost of what the book could satisfy.
#[must_use]
pub fn render(report: &LiquidityReport, asset: &str) -> String {
    let qty = format_qty(report.quantity);
    let mut out = String::new();

    if let Some(bid) = &report.best_bid {
        let _ = writeln!(
            out,
            "Best bid: {} (size: {} {asset})",
            format_usd(bid.price()),
            format_qty(bid.size())
        );
    }
    if let Some(ask) = &report.best_ask {
        let _ = writeln!(
            out,
            "Best ask: {} (size: {} {asset})",
            format_usd(ask.price()),
            format_qty(ask.size())
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "To buy {qty} {asset}: {}", format_usd(report.buy.total_cost));
    if report.buy.is_partial() {
        let _ = writeln!(
            out,
            "Not enough liquidity to buy! Missing {} {asset}",
            format_qty(report.buy.unfilled)
        );
    }

    let _ = writeln!(out, "To sell {qty} {asset}: {}", format_usd(report.sell.total_cost));
    if report.sell.is_partial() {
        let _ = writeln!(
            out,
            "Not enough buyers! Missing {} {asset}",
            format_qty(report.sell.unfilled)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::domain::{PriceLevel, SweepResult};

    use super::*;

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(5)), "$5.00");
        assert_eq!(format_usd(dec!(201)), "$201.00");
        assert_eq!(format_usd(dec!(1000)), "$1,000.00");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(96500.5)), "$96,500.50");
    }

    #[test]
    fn format_usd_rounds_midpoints_away_from_zero() {
        assert_eq!(format_usd(dec!(96500.015)), "$96,500.02");
        assert_eq!(format_usd(dec!(0.005)), "$0.01");
        assert_eq!(format_usd(dec!(-0.005)), "$-0.01");
    }

    #[test]
    fn format_usd_carries_rounding_across_groups() {
        assert_eq!(format_usd(dec!(999.999)), "$1,000.00");
    }

    #[test]
    fn format_usd_keeps_sign_inside_symbol() {
        assert_eq!(format_usd(dec!(-1234.5)), "$-1,234.50");
    }

    #[test]
    fn format_qty_trims_trailing_zeros() {
        assert_eq!(format_qty(dec!(10)), "10");
        assert_eq!(format_qty(dec!(4.00)), "4");
        assert_eq!(format_qty(dec!(0.50)), "0.5");
        assert_eq!(format_qty(dec!(0)), "0");
    }

    fn report() -> LiquidityReport {
        LiquidityReport {
            quantity: dec!(10),
            best_bid: Some(PriceLevel::new(dec!(96500.01), dec!(0.52))),
            best_ask: Some(PriceLevel::new(dec!(96500.02), dec!(1.10))),
            buy: SweepResult {
                total_cost: dec!(965000.2),
                unfilled: dec!(0),
            },
            sell: SweepResult {
                total_cost: dec!(482500.05),
                unfilled: dec!(5),
            },
        }
    }

    #[test]
    fn render_shows_best_levels_and_totals() {
        let text = render(&report(), "BTC");
        assert!(text.contains("Best bid: $96,500.01 (size: 0.52 BTC)"));
        assert!(text.contains("Best ask: $96,500.02 (size: 1.1 BTC)"));
        assert!(text.contains("To buy 10 BTC: $965,000.20"));
        assert!(text.contains("To sell 10 BTC: $482,500.05"));
    }

    #[test]
    fn render_reports_shortfall_under_its_side() {
        let text = render(&report(), "BTC");
        assert!(!text.contains("Not enough liquidity to buy!"));
        assert!(text.contains("Not enough buyers! Missing 5 BTC"));

        let sell_line = text.lines().position(|l| l.starts_with("To sell")).unwrap();
        let shortfall = text
            .lines()
            .position(|l| l.starts_with("Not enough buyers"))
            .unwrap();
        assert_eq!(shortfall, sell_line + 1);
    }

    #[test]
    fn render_skips_missing_sides() {
        let mut partial = report();
        partial.best_bid = None;
        let text = render(&partial, "BTC");
        assert!(!text.contains("Best bid"));
        assert!(text.contains("Best ask"));
    }
}
