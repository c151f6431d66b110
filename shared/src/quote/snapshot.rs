//! Quote totals and display snapshot

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full-precision breakdown of an order quote
///
/// Every monetary field carries the unrounded value; rounding happens only
/// when formatting for display. `billable_units` may be -1: a reservation
/// with the in-book option consumes one unit at the discounted price, and
/// an amount of zero is not clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QuoteTotals {
    /// Units ordered (raw amount, drives the volume discount tier)
    pub units: u32,
    /// Units billed at the regular price
    pub billable_units: i64,
    /// Whether the first unit is billed at the discounted in-book price
    pub in_book: bool,
    /// Voluntary support amount (never negative)
    pub support: Decimal,
    /// billable_units x unit price
    pub product_sum: Decimal,
    /// Product sum plus the discounted first unit, when in book
    pub product_total: Decimal,
    /// One third of the product total, from 3 units up
    pub volume_discount: Decimal,
    /// 10% of the volume-discounted remainder, when eligible
    pub tejo_discount: Decimal,
    /// Fixed shipping cost
    pub shipping: Decimal,
    /// Final amount to pay
    pub total: Decimal,
}

/// Display form of a quote
///
/// Amounts are formatted with exactly two fraction digits and a comma
/// decimal separator. Discounts are rendered negated, as the subtracted
/// line items they appear as on the order page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteSnapshot {
    pub product_sum: String,
    pub volume_discount: String,
    pub tejo_discount: String,
    pub total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_default_is_zeroed() {
        let totals = QuoteTotals::default();
        assert_eq!(totals.units, 0);
        assert_eq!(totals.billable_units, 0);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_snapshot_serialize() {
        let snapshot = QuoteSnapshot {
            product_sum: "40,00".to_string(),
            volume_discount: "-15,00".to_string(),
            tejo_discount: "0,00".to_string(),
            total: "32,00".to_string(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"volume_discount\":\"-15,00\""));

        let back: QuoteSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
