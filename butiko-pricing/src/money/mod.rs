//! Money helpers using rust_decimal for precision
//!
//! This module provides precise decimal arithmetic for monetary values.
//! All calculations are done using `Decimal` internally; conversion to
//! `f64` and display formatting happen only at the boundary.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult};

/// Rounding for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::config(format!(
            "{} must be a finite number, got {}",
            field_name, value
        ))
        .with_detail("field", field_name));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO to avoid silent data corruption in monetary calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: a Decimal rounded to 2dp is always within f64 range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Parse decimal text as rendered on the order page
///
/// Accepts a comma or period decimal separator. Strict full-string parse
/// after trimming; anything else returns None.
pub fn parse_amount_text(text: &str) -> Option<Decimal> {
    text.trim().replace(',', ".").parse::<Decimal>().ok()
}

/// Parse the free-text support amount
///
/// Unparseable input degrades to zero and negative values clamp to zero;
/// a bad support entry must never invalidate the quote.
pub fn parse_support(text: &str) -> Decimal {
    parse_amount_text(text)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}

/// Format a monetary value for display
///
/// Exactly two fraction digits, comma decimal separator, midpoint rounded
/// away from zero. A zero amount renders "0,00", never "-0,00".
pub fn format_amount(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{:.2}", rounded).replace('.', ",")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
