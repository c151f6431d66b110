//! Reservation Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reservation entity
///
/// One pre-order of a product per user. `tejo_discount` records whether the
/// member-discount offer (10%, twice a year) applies; `support` is an
/// optional extra contribution on top of the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: i64,
    /// Code of the reserved product
    pub product_code: String,
    pub user_id: i64,
    /// Number of units ordered
    pub amount: u32,
    /// TEJO/UEA member discount applies
    pub tejo_discount: bool,
    /// Voluntary support amount (EUR)
    pub support: Decimal,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

impl Reservation {
    /// Create a new reservation with the default field values
    pub fn new(id: i64, product_code: impl Into<String>, user_id: i64) -> Self {
        Self {
            id,
            product_code: product_code.into(),
            user_id,
            amount: 1,
            tejo_discount: false,
            support: Decimal::ZERO,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_defaults() {
        let reservation = Reservation::new(7, "libro2024", 42);
        assert_eq!(reservation.amount, 1);
        assert!(!reservation.tejo_discount);
        assert_eq!(reservation.support, Decimal::ZERO);
    }

    #[test]
    fn test_reservation_roundtrip() {
        let mut reservation = Reservation::new(7, "libro2024", 42);
        reservation.amount = 3;
        reservation.support = Decimal::new(350, 2);
        reservation.created_at = 0;

        let json = serde_json::to_string(&reservation).unwrap();
        let back: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reservation);
    }
}
