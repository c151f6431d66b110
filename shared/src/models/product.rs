//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default unit price (EUR)
pub const DEFAULT_PRICE: Decimal = Decimal::from_parts(899, 0, 0, false, 2);
/// Default discounted first-unit price for listed hosts (EUR)
pub const DEFAULT_LOW_PRICE: Decimal = Decimal::from_parts(299, 0, 0, false, 2);

/// Product entity
///
/// A sellable edition of the book. `price` is the regular unit price,
/// `low_price` the discounted price of the first unit for hosts whose
/// entry appears in the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unique product code (e.g. edition year)
    pub code: String,
    pub price: Decimal,
    pub low_price: Decimal,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

impl Product {
    /// Create a new product with the default prices
    pub fn new(id: i64, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            price: DEFAULT_PRICE,
            low_price: DEFAULT_LOW_PRICE,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let product = Product::new(1, "Book 2024", "libro2024");
        assert_eq!(product.price, Decimal::new(899, 2));
        assert_eq!(product.low_price, Decimal::new(299, 2));
        assert_eq!(product.code, "libro2024");
    }

    #[test]
    fn test_product_serialize() {
        let mut product = Product::new(1, "Book 2024", "libro2024");
        product.created_at = 0;
        let json = serde_json::to_string(&product).unwrap();
        // serde-with-float: decimals serialize as JSON numbers
        assert!(json.contains("\"price\":8.99"));
        assert!(json.contains("\"low_price\":2.99"));
    }
}
