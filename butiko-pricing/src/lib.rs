//! Order pricing engine
//!
//! Reactive pricing core for book-shop reservations: precise decimal money
//! helpers and the [`PricingModel`] that keeps an order total consistent
//! while the buyer edits the order form.

pub mod model;
pub mod money;

pub use model::{PriceConfig, PricingModel, QuoteListener};
