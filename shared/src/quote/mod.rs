//! Quote value types
//!
//! Value types produced by the pricing engine: the full-precision numeric
//! breakdown ([`QuoteTotals`]), its formatted display form
//! ([`QuoteSnapshot`]) and the order form's quantity presets
//! ([`AmountChoice`]).

mod snapshot;
mod types;

pub use snapshot::{QuoteSnapshot, QuoteTotals};
pub use types::AmountChoice;
