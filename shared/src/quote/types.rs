//! Shared types for order quoting

use serde::{Deserialize, Serialize};

/// Quantity choice offered by the order form
///
/// The form presents buttons for 1 through 9 units plus a "9+" bulk choice.
/// Mapping the bulk choice to a concrete amount is form policy; the pricing
/// model itself accepts any unit count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountChoice {
    /// A concrete unit count (1-9 on the form)
    Units(u32),
    /// The "9+" choice
    Bulk,
}

impl AmountChoice {
    /// Unit count the bulk choice stands for
    pub const BULK_UNITS: u32 = 15;

    /// The choices in form display order
    pub const ALL: [AmountChoice; 10] = [
        AmountChoice::Units(1),
        AmountChoice::Units(2),
        AmountChoice::Units(3),
        AmountChoice::Units(4),
        AmountChoice::Units(5),
        AmountChoice::Units(6),
        AmountChoice::Units(7),
        AmountChoice::Units(8),
        AmountChoice::Units(9),
        AmountChoice::Bulk,
    ];

    /// Concrete unit count for this choice
    pub const fn units(&self) -> u32 {
        match self {
            AmountChoice::Units(n) => *n,
            AmountChoice::Bulk => Self::BULK_UNITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_mapping() {
        assert_eq!(AmountChoice::Units(4).units(), 4);
        assert_eq!(AmountChoice::Bulk.units(), 15);
    }

    #[test]
    fn test_display_order() {
        assert_eq!(AmountChoice::ALL.len(), 10);
        assert_eq!(AmountChoice::ALL[0], AmountChoice::Units(1));
        assert_eq!(AmountChoice::ALL[9], AmountChoice::Bulk);
    }
}
