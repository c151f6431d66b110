//! Reactive order-pricing model
//!
//! [`PricingModel`] derives an order total from a small set of mutable
//! inputs (unit count, in-book flag, free-text support amount, discount
//! eligibility) and the immutable [`PriceConfig`] constants. Every setter
//! recomputes the full [`QuoteTotals`] synchronously before returning, so
//! a read after any mutation always observes consistent values.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{Product, Reservation};
use shared::quote::{QuoteSnapshot, QuoteTotals};

use crate::money;

/// Unit threshold for the volume discount
const VOLUME_DISCOUNT_MIN_UNITS: u32 = 3;
/// Volume discount divisor: one third off the product total
const VOLUME_DISCOUNT_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
/// TEJO discount divisor: 10% off the volume-discounted remainder
const TEJO_DISCOUNT_DIVISOR: Decimal = Decimal::TEN;

/// Immutable pricing constants, read once from the rendered order page
#[derive(Debug, Clone, PartialEq)]
pub struct PriceConfig {
    unit_price: Decimal,
    in_book_price: Decimal,
    shipping: Decimal,
}

impl PriceConfig {
    /// Create a validated config; every price must be non-negative
    pub fn new(unit_price: Decimal, in_book_price: Decimal, shipping: Decimal) -> AppResult<Self> {
        require_non_negative(unit_price, "unit_price")?;
        require_non_negative(in_book_price, "in_book_price")?;
        require_non_negative(shipping, "shipping")?;
        Ok(Self {
            unit_price,
            in_book_price,
            shipping,
        })
    }

    /// Build from raw floats, validating finiteness at the boundary
    pub fn from_floats(unit_price: f64, in_book_price: f64, shipping: f64) -> AppResult<Self> {
        money::require_finite(unit_price, "unit_price")?;
        money::require_finite(in_book_price, "in_book_price")?;
        money::require_finite(shipping, "shipping")?;
        Self::new(
            money::to_decimal(unit_price),
            money::to_decimal(in_book_price),
            money::to_decimal(shipping),
        )
    }

    /// Parse the constants as rendered on the page ("8,99" style)
    pub fn parse(unit_price: &str, in_book_price: &str, shipping: &str) -> AppResult<Self> {
        Self::new(
            parse_price_field(unit_price, "unit_price")?,
            parse_price_field(in_book_price, "in_book_price")?,
            parse_price_field(shipping, "shipping")?,
        )
    }

    /// Constants for ordering `product` with a fixed shipping cost
    pub fn for_product(product: &Product, shipping: Decimal) -> AppResult<Self> {
        Self::new(product.price, product.low_price, shipping)
    }

    /// Regular unit price
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Discounted first-unit price for in-book orders
    pub fn in_book_price(&self) -> Decimal {
        self.in_book_price
    }

    /// Fixed shipping cost
    pub fn shipping(&self) -> Decimal {
        self.shipping
    }
}

fn parse_price_field(text: &str, field_name: &str) -> AppResult<Decimal> {
    money::parse_amount_text(text).ok_or_else(|| {
        AppError::config(format!("{} is not a decimal amount", field_name))
            .with_detail("field", field_name)
            .with_detail("value", text)
    })
}

fn require_non_negative(value: Decimal, field_name: &str) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(
            AppError::config(format!("{} must not be negative, got {}", field_name, value))
                .with_detail("field", field_name),
        );
    }
    Ok(())
}

/// Change listener invoked with the fresh totals after every recompute
pub type QuoteListener = Box<dyn Fn(&QuoteTotals) + Send>;

/// Reactive pricing model for one order form
///
/// Single-threaded and synchronous: each setter mutates its input,
/// recomputes every derived value and notifies listeners before returning.
/// Setters never fail; only config construction does.
pub struct PricingModel {
    config: PriceConfig,
    amount: u32,
    in_book: bool,
    support_raw: String,
    tejo_discount_eligible: bool,
    totals: QuoteTotals,
    listeners: Vec<QuoteListener>,
}

impl std::fmt::Debug for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingModel")
            .field("config", &self.config)
            .field("amount", &self.amount)
            .field("in_book", &self.in_book)
            .field("support_raw", &self.support_raw)
            .field("tejo_discount_eligible", &self.tejo_discount_eligible)
            .field("totals", &self.totals)
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl PricingModel {
    /// Create a model with initial inputs; totals are computed immediately
    pub fn new(
        config: PriceConfig,
        amount: u32,
        in_book: bool,
        support_raw: impl Into<String>,
    ) -> Self {
        let mut model = Self {
            config,
            amount,
            in_book,
            support_raw: support_raw.into(),
            tejo_discount_eligible: false,
            totals: QuoteTotals::default(),
            listeners: Vec::new(),
        };
        model.recompute();
        model
    }

    /// Seed a model from a stored reservation
    ///
    /// Whether the first unit is billed at the in-book price depends on the
    /// buyer's host status, which is not part of the reservation record.
    pub fn for_reservation(
        product: &Product,
        reservation: &Reservation,
        in_book: bool,
        shipping: Decimal,
    ) -> AppResult<Self> {
        let config = PriceConfig::for_product(product, shipping)?;
        let mut model = Self {
            config,
            amount: reservation.amount,
            in_book,
            support_raw: money::format_amount(reservation.support),
            tejo_discount_eligible: reservation.tejo_discount,
            totals: QuoteTotals::default(),
            listeners: Vec::new(),
        };
        model.recompute();
        Ok(model)
    }

    /// Set the number of units ordered
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
        self.recompute();
    }

    /// Set whether the first unit is billed at the in-book price
    pub fn set_in_book(&mut self, in_book: bool) {
        self.in_book = in_book;
        self.recompute();
    }

    /// Set the free-text support amount
    pub fn set_support_raw(&mut self, support_raw: impl Into<String>) {
        self.support_raw = support_raw.into();
        self.recompute();
    }

    /// Set eligibility for the member discount
    pub fn set_tejo_discount_eligible(&mut self, eligible: bool) {
        self.tejo_discount_eligible = eligible;
        self.recompute();
    }

    /// Register a change listener
    ///
    /// Listeners run synchronously after every recompute, in registration
    /// order. Registration itself does not fire.
    pub fn subscribe(&mut self, listener: impl Fn(&QuoteTotals) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current full-precision breakdown
    pub fn totals(&self) -> &QuoteTotals {
        &self.totals
    }

    /// Pricing constants
    pub fn config(&self) -> &PriceConfig {
        &self.config
    }

    /// Units ordered
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// In-book flag
    pub fn in_book(&self) -> bool {
        self.in_book
    }

    /// Raw support input text
    pub fn support_raw(&self) -> &str {
        &self.support_raw
    }

    /// Member discount eligibility
    pub fn tejo_discount_eligible(&self) -> bool {
        self.tejo_discount_eligible
    }

    /// Current display values, formatted for the order page
    pub fn snapshot(&self) -> QuoteSnapshot {
        QuoteSnapshot {
            product_sum: money::format_amount(self.totals.product_sum),
            volume_discount: money::format_amount(-self.totals.volume_discount),
            tejo_discount: money::format_amount(-self.totals.tejo_discount),
            total: money::format_amount(self.totals.total),
        }
    }

    fn recompute(&mut self) {
        // An in-book order consumes one unit at the discounted price.
        // Amount zero is not clamped, so billable_units can reach -1.
        let billable_units = if self.in_book {
            i64::from(self.amount) - 1
        } else {
            i64::from(self.amount)
        };
        let support = money::parse_support(&self.support_raw);

        let product_sum = Decimal::from(billable_units) * self.config.unit_price;
        let product_total = if self.in_book {
            self.config.in_book_price + product_sum
        } else {
            product_sum
        };

        // Tier keys on the raw amount, not on billable_units. The TEJO
        // discount divides the volume-discounted remainder, so the volume
        // discount must be computed first.
        let volume_discount = if self.amount >= VOLUME_DISCOUNT_MIN_UNITS {
            product_total / VOLUME_DISCOUNT_DIVISOR
        } else {
            Decimal::ZERO
        };
        let tejo_discount = if self.tejo_discount_eligible {
            (product_total - volume_discount) / TEJO_DISCOUNT_DIVISOR
        } else {
            Decimal::ZERO
        };

        let total =
            product_total - volume_discount - tejo_discount + support + self.config.shipping;

        self.totals = QuoteTotals {
            units: self.amount,
            billable_units,
            in_book: self.in_book,
            support,
            product_sum,
            product_total,
            volume_discount,
            tejo_discount,
            shipping: self.config.shipping,
            total,
        };

        for listener in &self.listeners {
            listener(&self.totals);
        }
    }
}
