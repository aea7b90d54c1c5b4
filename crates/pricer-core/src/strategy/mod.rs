//! # Pricing Strategies
//!
//! A pricing strategy turns an order subtotal into a (possibly) discounted
//! total. Rules are independent of the checkout code that calls them, so new
//! discount policies plug in without touching it.
//!
//! ## Strategy Family
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PricingStrategy::apply(subtotal, items)              │
//! │                                                                         │
//! │  NoDiscount           subtotal                                         │
//! │  PercentageDiscount   round(subtotal - subtotal × percent / 100)       │
//! │  BulkItemDiscount     round(subtotal - Σ per_item_off × qty)           │
//! │                         over items with sku == SKU and qty >= threshold│
//! │  CompositeStrategy    children folded left to right                    │
//! │                                                                         │
//! │  Composite[Percent(10), Bulk(A,5,1.00)]  150.00 → 135.00 → 130.00     │
//! │  Composite[Bulk(A,5,1.00), Percent(10)]  150.00 → 145.00 → 130.50     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - Every `apply` validates its inputs first (non-negative subtotal, items
//!   with non-negative qty and unit_price) and fails with
//!   [`ValidationError`](crate::error::ValidationError) before any math.
//! - Every returned amount is a [`Money`], i.e. already rounded to cents.
//! - Totals are not clamped at zero.

mod bulk;
mod composite;
mod no_discount;
mod percentage;

pub use bulk::BulkItemDiscount;
pub use composite::CompositeStrategy;
pub use no_discount::NoDiscount;
pub use percentage::PercentageDiscount;

use std::fmt;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{LineItem, StrategyKind};

/// The capability every discount rule and composite satisfies.
///
/// Implementations are immutable after construction and hold only their own
/// configuration.
pub trait PricingStrategy: fmt::Debug + Send + Sync {
    /// Identifier of this strategy's kind.
    fn kind(&self) -> StrategyKind;

    /// Computes the total for `subtotal` given the order's `items`.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](crate::error::ValidationError) if `subtotal` is
    /// negative, any item has a negative qty or unit_price, or the arithmetic
    /// overflows.
    fn apply(&self, subtotal: Money, items: &[LineItem]) -> ValidationResult<Money>;
}

impl<S: PricingStrategy + ?Sized> PricingStrategy for Box<S> {
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    fn apply(&self, subtotal: Money, items: &[LineItem]) -> ValidationResult<Money> {
        (**self).apply(subtotal, items)
    }
}
