//! # Order Pricing
//!
//! Subtotal calculation and the one-call "price this order" entry point.
//!
//! ## Flow
//! ```text
//! items ──► compute_subtotal ──► strategy.apply(subtotal, items) ──► Quote
//!              (validated,            (validated again,
//!               rounded once)          rounded once)
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::strategy::PricingStrategy;
use crate::types::{LineItem, Quote};
use crate::validation::validate_line_items;

/// Sums `qty × unit_price` over `items` and rounds the sum to cents.
///
/// Line totals are summed exactly and rounded once, so sub-cent unit prices
/// do not accumulate rounding error.
///
/// ## Example
/// ```rust
/// use pricer_core::pricing::compute_subtotal;
/// use pricer_core::{LineItem, Money};
/// use rust_decimal::Decimal;
///
/// let items = [
///     LineItem::new("A", 5, Decimal::TEN),
///     LineItem::new("B", 10, Decimal::TEN),
/// ];
/// assert_eq!(compute_subtotal(&items).unwrap(), Money::from_cents(15000));
/// assert_eq!(compute_subtotal(&[]).unwrap(), Money::zero());
/// ```
///
/// # Errors
///
/// - [`ValidationError::MustBeNonNegative`] for a negative qty or unit_price
/// - [`ValidationError::Overflow`] if the sum does not fit
pub fn compute_subtotal(items: &[LineItem]) -> ValidationResult<Money> {
    validate_line_items(items)?;

    let sum = items.iter().try_fold(Decimal::ZERO, |sum, item| {
        item.line_total()
            .and_then(|line| sum.checked_add(line))
            .ok_or_else(|| ValidationError::overflow("subtotal"))
    })?;

    Money::from_decimal(sum)
}

/// Prices an order: subtotal, then `strategy`.
///
/// # Errors
///
/// Any error from [`compute_subtotal`] or from the strategy. No partial
/// result is returned.
pub fn price_order<S>(items: &[LineItem], strategy: &S) -> ValidationResult<Quote>
where
    S: PricingStrategy + ?Sized,
{
    let subtotal = compute_subtotal(items)?;
    let total = strategy.apply(subtotal, items)?;
    let quote = Quote {
        subtotal,
        strategy: strategy.kind(),
        total,
    };

    debug!(items = items.len(), %subtotal, strategy = %quote.strategy, %total, "order priced");
    Ok(quote)
}

// =============================================================================
// Unit Tests
// =============================================================================
