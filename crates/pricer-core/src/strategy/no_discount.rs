use tracing::debug;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{LineItem, StrategyKind};
use crate::validation::validate_apply_inputs;

use super::PricingStrategy;

/// Returns the subtotal unchanged. The identity element for composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl NoDiscount {
    pub const fn new() -> Self {
        NoDiscount
    }
}

impl PricingStrategy for NoDiscount {
    fn kind(&self) -> StrategyKind {
        StrategyKind::None
    }

    fn apply(&self, subtotal: Money, items: &[LineItem]) -> ValidationResult<Money> {
        validate_apply_inputs(subtotal, items)?;
        debug!(%subtotal, "no discount applied");
        Ok(subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_returns_subtotal_unchanged() {
        let items = [LineItem::new("A", 2, dec!(10.00))];
        let total = NoDiscount.apply(Money::from_cents(2000), &items).unwrap();
        assert_eq!(total, Money::from_cents(2000));
    }

    #[test]
    fn test_is_idempotent() {
        let once = NoDiscount.apply(Money::from_cents(1234), &[]).unwrap();
        let twice = NoDiscount.apply(once, &[]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_negative_subtotal() {
        let err = NoDiscount.apply(Money::from_cents(-1), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::MustBeNonNegative { .. }));
    }

    #[test]
    fn test_rejects_invalid_items() {
        let items = [LineItem::new("A", -2, dec!(1.00))];
        assert!(NoDiscount.apply(Money::zero(), &items).is_err());
    }
}
