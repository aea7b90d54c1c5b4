use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LineItem, StrategyKind};
use crate::validation::{validate_apply_inputs, validate_percent};

use super::PricingStrategy;

/// Takes a fixed percentage off the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    percent: Decimal,
}

impl PercentageDiscount {
    /// Creates a percentage discount.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::strategy::{PercentageDiscount, PricingStrategy};
    /// use pricer_core::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let ten_off = PercentageDiscount::new(Decimal::TEN).unwrap();
    /// let total = ten_off.apply(Money::from_cents(15000), &[]).unwrap();
    /// assert_eq!(total, Money::from_cents(13500));
    /// ```
    ///
    /// # Errors
    ///
    /// [`ValidationError::PercentOutOfRange`] unless `0 <= percent <= 100`.
    pub fn new(percent: Decimal) -> ValidationResult<Self> {
        validate_percent(percent)?;
        Ok(PercentageDiscount { percent })
    }

    pub fn percent(&self) -> Decimal {
        self.percent
    }
}

impl PricingStrategy for PercentageDiscount {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Percent
    }

    fn apply(&self, subtotal: Money, items: &[LineItem]) -> ValidationResult<Money> {
        validate_apply_inputs(subtotal, items)?;

        let amount = subtotal.to_decimal();
        let discount = amount
            .checked_mul(self.percent)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| ValidationError::overflow("discount"))?;
        let total = Money::from_decimal(amount - discount)?;

        debug!(percent = %self.percent, %subtotal, %total, "percentage discount applied");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::NoDiscount;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ten_percent_off() {
        let strategy = PercentageDiscount::new(dec!(10)).unwrap();
        let total = strategy.apply(Money::from_cents(15000), &[]).unwrap();
        assert_eq!(total, Money::from_cents(13500));
    }

    #[test]
    fn test_result_is_rounded_to_cents() {
        // 9.99 × 12.5% = 1.24875 → 9.99 - 1.24875 = 8.74125 → 8.74
        let strategy = PercentageDiscount::new(dec!(12.5)).unwrap();
        let total = strategy.apply(Money::from_cents(999), &[]).unwrap();
        assert_eq!(total, Money::from_cents(874));
    }

    #[test]
    fn test_zero_percent_matches_no_discount() {
        let strategy = PercentageDiscount::new(dec!(0)).unwrap();
        let subtotal = Money::from_cents(4321);
        assert_eq!(
            strategy.apply(subtotal, &[]).unwrap(),
            NoDiscount.apply(subtotal, &[]).unwrap()
        );
    }

    #[test]
    fn test_hundred_percent_is_free() {
        let strategy = PercentageDiscount::new(dec!(100)).unwrap();
        let total = strategy.apply(Money::from_cents(98765), &[]).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_construction_rejects_out_of_range() {
        assert_eq!(
            PercentageDiscount::new(dec!(-1)),
            Err(ValidationError::PercentOutOfRange { value: dec!(-1) })
        );
        assert_eq!(
            PercentageDiscount::new(dec!(101)),
            Err(ValidationError::PercentOutOfRange { value: dec!(101) })
        );
    }

    #[test]
    fn test_rejects_invalid_items_before_discounting() {
        let strategy = PercentageDiscount::new(dec!(50)).unwrap();
        let items = [LineItem::new("A", 1, dec!(-3))];
        let err = strategy.apply(Money::from_cents(100), &items).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "unit_price".to_string()
            }
        );
    }
}
