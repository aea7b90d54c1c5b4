use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LineItem, StrategyKind};
use crate::validation::{validate_apply_inputs, validate_per_item_off, validate_rule_sku};

use super::PricingStrategy;

/// Per-unit reduction for one SKU once a line reaches a quantity threshold.
///
/// ## Rules
/// ```text
/// for each item, in input order:
///     item.sku == sku && item.qty >= threshold  →  total -= per_item_off × qty
/// ```
/// - Every qualifying line contributes its own full deduction; deductions
///   stack and are not capped, so the total may go below zero.
/// - A `threshold` of zero or less makes every line of the SKU qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkItemDiscount {
    sku: String,
    threshold: i64,
    per_item_off: Decimal,
}

impl BulkItemDiscount {
    /// Creates a bulk discount.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Required`] for an empty `sku`
    /// - [`ValidationError::InvalidFormat`] for a `sku` with surrounding whitespace
    /// - [`ValidationError::MustBeNonNegative`] if `per_item_off` is negative
    pub fn new(sku: impl Into<String>, threshold: i64, per_item_off: Decimal) -> ValidationResult<Self> {
        let sku = sku.into();
        validate_rule_sku(&sku)?;
        validate_per_item_off(per_item_off)?;

        Ok(BulkItemDiscount {
            sku,
            threshold,
            per_item_off,
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn per_item_off(&self) -> Decimal {
        self.per_item_off
    }

    fn qualifies(&self, item: &LineItem) -> bool {
        item.sku == self.sku && item.qty >= self.threshold
    }
}

impl PricingStrategy for BulkItemDiscount {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Bulk
    }

    fn apply(&self, subtotal: Money, items: &[LineItem]) -> ValidationResult<Money> {
        validate_apply_inputs(subtotal, items)?;

        let running = items
            .iter()
            .filter(|item| self.qualifies(item))
            .try_fold(subtotal.to_decimal(), |running, item| -> ValidationResult<Decimal> {
                let deduction = self
                    .per_item_off
                    .checked_mul(Decimal::from(item.qty))
                    .ok_or_else(|| ValidationError::overflow("bulk deduction"))?;
                trace!(sku = %item.sku, qty = item.qty, %deduction, "bulk line qualifies");
                running
                    .checked_sub(deduction)
                    .ok_or_else(|| ValidationError::overflow("bulk deduction"))
            })?;
        let total = Money::from_decimal(running)?;

        debug!(sku = %self.sku, threshold = self.threshold, %subtotal, %total, "bulk discount applied");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bulk_a() -> BulkItemDiscount {
        BulkItemDiscount::new("A", 5, dec!(1.0)).unwrap()
    }

    #[test]
    fn test_only_matching_sku_is_discounted() {
        let items = [
            LineItem::new("A", 5, dec!(10.0)),
            LineItem::new("B", 10, dec!(10.0)),
        ];
        let total = bulk_a().apply(Money::from_cents(15000), &items).unwrap();
        assert_eq!(total, Money::from_cents(14500));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let at = [LineItem::new("A", 5, dec!(2.0))];
        let below = [LineItem::new("A", 4, dec!(2.0))];
        let strategy = bulk_a();

        assert_eq!(
            strategy.apply(Money::from_cents(1000), &at).unwrap(),
            Money::from_cents(500)
        );
        assert_eq!(
            strategy.apply(Money::from_cents(800), &below).unwrap(),
            Money::from_cents(800)
        );
    }

    #[test]
    fn test_matching_lines_stack() {
        let items = [
            LineItem::new("A", 5, dec!(10.0)),
            LineItem::new("A", 6, dec!(10.0)),
        ];
        let total = bulk_a().apply(Money::from_cents(11000), &items).unwrap();
        assert_eq!(total, Money::from_cents(11000 - 500 - 600));
    }

    #[test]
    fn test_total_is_not_clamped_at_zero() {
        let strategy = BulkItemDiscount::new("A", 1, dec!(3.00)).unwrap();
        let items = [
            LineItem::new("A", 2, dec!(1.00)),
            LineItem::new("A", 2, dec!(1.00)),
        ];
        let total = strategy.apply(Money::from_cents(400), &items).unwrap();
        assert_eq!(total, Money::from_cents(-800));
    }

    #[test]
    fn test_non_positive_threshold_always_qualifies() {
        let items = [LineItem::new("A", 0, dec!(1.00)), LineItem::new("A", 3, dec!(1.00))];

        for threshold in [0, -7] {
            let strategy = BulkItemDiscount::new("A", threshold, dec!(0.25)).unwrap();
            let total = strategy.apply(Money::from_cents(300), &items).unwrap();
            assert_eq!(total, Money::from_cents(225));
        }
    }

    #[test]
    fn test_fractional_reduction_rounds_once() {
        let strategy = BulkItemDiscount::new("A", 1, dec!(0.333)).unwrap();
        let items = [LineItem::new("A", 3, dec!(1.00))];
        // 3.00 - 0.999 = 2.001 → 2.00
        let total = strategy.apply(Money::from_cents(300), &items).unwrap();
        assert_eq!(total, Money::from_cents(200));
    }

    #[test]
    fn test_construction_validates_parameters() {
        assert_eq!(
            BulkItemDiscount::new("", 5, dec!(1.0)),
            Err(ValidationError::Required {
                field: "sku".to_string()
            })
        );
        assert_eq!(
            BulkItemDiscount::new("A", 5, dec!(-1.0)),
            Err(ValidationError::MustBeNonNegative {
                field: "per_item_off".to_string()
            })
        );
    }

    #[test]
    fn test_long_sku_is_accepted_and_matched() {
        let sku = "X".repeat(51);
        let strategy = BulkItemDiscount::new(sku.clone(), 1, dec!(1)).unwrap();
        let items = [LineItem::new(sku, 2, dec!(5.00))];
        let total = strategy.apply(Money::from_cents(1000), &items).unwrap();
        assert_eq!(total, Money::from_cents(800));
    }

    #[test]
    fn test_padded_sku_is_rejected() {
        for sku in ["A ", " A"] {
            assert!(matches!(
                BulkItemDiscount::new(sku, 1, dec!(1)),
                Err(ValidationError::InvalidFormat { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_invalid_items() {
        let items = [LineItem::new("B", -1, dec!(1.0))];
        assert!(bulk_a().apply(Money::from_cents(100), &items).is_err());
    }
}
