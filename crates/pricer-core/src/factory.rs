//! # Strategy Factory
//!
//! Builds a [`PricingStrategy`] from a kind name and a bag of optional
//! parameters, so callers that pick rules by name (command line, config,
//! API payloads) share one construction path.
//!
//! ## Required Parameters
//! ```text
//! ┌───────────┬───────────────────────────────┬──────────────────────┐
//! │ kind      │ required params               │ produces             │
//! ├───────────┼───────────────────────────────┼──────────────────────┤
//! │ none      │ -                             │ NoDiscount           │
//! │ percent   │ percent                       │ PercentageDiscount   │
//! │ bulk      │ sku, threshold, per_item_off  │ BulkItemDiscount     │
//! │ composite │ strategies (non-empty)        │ CompositeStrategy    │
//! └───────────┴───────────────────────────────┴──────────────────────┘
//! ```
//! Parameters a kind does not need are ignored.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::strategy::{
    BulkItemDiscount, CompositeStrategy, NoDiscount, PercentageDiscount, PricingStrategy,
};
use crate::types::StrategyKind;

/// Optional construction parameters for [`choose_strategy`].
#[derive(Debug, Default)]
pub struct StrategyParams {
    pub percent: Option<Decimal>,
    pub sku: Option<String>,
    pub threshold: Option<i64>,
    pub per_item_off: Option<Decimal>,
    /// Children of a composite, in application order.
    pub strategies: Option<Vec<Box<dyn PricingStrategy>>>,
}

impl StrategyParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_percent(mut self, percent: Decimal) -> Self {
        self.percent = Some(percent);
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_per_item_off(mut self, per_item_off: Decimal) -> Self {
        self.per_item_off = Some(per_item_off);
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Box<dyn PricingStrategy>>) -> Self {
        self.strategies = Some(strategies);
        self
    }
}

fn required<T>(value: Option<T>, field: &str) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::required(field))
}

/// Builds the strategy named by `kind`.
///
/// ## Example
/// ```rust
/// use pricer_core::factory::{choose_strategy, StrategyParams};
/// use pricer_core::{Money, PricingStrategy, StrategyKind};
/// use rust_decimal::Decimal;
///
/// let strategy = choose_strategy("percent", StrategyParams::new().with_percent(Decimal::TEN)).unwrap();
/// assert_eq!(strategy.kind(), StrategyKind::Percent);
/// assert_eq!(strategy.apply(Money::from_cents(15000), &[]).unwrap(), Money::from_cents(13500));
///
/// assert!(choose_strategy("bogo", StrategyParams::new()).is_err());
/// ```
///
/// # Errors
///
/// - [`ValidationError::UnknownStrategy`] for an unrecognized `kind`
/// - everything [`build_strategy`] returns
pub fn choose_strategy(kind: &str, params: StrategyParams) -> ValidationResult<Box<dyn PricingStrategy>> {
    let kind: StrategyKind = kind.parse()?;
    build_strategy(kind, params)
}

/// Typed counterpart of [`choose_strategy`].
///
/// # Errors
///
/// - [`ValidationError::Required`] when a parameter the kind needs is absent
/// - [`ValidationError::EmptyComposite`] for a composite with no children
/// - any construction error of the concrete strategy
pub fn build_strategy(kind: StrategyKind, params: StrategyParams) -> ValidationResult<Box<dyn PricingStrategy>> {
    let strategy: Box<dyn PricingStrategy> = match kind {
        StrategyKind::None => Box::new(NoDiscount::new()),
        StrategyKind::Percent => {
            let percent = required(params.percent, "percent")?;
            Box::new(PercentageDiscount::new(percent)?)
        }
        StrategyKind::Bulk => {
            let sku = required(params.sku, "sku")?;
            let threshold = required(params.threshold, "threshold")?;
            let per_item_off = required(params.per_item_off, "per_item_off")?;
            Box::new(BulkItemDiscount::new(sku, threshold, per_item_off)?)
        }
        StrategyKind::Composite => {
            let strategies = required(params.strategies, "strategies")?;
            if strategies.is_empty() {
                return Err(ValidationError::EmptyComposite);
            }
            Box::new(CompositeStrategy::new(strategies))
        }
    };

    debug!(%kind, "strategy built");
    Ok(strategy)
}

// =============================================================================
// Unit Tests
// =============================================================================
