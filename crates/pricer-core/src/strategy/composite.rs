use tracing::{debug, trace};

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{LineItem, StrategyKind};
use crate::validation::validate_apply_inputs;

use super::PricingStrategy;

/// Chains strategies, feeding each one's total into the next.
///
/// Order is part of the configuration: percent-then-bulk and bulk-then-percent
/// generally produce different totals. An empty chain behaves like
/// [`NoDiscount`](super::NoDiscount); the factory refuses to build one.
#[derive(Debug)]
pub struct CompositeStrategy {
    strategies: Vec<Box<dyn PricingStrategy>>,
}

impl CompositeStrategy {
    pub fn new(strategies: Vec<Box<dyn PricingStrategy>>) -> Self {
        CompositeStrategy { strategies }
    }
}

impl PricingStrategy for CompositeStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Composite
    }

    fn apply(&self, subtotal: Money, items: &[LineItem]) -> ValidationResult<Money> {
        validate_apply_inputs(subtotal, items)?;

        let total = self
            .strategies
            .iter()
            .enumerate()
            .try_fold(subtotal, |running, (step, strategy)| -> ValidationResult<Money> {
                let next = strategy.apply(running, items)?;
                trace!(step, kind = %strategy.kind(), %running, %next, "composite step");
                Ok(next)
            })?;

        debug!(steps = self.strategies.len(), %subtotal, %total, "composite applied");
        Ok(total)
    }
}
