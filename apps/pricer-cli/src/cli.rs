//! Command-line arguments and strategy selection.

use std::path::PathBuf;

use clap::Parser;
use pricer_core::{build_strategy, NoDiscount, PricingStrategy, StrategyKind, StrategyParams};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Pricing CLI (strategy pattern).
#[derive(Parser, Debug, Clone)]
#[command(name = "pricer", author, version, long_about = None)]
pub struct Args {
    /// JSON list of items: [{"sku":"A","qty":2,"unit_price":10.0}, ...]
    #[arg(long)]
    pub items: String,

    /// Strategy kind: none, percent, bulk or composite [default: from config, else none]
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Percent discount for 'percent' or 'composite'
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub percent: Decimal,

    /// SKU for 'bulk' or 'composite'
    #[arg(long, default_value = "")]
    pub sku: String,

    /// Quantity threshold for 'bulk' or 'composite'
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Per-item reduction for 'bulk' or 'composite'
    #[arg(long = "per-item-off", default_value = "0", allow_negative_numbers = true)]
    pub per_item_off: Decimal,

    /// Order in which a composite applies its parts
    #[arg(long, value_delimiter = ',', default_value = "percent,bulk")]
    pub chain: Vec<StrategyKind>,

    /// Output format [default: from config, else text]
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error or directives)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    fn params(&self) -> StrategyParams {
        StrategyParams::new()
            .with_percent(self.percent)
            .with_sku(self.sku.clone())
            .with_threshold(self.threshold)
            .with_per_item_off(self.per_item_off)
    }

    fn percent_enabled(&self) -> bool {
        self.percent > Decimal::ZERO
    }

    fn bulk_enabled(&self) -> bool {
        !self.sku.is_empty() && self.threshold > 0 && self.per_item_off > Decimal::ZERO
    }

    /// Children of a composite, in `--chain` order.
    ///
    /// Percent joins when `--percent` > 0; bulk joins when `--sku`,
    /// `--threshold` and `--per-item-off` are all set. An empty result is
    /// left for the factory to reject.
    fn composite_children(&self) -> CliResult<Vec<Box<dyn PricingStrategy>>> {
        let mut children: Vec<Box<dyn PricingStrategy>> = Vec::new();

        for kind in &self.chain {
            match kind {
                StrategyKind::Percent if self.percent_enabled() => {
                    children.push(build_strategy(StrategyKind::Percent, self.params())?);
                }
                StrategyKind::Bulk if self.bulk_enabled() => {
                    children.push(build_strategy(StrategyKind::Bulk, self.params())?);
                }
                StrategyKind::Percent | StrategyKind::Bulk => {
                    debug!(%kind, "chain step skipped, parameters not set");
                }
                StrategyKind::None => children.push(Box::new(NoDiscount)),
                StrategyKind::Composite => return Err(CliError::InvalidChain(*kind)),
            }
        }

        Ok(children)
    }

    /// Builds the strategy selected by `kind` from the flags.
    pub fn strategy(&self, kind: StrategyKind) -> CliResult<Box<dyn PricingStrategy>> {
        let params = match kind {
            StrategyKind::Composite => StrategyParams::new().with_strategies(self.composite_children()?),
            _ => self.params(),
        };

        Ok(build_strategy(kind, params)?)
    }
}
