//! # Pricer CLI
//!
//! Prices an order given on the command line.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             pricer                                      │
//! │                                                                         │
//! │  --items ──► input ──► Vec<LineItem> ─┐                                 │
//! │                                       ├──► price_order ──► output       │
//! │  flags + config ──► cli ──► strategy ─┘     (pricer-core)   text/json  │
//! │                                                                         │
//! │  logging ──► stderr                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`]. Flags win over `PRICER_*` environment variables, which
//! win over `pricer.toml`.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

use pricer_core::{price_order, Quote};
use tracing::{debug, info};

use crate::cli::Args;
use crate::config::PricerConfig;
use crate::error::CliResult;

/// Decodes the order, builds the selected strategy and prices it.
pub fn run(args: &Args, config: &PricerConfig) -> CliResult<Quote> {
    let items = input::parse_items(&args.items)?;

    let kind = args.strategy.unwrap_or(config.default_strategy);
    let strategy = args.strategy(kind)?;
    debug!(?strategy, "strategy built");

    let quote = price_order(&items, strategy.as_ref())?;
    info!(
        items = items.len(),
        strategy = %quote.strategy,
        subtotal = %quote.subtotal,
        total = %quote.total,
        "order priced"
    );

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pricer_core::{Money, StrategyKind, ValidationError};

    use crate::error::CliError;

    const ORDER: &str = r#"[{"sku":"A","qty":5,"unit_price":10.0},{"sku":"B","qty":10,"unit_price":10.0}]"#;

    fn run_with(argv: &[&str]) -> CliResult<Quote> {
        let mut full = vec!["pricer", "--items", ORDER];
        full.extend_from_slice(argv);
        run(&Args::try_parse_from(full).unwrap(), &PricerConfig::default())
    }

    #[test]
    fn test_default_strategy_is_no_discount() {
        let quote = run_with(&[]).unwrap();
        assert_eq!(quote.strategy, StrategyKind::None);
        assert_eq!(quote.subtotal, Money::from_cents(15000));
        assert_eq!(quote.total, Money::from_cents(15000));
    }

    #[test]
    fn test_percent() {
        let quote = run_with(&["--strategy", "percent", "--percent", "10"]).unwrap();
        assert_eq!(quote.total, Money::from_cents(13500));
    }

    #[test]
    fn test_bulk() {
        let quote = run_with(&[
            "--strategy", "bulk", "--sku", "A", "--threshold", "5", "--per-item-off", "1",
        ])
        .unwrap();
        assert_eq!(quote.total, Money::from_cents(14500));
    }

    #[test]
    fn test_composite_default_chain() {
        let quote = run_with(&[
            "--strategy", "composite", "--percent", "10", "--sku", "A", "--threshold", "5",
            "--per-item-off", "1",
        ])
        .unwrap();
        assert_eq!(quote.strategy, StrategyKind::Composite);
        assert_eq!(quote.total, Money::from_cents(13000));
    }

    #[test]
    fn test_composite_reversed_chain() {
        let quote = run_with(&[
            "--strategy", "composite", "--percent", "10", "--sku", "A", "--threshold", "5",
            "--per-item-off", "1", "--chain", "bulk,percent",
        ])
        .unwrap();
        assert_eq!(quote.total, Money::from_cents(13050));
    }

    #[test]
    fn test_config_default_strategy_applies_without_flag() {
        let args = Args::try_parse_from(["pricer", "--items", ORDER, "--percent", "10"]).unwrap();
        let config = PricerConfig {
            default_strategy: StrategyKind::Percent,
            ..PricerConfig::default()
        };
        assert_eq!(run(&args, &config).unwrap().total, Money::from_cents(13500));
    }

    #[test]
    fn test_flag_beats_config_strategy() {
        let args = Args::try_parse_from(["pricer", "--items", ORDER, "--strategy", "none"]).unwrap();
        let config = PricerConfig {
            default_strategy: StrategyKind::Percent,
            ..PricerConfig::default()
        };
        assert_eq!(run(&args, &config).unwrap().strategy, StrategyKind::None);
    }

    #[test]
    fn test_bad_items_are_reported_before_strategy() {
        let args = Args::try_parse_from(["pricer", "--items", "not json", "--strategy", "bulk"]).unwrap();
        let err = run(&args, &PricerConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_percent_over_hundred_is_rejected() {
        let err = run_with(&["--strategy", "percent", "--percent", "150"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::PercentOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_order_prices_to_zero() {
        let args = Args::try_parse_from(["pricer", "--items", "[]", "--strategy", "percent", "--percent", "10"])
            .unwrap();
        let quote = run(&args, &PricerConfig::default()).unwrap();
        assert!(quote.total.is_zero());
    }
}
