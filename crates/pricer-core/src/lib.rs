//! # pricer-core: Pure Pricing Logic for Pricer
//!
//! This crate computes the final price of an order from its line items by
//! applying a pluggable discount policy. Everything here is a pure function
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricer Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pricer-cli (`pricer`)                        │   │
//! │  │    --items JSON ──► LineItems     --strategy ──► StrategyParams │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │  money   │ │ strategy │ │ factory  │          │   │
//! │  │   │ LineItem │ │  Money   │ │ NoDisc.  │ │ choose_  │          │   │
//! │  │   │  Quote   │ │ (cents)  │ │ Percent  │ │ strategy │          │   │
//! │  │   │  Kind    │ │          │ │ Bulk     │ │          │          │   │
//! │  │   └──────────┘ └──────────┘ │ Composite│ └──────────┘          │   │
//! │  │                             └──────────┘                        │   │
//! │  │   pricing: compute_subtotal, price_order                        │   │
//! │  │   validation: shared preconditions                              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - LineItem, StrategyKind, Quote
//! - [`money`] - Money type with integer cents
//! - [`error`] - ValidationError
//! - [`validation`] - Precondition checks
//! - [`strategy`] - The `PricingStrategy` trait and its implementations
//! - [`factory`] - Build a strategy from a kind name and parameters
//! - [`pricing`] - Subtotal and order pricing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Round Once, At Production**: every amount a function returns is Money
//! 3. **Fail Fast**: invalid input is rejected before any discount math
//! 4. **Explicit Errors**: one typed error enum, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use pricer_core::factory::{choose_strategy, StrategyParams};
//! use pricer_core::pricing::price_order;
//! use pricer_core::{LineItem, Money};
//! use rust_decimal::Decimal;
//!
//! let items = vec![
//!     LineItem::new("A", 5, Decimal::TEN),
//!     LineItem::new("B", 10, Decimal::TEN),
//! ];
//!
//! let percent = choose_strategy("percent", StrategyParams::new().with_percent(Decimal::TEN)).unwrap();
//! let bulk = choose_strategy(
//!     "bulk",
//!     StrategyParams::new().with_sku("A").with_threshold(5).with_per_item_off(Decimal::ONE),
//! )
//! .unwrap();
//! let chain = choose_strategy("composite", StrategyParams::new().with_strategies(vec![percent, bulk])).unwrap();
//!
//! let quote = price_order(&items, chain.as_ref()).unwrap();
//! assert_eq!(quote.subtotal, Money::from_cents(15000));
//! assert_eq!(quote.total, Money::from_cents(13000)); // 150.00 → 135.00 → 130.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod factory;
pub mod money;
pub mod pricing;
pub mod strategy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use factory::{build_strategy, choose_strategy, StrategyParams};
pub use money::Money;
pub use pricing::{compute_subtotal, price_order};
pub use strategy::{
    BulkItemDiscount, CompositeStrategy, NoDiscount, PercentageDiscount, PricingStrategy,
};
pub use types::*;
