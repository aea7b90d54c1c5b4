//! # Domain Types
//!
//! Value types shared by the subtotal calculator, the strategies and callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  StrategyKind   │   │     Quote       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sku            │   │  none           │   │  subtotal       │       │
//! │  │  qty (i64)      │   │  percent        │   │  strategy       │       │
//! │  │  unit_price     │   │  bulk           │   │  total          │       │
//! │  │   (Decimal)     │   │  composite      │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One entry in an order.
///
/// Immutable value, compared by its fields. Construction does not validate;
/// [`crate::validation::validate_line_item`] does, and every strategy runs it
/// before any discount math.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct LineItem {
    /// Stock Keeping Unit.
    pub sku: String,

    /// Quantity ordered, must be >= 0.
    pub qty: i64,

    /// Exact unit price, must be >= 0.
    #[ts(as = "String")]
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates a line item without validating it.
    pub fn new(sku: impl Into<String>, qty: i64, unit_price: Decimal) -> Self {
        LineItem {
            sku: sku.into(),
            qty,
            unit_price,
        }
    }

    /// Unrounded `qty × unit_price`, `None` on overflow.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.qty))
    }
}

// =============================================================================
// Strategy Kind
// =============================================================================

/// The enumerated strategy identifiers accepted by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Subtotal passes through unchanged.
    #[default]
    None,
    /// Percentage off the subtotal.
    Percent,
    /// Per-unit reduction for one SKU above a quantity threshold.
    Bulk,
    /// Ordered chain of other strategies.
    Composite,
}

impl StrategyKind {
    /// Every kind, in declaration order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::None,
        StrategyKind::Percent,
        StrategyKind::Bulk,
        StrategyKind::Composite,
    ];

    /// The lowercase identifier used on the command line and in output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::None => "none",
            StrategyKind::Percent => "percent",
            StrategyKind::Bulk => "bulk",
            StrategyKind::Composite => "composite",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownStrategy {
                kind: s.to_string(),
            })
    }
}

// =============================================================================
// Quote
// =============================================================================

/// The result of pricing one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    /// Rounded, undiscounted subtotal.
    pub subtotal: Money,

    /// Kind of the strategy that produced `total`.
    pub strategy: StrategyKind,

    /// Rounded total after the strategy.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
