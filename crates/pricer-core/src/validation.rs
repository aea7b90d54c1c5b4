//! # Validation Module
//!
//! Precondition checks shared by the subtotal calculator, the strategy
//! constructors and every `apply`.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decoding (pricer-cli)                                        │
//! │  ├── Type validation (serde)                                           │
//! │  └── validate_sku on every decoded record                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (strategy constructors, factory)                │
//! │  ├── validate_percent                                                  │
//! │  └── validate_per_item_off, validate_rule_sku                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Application (every PricingStrategy::apply)                   │
//! │  ├── validate_subtotal                                                 │
//! │  └── validate_line_items                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use pricer_core::validation::validate_sku;
///
/// assert!(validate_sku("COKE-330").is_ok());
/// assert!(validate_sku("A".repeat(100).as_str()).is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.trim().is_empty() {
        return Err(ValidationError::required("sku"));
    }

    Ok(())
}

/// Validates the SKU a discount rule matches line items against.
///
/// ## Rules
/// - Everything [`validate_sku`] checks
/// - No leading or trailing whitespace, since matching is exact
pub fn validate_rule_sku(sku: &str) -> ValidationResult<()> {
    validate_sku(sku)?;

    if sku.trim() != sku {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "leading or trailing whitespace".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a subtotal handed to a strategy.
///
/// ## Rules
/// - Must be non-negative (zero allowed)
pub fn validate_subtotal(subtotal: Money) -> ValidationResult<()> {
    if subtotal.is_negative() {
        return Err(ValidationError::must_be_non_negative("subtotal"));
    }

    Ok(())
}

/// Validates a percentage.
///
/// ## Rules
/// - Inclusive range 0..=100, fractional values allowed
///
/// ## Example
/// ```rust
/// use pricer_core::validation::validate_percent;
/// use rust_decimal::Decimal;
///
/// assert!(validate_percent(Decimal::new(125, 1)).is_ok()); // 12.5
/// assert!(validate_percent(Decimal::new(101, 0)).is_err());
/// ```
pub fn validate_percent(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::PercentOutOfRange { value: percent });
    }

    Ok(())
}

/// Validates a bulk per-unit reduction.
///
/// ## Rules
/// - Must be non-negative (zero is a no-op reduction)
pub fn validate_per_item_off(per_item_off: Decimal) -> ValidationResult<()> {
    if per_item_off < Decimal::ZERO {
        return Err(ValidationError::must_be_non_negative("per_item_off"));
    }

    Ok(())
}

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates the numeric fields of one line item.
///
/// ## Rules
/// - `qty` >= 0
/// - `unit_price` >= 0
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.qty < 0 {
        return Err(ValidationError::must_be_non_negative("qty"));
    }

    if item.unit_price < Decimal::ZERO {
        return Err(ValidationError::must_be_non_negative("unit_price"));
    }

    Ok(())
}

/// Validates every item, stopping at the first failure.
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    items.iter().try_for_each(validate_line_item)
}

/// The shared precondition of every `PricingStrategy::apply`.
pub fn validate_apply_inputs(subtotal: Money, items: &[LineItem]) -> ValidationResult<()> {
    validate_subtotal(subtotal)?;
    validate_line_items(items)
}

// =============================================================================
// Unit Tests
// =============================================================================
