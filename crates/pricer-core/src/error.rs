//! # Error Types
//!
//! Domain-specific error types for pricer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricer-core errors (this file)                                        │
//! │  └── ValidationError  - Every precondition failure in the core         │
//! │                                                                         │
//! │  pricer-cli errors (app crate)                                         │
//! │  └── CliError         - Config / input / validation, shown to the user │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → anyhow → stderr + exit code 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, kind, value)
//! 3. Errors are enum variants, never String, so callers can branch on them
//! 4. Raised where detected, never caught or retried inside the core

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Precondition violations raised by the pricing core.
///
/// Every variant is a reason code: bad item data, bad strategy parameters,
/// an unknown strategy kind or a malformed composite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field or parameter is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A quantity, price, subtotal or reduction is below zero.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Percentage outside the inclusive 0..=100 range.
    #[error("percent must be between 0 and 100 (got {value})")]
    PercentOutOfRange { value: Decimal },

    /// Strategy kind is not one of the recognized names.
    #[error("unknown strategy kind: {kind}")]
    UnknownStrategy { kind: String },

    /// A composite was requested with no child strategies.
    #[error("composite strategy needs at least one child strategy")]
    EmptyComposite,

    /// Malformed input (e.g. an order record with a missing field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Decimal or cent arithmetic left the representable range.
    #[error("{field} is too large to represent")]
    Overflow { field: String },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn must_be_non_negative(field: &str) -> Self {
        ValidationError::MustBeNonNegative {
            field: field.to_string(),
        }
    }

    pub(crate) fn overflow(field: &str) -> Self {
        ValidationError::Overflow {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
