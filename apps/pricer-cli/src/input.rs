//! Order decoding.
//!
//! Turns the `--items` JSON array into validated [`LineItem`]s. Every
//! malformed record becomes a [`ValidationError`] here, before any strategy
//! sees the order.

use pricer_core::validation::{validate_line_item, validate_sku};
use pricer_core::{LineItem, ValidationError, ValidationResult};
use tracing::debug;

/// Decodes `[{"sku": "A", "qty": 2, "unit_price": 10.0}, ...]`.
pub fn parse_items(items_json: &str) -> ValidationResult<Vec<LineItem>> {
    let items: Vec<LineItem> =
        serde_json::from_str(items_json).map_err(|e| ValidationError::InvalidFormat {
            field: "items".to_string(),
            reason: e.to_string(),
        })?;

    for item in &items {
        validate_sku(&item.sku)?;
        validate_line_item(item)?;
    }

    debug!(count = items.len(), "line items decoded");
    Ok(items)
}
