//! Quote rendering.

use pricer_core::Quote;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Renders `quote` for stdout.
///
/// Text:
/// ```text
/// Subtotal: 150.00
/// Strategy: composite
/// Total: 130.00
/// ```
pub fn render(quote: &Quote, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Subtotal: {}\nStrategy: {}\nTotal: {}",
            quote.subtotal, quote.strategy, quote.total
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
    }
}
