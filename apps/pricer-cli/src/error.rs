//! Error types for the pricer CLI.

use pricer_core::{StrategyKind, ValidationError};

/// Everything that can stop the CLI before a quote is printed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },

    #[error("Logging already initialized: {0}")]
    LoggingInit(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("'{0}' cannot be part of a composite chain")]
    InvalidChain(StrategyKind),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
