//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the quote. `RUST_LOG` wins over
//! the configured level; a `RUST_LOG` that does not parse is an error.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{CliError, CliResult};

fn parse(directives: &str) -> CliResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| CliError::LogFilter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}

fn filter(rust_log: Option<&str>, level: &str) -> CliResult<EnvFilter> {
    match rust_log {
        Some(directives) => parse(directives),
        None => parse(level),
    }
}

/// Installs the global subscriber.
pub fn init(level: &str) -> CliResult<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter(rust_log.as_deref(), level)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}
