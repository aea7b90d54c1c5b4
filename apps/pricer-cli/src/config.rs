//! CLI configuration module.
//!
//! Configuration is loaded from an optional TOML file, overlaid by environment
//! variables, with fallback to defaults. Command-line flags win over both.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`PRICER_LOG_LEVEL`, `PRICER_DEFAULT_STRATEGY`,
//!    `PRICER_OUTPUT`)
//! 3. Configuration file (default `pricer.toml`, may be absent)
//! 4. Default values

use std::path::Path;

use clap::ValueEnum;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use pricer_core::StrategyKind;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

/// Prefix of the environment variables that override the file.
pub const ENV_PREFIX: &str = "PRICER";

/// How the quote is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Subtotal:` / `Strategy:` / `Total:` lines.
    #[default]
    Text,
    /// The serialized quote.
    Json,
}

/// Pricer CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricerConfig {
    /// Log filter used when `RUST_LOG` is not set (e.g. `warn`, `pricer_core=debug`).
    pub log_level: String,

    /// Strategy used when `--strategy` is not given.
    pub default_strategy: StrategyKind,

    /// Output format used when `--output` is not given.
    pub output: OutputFormat,
}

impl Default for PricerConfig {
    fn default() -> Self {
        PricerConfig {
            log_level: "warn".to_string(),
            default_strategy: StrategyKind::None,
            output: OutputFormat::Text,
        }
    }
}

impl PricerConfig {
    /// Load configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) and the environment.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let builder = Config::builder().add_source(File::from(path).required(false));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> CliResult<Self> {
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
