//! # pricer
//!
//! ```text
//! pricer --items '[{"sku":"A","qty":5,"unit_price":10.0}]' --strategy percent --percent 10
//! ```

use clap::Parser;
use pricer_cli::cli::Args;
use pricer_cli::config::PricerConfig;
use pricer_cli::{logging, output, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = PricerConfig::load(args.config.as_deref())?;
    logging::init(args.log_level.as_deref().unwrap_or(&config.log_level))?;

    let quote = run(&args, &config)?;
    println!("{}", output::render(&quote, args.output.unwrap_or(config.output))?);

    Ok(())
}
