//! `geosplit` - CLI for flattening GeoJSON into CSV
//!
//! Conversion failures are reported on stdout and do not change the exit
//! status; only an unusable configuration aborts the process.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use geosplit::cli::Cli;
use geosplit::{init_logging, paths, Config, Converter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    let resolved = paths::resolve(cli.input, cli.output, &config.defaults);
    println!("Input file: {}", resolved.input.display());
    println!("Output file: {}", resolved.output.display());

    let converter = Converter::new(config.output);
    match converter.convert(&resolved.input, &resolved.output) {
        Ok(summary) => {
            println!(
                "Successfully converted {} features to CSV",
                summary.features
            );
            println!("Output file: {}", summary.output_path.display());
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "conversion failed");
            println!("Error: {err}");
        }
    }

    Ok(())
}
