//! Command-line interface for geosplit.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// geosplit - Flatten a GeoJSON FeatureCollection into CSV
///
/// Writes one row per feature with its ID, geometry type and raw coordinates.
#[derive(Debug, Parser)]
#[command(name = "geosplit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GeoJSON file to read [default: Test.json beside the executable]
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// CSV file to write [default: <INPUT_FILE stem>_split.csv next to the input]
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
