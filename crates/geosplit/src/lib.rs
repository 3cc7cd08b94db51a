//! `geosplit` - Flatten GeoJSON feature collections into CSV
//!
//! Each feature of a collection becomes one CSV row holding its `id`, its
//! geometry type, and its coordinates as JSON text.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod coords;
pub mod error;
pub mod feature;
pub mod logging;
pub mod paths;

pub use config::Config;
pub use convert::{convert, ConversionSummary, Converter};
pub use error::{Error, ErrorKind, Result};
pub use feature::Row;
pub use logging::init_logging;
pub use paths::ResolvedPaths;
