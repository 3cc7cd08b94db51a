//! Configuration management for geosplit.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name used under the platform config directory.
const APP_DIR_NAME: &str = "geosplit";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "GEOSPLIT_";

/// Placeholder written for absent fields.
pub const DEFAULT_SENTINEL: &str = "N/A";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GEOSPLIT_`, sections split by `__`)
/// 2. TOML config file at `~/.config/geosplit/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV output configuration.
    pub output: OutputConfig,
    /// Default file names used when the command line leaves them out.
    pub defaults: DefaultsConfig,
}

/// How rows are rendered into CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Placeholder for absent identifiers, types and coordinates.
    pub sentinel: String,
    /// Field delimiter. Must be a single ASCII character.
    pub delimiter: char,
    /// Record terminator.
    pub line_ending: LineEnding,
    /// What to write for coordinates that are present but empty.
    pub empty_coordinates: EmptyCoordinates,
}

/// CSV record terminator. `\r\n` by default, as RFC 4180 writers emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    #[default]
    Crlf,
}

/// Treatment of a `coordinates` value that is present but empty (`[]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCoordinates {
    /// Write the sentinel, same as absent coordinates.
    #[default]
    Sentinel,
    /// Write the empty value as JSON (`[]`).
    Literal,
}

/// File names used when paths are not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Input file name, resolved beside the executable.
    pub input_file: String,
    /// Output file name, resolved beside the executable.
    pub output_file: String,
    /// Suffix appended to the input stem when deriving an output name.
    pub split_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            delimiter: ',',
            line_ending: LineEnding::default(),
            empty_coordinates: EmptyCoordinates::default(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_file: "Test.json".to_string(),
            output_file: "geojson_split.csv".to_string(),
            split_suffix: "_split".to_string(),
        }
    }
}

impl OutputConfig {
    /// The delimiter as the byte the CSV writer expects.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is not a single-byte character.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter).map_err(|_| {
            Error::config_validation(format!(
                "delimiter {:?} is not a single-byte character",
                self.delimiter
            ))
        })
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.output.sentinel.is_empty() {
            return Err(Error::config_validation("output.sentinel must not be empty"));
        }

        let delimiter = self.output.delimiter;
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\r' | '\n') {
            return Err(Error::config_validation(format!(
                "output.delimiter {delimiter:?} must be a single ASCII character other than a quote or line break"
            )));
        }

        for (name, value) in [
            ("defaults.input_file", &self.defaults.input_file),
            ("defaults.output_file", &self.defaults.output_file),
            ("defaults.split_suffix", &self.defaults.split_suffix),
        ] {
            if value.is_empty() {
                return Err(Error::config_validation(format!(
                    "{name} must not be empty"
                )));
            }
        }

        Ok(())
    }
}
