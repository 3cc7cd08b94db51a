//! GeoJSON to CSV conversion.
//!
//! The whole input document is read and flattened into rows before the output
//! file is touched, so a missing, unparsable or structurally broken input
//! never creates or truncates the output. I/O failures while writing can
//! still leave a partial file behind.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{LineEnding, OutputConfig};
use crate::error::{Error, Result};
use crate::feature::{self, Row, HEADER};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of feature rows written (excluding the header).
    pub features: usize,
    /// Where the CSV was written.
    pub output_path: PathBuf,
}

/// Converts GeoJSON documents into flattened CSV files.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: OutputConfig,
}

impl Converter {
    /// Create a converter with the given output options.
    #[must_use]
    pub fn new(options: OutputConfig) -> Self {
        Self { options }
    }

    /// Convert the GeoJSON document at `input` into a CSV at `output`.
    ///
    /// The output file is created or overwritten.
    ///
    /// # Errors
    ///
    /// See [`Error::kind`]: a missing input is `NotFound`, unparsable input
    /// is `Parse`, read/write failures are `Io`, and a document whose
    /// structure cannot be flattened is `Other`.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary> {
        debug!(input = %input.display(), output = %output.display(), "starting conversion");

        let document = load_document(input)?;
        let rows = self.extract_rows(&document)?;

        let file = File::create(output).map_err(|source| Error::OutputCreate {
            path: output.to_path_buf(),
            source,
        })?;
        self.write_rows(file, &rows)?;

        info!(features = rows.len(), output = %output.display(), "conversion finished");
        Ok(ConversionSummary {
            features: rows.len(),
            output_path: output.to_path_buf(),
        })
    }

    /// Flatten every feature of a parsed document, in input order.
    ///
    /// A document without a `features` key (or with `"features": null`) has
    /// zero features.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`] if the document is not an object,
    /// `features` is not an array, or a feature cannot be flattened.
    pub fn extract_rows(&self, document: &Value) -> Result<Vec<Row>> {
        let Value::Object(root) = document else {
            return Err(Error::malformed(format!(
                "top-level value has JSON type {}, expected object",
                feature::type_name(document)
            )));
        };

        let features = match root.get("features") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(features)) => features,
            Some(other) => {
                return Err(Error::malformed(format!(
                    "'features' has JSON type {}, expected array",
                    feature::type_name(other)
                )))
            }
        };
        debug!(count = features.len(), "found features");

        features
            .iter()
            .enumerate()
            .map(|(index, feature)| Row::from_feature(index, feature, &self.options))
            .collect()
    }

    /// Write the header and `rows` as CSV to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is unusable or writing fails.
    pub fn write_rows<W: Write>(&self, writer: W, rows: &[Row]) -> Result<()> {
        let terminator = match self.options.line_ending {
            LineEnding::Lf => Terminator::Any(b'\n'),
            LineEnding::Crlf => Terminator::CRLF,
        };
        let mut wtr = WriterBuilder::new()
            .delimiter(self.options.delimiter_byte()?)
            .terminator(terminator)
            .quote_style(QuoteStyle::Necessary)
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for row in rows {
            wtr.write_record(row.fields())?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Read and parse the JSON document at `path`.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if the file does not exist,
/// [`Error::InputRead`] if it cannot be read as UTF-8 text, and
/// [`Error::InvalidJson`] if it does not parse.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(Error::InputRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text).map_err(|source| Error::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert `input` to `output` with default options.
///
/// # Errors
///
/// See [`Converter::convert`].
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    Converter::default().convert(input, output)
}
