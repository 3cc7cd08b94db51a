//! Canonical JSON text for coordinate payloads.
//!
//! Coordinates are written as JSON with a space after every separator
//! (`[10.5, 20.1]`, `{"a": 1}`), which is the format downstream consumers of
//! the CSV already expect.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

use crate::config::EmptyCoordinates;
use crate::error::{Error, Result};

/// `serde_json` formatter that writes `, ` between elements and `: ` between
/// keys and values, on a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize a JSON value to its canonical text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_canonical_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::internal(format!("non UTF-8 JSON output: {e}")))
}

/// Whether a value counts as "has data".
///
/// `null`, `false`, zero, and empty strings, arrays and objects do not.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a `geometry.coordinates` value for the CSV.
///
/// Absent or falsy values become `sentinel`. With
/// [`EmptyCoordinates::Literal`] an empty array or object is written as JSON
/// instead.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn coordinates_text(
    coordinates: Option<&Value>,
    empty: EmptyCoordinates,
    sentinel: &str,
) -> Result<String> {
    match coordinates {
        Some(value) if is_truthy(value) => to_canonical_string(value),
        Some(value)
            if empty == EmptyCoordinates::Literal
                && matches!(value, Value::Array(_) | Value::Object(_)) =>
        {
            to_canonical_string(value)
        }
        _ => Ok(sentinel.to_string()),
    }
}
