//! Flattening of GeoJSON features into CSV rows.

use serde_json::{Map, Value};
use tracing::trace;

use crate::config::OutputConfig;
use crate::coords;
use crate::error::{Error, Result};

/// CSV header, in column order.
pub const HEADER: [&str; 3] = ["ID", "Geometry_Type", "Coordinates"];

/// One flattened feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Text form of the feature's `id`.
    pub id: String,
    /// Text form of `geometry.type`.
    pub geometry_type: String,
    /// Canonical JSON of `geometry.coordinates`, or the sentinel.
    pub coordinates: String,
}

impl Row {
    /// Flatten a single feature.
    ///
    /// `index` is the feature's position in the `features` array and is only
    /// used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`] if the feature is not an object or
    /// its geometry is neither an object nor `null`.
    pub fn from_feature(index: usize, feature: &Value, options: &OutputConfig) -> Result<Self> {
        let Value::Object(feature) = feature else {
            return Err(Error::malformed(format!(
                "feature {index} has JSON type {}, expected object",
                type_name(feature)
            )));
        };

        let geometry = geometry_of(index, feature)?;
        let sentinel = options.sentinel.as_str();

        let row = Self {
            id: field_text(feature.get("id"), sentinel)?,
            geometry_type: field_text(geometry.and_then(|g| g.get("type")), sentinel)?,
            coordinates: coords::coordinates_text(
                geometry.and_then(|g| g.get("coordinates")),
                options.empty_coordinates,
                sentinel,
            )?,
        };
        trace!(index, id = %row.id, geometry_type = %row.geometry_type, "flattened feature");
        Ok(row)
    }

    /// The row's fields in header order.
    #[must_use]
    pub fn fields(&self) -> [&str; 3] {
        [&self.id, &self.geometry_type, &self.coordinates]
    }
}

/// `null` geometry is legal GeoJSON for an unlocated feature.
fn geometry_of(index: usize, feature: &Map<String, Value>) -> Result<Option<&Map<String, Value>>> {
    match feature.get("geometry") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(geometry)) => Ok(Some(geometry)),
        Some(other) => Err(Error::malformed(format!(
            "feature {index} geometry has JSON type {}, expected object",
            type_name(other)
        ))),
    }
}

/// Text form of a scalar field. Absent keys give `sentinel`, `null` gives an
/// empty field, booleans are `True`/`False` (what existing consumers of the
/// CSV see), and compound values are written as canonical JSON.
fn field_text(value: Option<&Value>, sentinel: &str) -> Result<String> {
    match value {
        None => Ok(sentinel.to_string()),
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Bool(b)) => Ok(if *b { "True" } else { "False" }.to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(compound) => coords::to_canonical_string(compound),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyCoordinates;
    use serde_json::json;

    fn row(feature: &Value) -> Row {
        Row::from_feature(0, feature, &OutputConfig::default()).unwrap()
    }

    #[test]
    fn test_point_feature() {
        let r = row(&json!({
            "id": 1,
            "geometry": {"type": "Point", "coordinates": [10.5, 20.1]}
        }));
        assert_eq!(r.fields(), ["1", "Point", "[10.5, 20.1]"]);
    }

    #[test]
    fn test_string_id_written_verbatim() {
        let r = row(&json!({
            "id": "way/123",
            "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
        }));
        assert_eq!(r.id, "way/123");
        assert_eq!(r.coordinates, "[[0, 0], [1, 1]]");
    }

    #[test]
    fn test_missing_id_uses_sentinel() {
        let r = row(&json!({"geometry": {"type": "Point", "coordinates": [1, 2]}}));
        assert_eq!(r.id, "N/A");
    }

    #[test]
    fn test_null_id_is_empty() {
        let r = row(&json!({"id": null, "geometry": {"type": "Point", "coordinates": [1, 2]}}));
        assert_eq!(r.id, "");
    }

    #[test]
    fn test_float_and_bool_ids() {
        assert_eq!(row(&json!({"id": 2.5})).id, "2.5");
        assert_eq!(row(&json!({"id": true})).id, "True");
        assert_eq!(row(&json!({"id": false})).id, "False");
    }

    #[test]
    fn test_boolean_geometry_type() {
        let r = row(&json!({"id": 1, "geometry": {"type": false}}));
        assert_eq!(r.geometry_type, "False");
    }

    #[test]
    fn test_missing_geometry() {
        let r = row(&json!({"id": 7, "properties": {"name": "x"}}));
        assert_eq!(r.fields(), ["7", "N/A", "N/A"]);
    }

    #[test]
    fn test_null_geometry_treated_as_missing() {
        let r = row(&json!({"id": 7, "geometry": null}));
        assert_eq!(r.fields(), ["7", "N/A", "N/A"]);
    }

    #[test]
    fn test_missing_type_and_coordinates() {
        let r = row(&json!({"id": 3, "geometry": {}}));
        assert_eq!(r.geometry_type, "N/A");
        assert_eq!(r.coordinates, "N/A");
    }

    #[test]
    fn test_geometry_collection_has_no_coordinates() {
        let r = row(&json!({
            "id": 4,
            "geometry": {"type": "GeometryCollection", "geometries": []}
        }));
        assert_eq!(r.fields(), ["4", "GeometryCollection", "N/A"]);
    }

    #[test]
    fn test_empty_coordinates_policy() {
        let feature = json!({"id": 5, "geometry": {"type": "MultiPoint", "coordinates": []}});
        assert_eq!(row(&feature).coordinates, "N/A");

        let literal = OutputConfig {
            empty_coordinates: EmptyCoordinates::Literal,
            ..OutputConfig::default()
        };
        let r = Row::from_feature(0, &feature, &literal).unwrap();
        assert_eq!(r.coordinates, "[]");
    }

    #[test]
    fn test_custom_sentinel() {
        let options = OutputConfig {
            sentinel: "missing".to_string(),
            ..OutputConfig::default()
        };
        let r = Row::from_feature(0, &json!({}), &options).unwrap();
        assert_eq!(r.fields(), ["missing", "missing", "missing"]);
    }

    #[test]
    fn test_non_object_feature_is_malformed() {
        let err = Row::from_feature(3, &json!("Feature"), &OutputConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
        assert!(err.to_string().contains("feature 3 has JSON type string"));
    }

    #[test]
    fn test_non_object_geometry_is_malformed() {
        let err = Row::from_feature(1, &json!({"geometry": [1, 2]}), &OutputConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("feature 1 geometry has JSON type array"));
    }

    #[test]
    fn test_header_order() {
        assert_eq!(HEADER, ["ID", "Geometry_Type", "Coordinates"]);
    }
}
