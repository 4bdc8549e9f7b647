use geo::MultiPolygon;
use shapefile::dbase::FieldValue;
use shapefile::{Reader, Shape};
use std::path::Path;
use tracing::{debug, warn};

use super::clean_name;
use crate::error::LoadError;
use crate::models::BoundaryRecord;

/// Read polygon shapes and their name attribute from a `.shp`/`.dbf` pair
pub(super) fn read_boundaries(
    path: &Path,
    name_field: &str,
) -> Result<Vec<BoundaryRecord>, LoadError> {
    let parse_error = |message: String| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = Reader::from_path(path).map_err(|e| parse_error(e.to_string()))?;

    let mut records = Vec::new();

    for (i, result) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = result.map_err(|e| parse_error(format!("record {i}: {e}")))?;

        let value = record
            .get(name_field)
            .ok_or_else(|| LoadError::MissingField {
                field: name_field.to_string(),
                path: path.to_path_buf(),
            })?;
        let name = name_from_field(value).map_err(|kind| LoadError::FieldType {
            field: name_field.to_string(),
            path: path.to_path_buf(),
            kind,
        })?;

        let geometry: MultiPolygon<f64> = match shape {
            Shape::Polygon(polygon) => polygon
                .try_into()
                .map_err(|e| parse_error(format!("record {i}: bad polygon: {:?}", e)))?,
            Shape::PolygonM(polygon) => polygon
                .try_into()
                .map_err(|e| parse_error(format!("record {i}: bad polygonM: {:?}", e)))?,
            Shape::PolygonZ(polygon) => polygon
                .try_into()
                .map_err(|e| parse_error(format!("record {i}: bad polygonZ: {:?}", e)))?,
            Shape::NullShape => {
                debug!("Skipping null shape at record {} ({:?})", i, name);
                continue;
            }
            other => {
                warn!(
                    "Skipping non-polygon shape {:?} at record {} ({:?})",
                    other.shapetype(),
                    i,
                    name
                );
                continue;
            }
        };

        records.push(BoundaryRecord { name, geometry });
    }

    Ok(records)
}

/// Text of a dBASE value, `Ok(None)` for null. Unsupported types yield their debug form.
fn name_from_field(value: &FieldValue) -> Result<Option<String>, String> {
    match value {
        FieldValue::Character(Some(s)) => Ok(clean_name(s)),
        FieldValue::Character(None) => Ok(None),
        FieldValue::Memo(s) => Ok(clean_name(s)),
        FieldValue::Numeric(Some(n)) => Ok(Some(n.to_string())),
        FieldValue::Numeric(None) => Ok(None),
        other => Err(format!("{:?}", other)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use shapefile::dbase::{self, FieldName, FieldValue, TableWriterBuilder};
    use shapefile::{Point, Polygon, PolygonRing, Writer};
    use std::path::{Path, PathBuf};

    /// Longitudes of the side-by-side council strips, west to east
    const STRIP_EDGES: [f64; 5] = [-118.3, -118.2, -118.1, -118.0, -117.9];

    fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon {
        // Shapefile outer rings run clockwise
        Polygon::new(PolygonRing::Outer(vec![
            Point::new(min_x, min_y),
            Point::new(min_x, max_y),
            Point::new(max_x, max_y),
            Point::new(max_x, min_y),
            Point::new(min_x, min_y),
        ]))
    }

    /// Write `councils.shp`/`.dbf` into `dir`: one strip per name spanning
    /// latitude [34.0, 34.1], neighbours sharing an edge
    pub fn write_councils(dir: &Path, names: &[Option<&str>]) -> PathBuf {
        assert!(names.len() < STRIP_EDGES.len());

        let path = dir.join("councils.shp");
        let table = TableWriterBuilder::new()
            .add_character_field(FieldName::try_from("Name").unwrap(), 50);
        let mut writer = Writer::from_path(&path, table).unwrap();

        for (i, name) in names.iter().enumerate() {
            let polygon = square(STRIP_EDGES[i], 34.0, STRIP_EDGES[i + 1], 34.1);
            let mut record = dbase::Record::default();
            record.insert(
                "Name".to_string(),
                FieldValue::Character(name.map(|n| n.to_string())),
            );
            writer.write_shape_and_record(&polygon, &record).unwrap();
        }
        drop(writer);

        path
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::write_councils;
    use super::*;

    #[test]
    fn test_reads_names_and_polygons() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_councils(dir.path(), &[Some("Central"), Some("Boyle Heights")]);

        let records = read_boundaries(&path, "Name").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Central"));
        assert_eq!(records[1].name.as_deref(), Some("Boyle Heights"));

        let (min_x, min_y, max_x, max_y) = records[0].bbox().unwrap();
        assert!((min_x - -118.3).abs() < 1e-9);
        assert!((min_y - 34.0).abs() < 1e-9);
        assert!((max_x - -118.2).abs() < 1e-9);
        assert!((max_y - 34.1).abs() < 1e-9);
    }

    #[test]
    fn test_null_name_kept_as_unnamed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_councils(dir.path(), &[None, Some("East")]);

        let records = read_boundaries(&path, "Name").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, None);
        assert_eq!(records[1].name.as_deref(), Some("East"));
    }

    #[test]
    fn test_missing_name_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_councils(dir.path(), &[Some("Central")]);

        let err = read_boundaries(&path, "NC_NAME").unwrap_err();
        assert!(matches!(err, LoadError::MissingField { ref field, .. } if field == "NC_NAME"));
    }

    #[test]
    fn test_missing_dbf_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_councils(dir.path(), &[Some("Central")]);
        std::fs::remove_file(path.with_extension("dbf")).unwrap();

        let err = read_boundaries(&path, "Name").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_name_from_field() {
        assert_eq!(
            name_from_field(&FieldValue::Numeric(Some(42.0))),
            Ok(Some("42".to_string()))
        );
        assert_eq!(name_from_field(&FieldValue::Character(None)), Ok(None));
        assert!(name_from_field(&FieldValue::Logical(Some(true))).is_err());
    }
}
