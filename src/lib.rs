//! Coord Binning - assign coordinates to Los Angeles neighborhood councils
//!
//! Classifies a latitude/longitude point into the named boundary polygon
//! that contains it, loaded from a shapefile or GeoJSON file. Points
//! outside every boundary get a fixed sentinel label.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pip;

use std::path::Path;

pub use error::{ClassifyError, InputError, LoadError};
pub use loader::{load_boundaries, LoaderOptions};
pub use models::{BoundaryCollection, BoundaryRecord, ClassificationResult, GeoPoint};
pub use pip::{classify, PipService};

/// Classify one point against the boundaries at `boundary_path`.
///
/// Latitude comes first here, while the geometry is built as
/// (longitude, latitude). Boundaries are read fresh on every call; use
/// [`PipService`] to load once and classify many points.
pub fn classify_point(
    latitude: f64,
    longitude: f64,
    boundary_path: &Path,
) -> Result<String, ClassifyError> {
    let boundaries = load_boundaries(boundary_path, &LoaderOptions::default())?;
    let result = classify(GeoPoint::new(latitude, longitude), &boundaries);
    Ok(result.to_string())
}

/// [`classify_point`] for textual coordinates
pub fn classify_point_str(
    latitude: &str,
    longitude: &str,
    boundary_path: &Path,
) -> Result<String, ClassifyError> {
    let point = GeoPoint::parse(latitude, longitude)?;
    classify_point(point.lat, point.lon, boundary_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CENTRAL: &str = r#"{
      "type": "FeatureCollection",
      "features": [{
        "type": "Feature",
        "properties": { "Name": "Central" },
        "geometry": {
          "type": "Polygon",
          "coordinates": [[[-118.3, 34.0], [-118.2, 34.0], [-118.2, 34.1], [-118.3, 34.1], [-118.3, 34.0]]]
        }
      }]
    }"#;

    fn central_file() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nc.geojson");
        fs::write(&path, CENTRAL).unwrap();
        (dir, path)
    }

    #[test]
    fn test_classify_point() {
        let (_dir, path) = central_file();
        assert_eq!(classify_point(34.05, -118.25, &path).unwrap(), "Central");
        assert_eq!(
            classify_point(35.0, -119.0, &path).unwrap(),
            "Point outside Los Angeles County"
        );
    }

    const STRIPS: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "properties": { "Name": "West" },
          "geometry": {
            "type": "Polygon",
            "coordinates": [[[-118.3, 34.0], [-118.2, 34.0], [-118.2, 34.1], [-118.3, 34.1], [-118.3, 34.0]]]
          }
        },
        {
          "type": "Feature",
          "properties": { "Name": "East" },
          "geometry": {
            "type": "Polygon",
            "coordinates": [[[-118.2, 34.0], [-118.1, 34.0], [-118.1, 34.1], [-118.2, 34.1], [-118.2, 34.0]]]
          }
        }
      ]
    }"#;

    #[test]
    fn test_shapefile_dir_and_geojson_agree() {
        let shp_dir = tempfile::tempdir().unwrap();
        loader::write_councils(shp_dir.path(), &[Some("West"), Some("East")]);

        let json_dir = tempfile::tempdir().unwrap();
        let json_path = json_dir.path().join("nc.geojson");
        fs::write(&json_path, STRIPS).unwrap();

        let cases = [
            (34.05, -118.25, "West"),
            (34.05, -118.2, "West"),
            (34.05, -118.15, "East"),
            (35.0, -119.0, "Point outside Los Angeles County"),
        ];

        for (lat, lon, expected) in cases {
            let from_shp = classify_point(lat, lon, shp_dir.path()).unwrap();
            let from_json = classify_point(lat, lon, &json_path).unwrap();
            assert_eq!(from_shp, expected, "shapefile at ({lat}, {lon})");
            assert_eq!(from_json, expected, "geojson at ({lat}, {lon})");
        }
    }

    #[test]
    fn test_service_opens_shapefile_dir() {
        let dir = tempfile::tempdir().unwrap();
        loader::write_councils(dir.path(), &[Some("West"), Some("East")]);

        let service = PipService::open(dir.path(), &LoaderOptions::default()).unwrap();
        assert_eq!(service.index().len(), 2);
        assert_eq!(service.label(GeoPoint::new(34.05, -118.15)), "East");
        assert_eq!(
            service.label(GeoPoint::new(35.0, -119.0)),
            "Point outside Los Angeles County"
        );
    }

    #[test]
    fn test_classify_point_str_bad_input() {
        let (_dir, path) = central_file();
        let err = classify_point_str("north", "-118.25", &path).unwrap_err();
        assert!(matches!(err, ClassifyError::Input(_)));
    }

    #[test]
    fn test_classify_point_missing_source() {
        let err = classify_point(34.05, -118.25, Path::new("/no/such/shp")).unwrap_err();
        assert!(matches!(err, ClassifyError::Load(LoadError::NotFound { .. })));
    }
}
