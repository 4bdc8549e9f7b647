use geo::{Geometry, MultiPolygon};
use geojson::GeoJson;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

use super::clean_name;
use crate::error::LoadError;
use crate::models::BoundaryRecord;

pub(super) fn read_boundaries(
    path: &Path,
    name_field: &str,
) -> Result<Vec<BoundaryRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let geojson = GeoJson::from_reader(BufReader::new(file)).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(LoadError::Parse {
                path: path.to_path_buf(),
                message: "GeoJSON must be a FeatureCollection".to_string(),
            })
        }
    };

    let mut records = Vec::with_capacity(collection.features.len());

    for (i, feature) in collection.features.into_iter().enumerate() {
        let name = match feature.property(name_field) {
            Some(serde_json::Value::String(s)) => clean_name(s),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        let geometry = match feature.geometry {
            Some(geom) => {
                let converted: Geometry<f64> =
                    geom.value.try_into().map_err(|e| LoadError::Parse {
                        path: path.to_path_buf(),
                        message: format!("feature {i}: {e}"),
                    })?;

                match converted {
                    Geometry::MultiPolygon(mp) => mp,
                    Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
                    _ => {
                        warn!("Skipping non-polygon feature {} ({:?})", i, name);
                        continue;
                    }
                }
            }
            None => {
                debug!("Skipping feature {} without geometry", i);
                continue;
            }
        };

        records.push(BoundaryRecord { name, geometry });
    }

    Ok(records)
}
