//! Boundary loading from shapefiles and GeoJSON.
//!
//! Both sources are assumed to be in geographic coordinates (EPSG:4326),
//! the same reference system as the points being classified. No
//! reprojection is performed.

mod geojson_file;
mod shp;

#[cfg(test)]
pub(crate) use shp::fixtures::write_councils;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::LoadError;
use crate::models::BoundaryCollection;

/// Attribute holding the neighborhood council name in the LA City shapefile
pub const DEFAULT_NAME_FIELD: &str = "Name";

#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Attribute (dBASE field or GeoJSON property) read as the boundary name
    pub name_field: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            name_field: DEFAULT_NAME_FIELD.to_string(),
        }
    }
}

/// A concrete file to read boundaries from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundarySource {
    Shapefile(PathBuf),
    GeoJson(PathBuf),
}

impl BoundarySource {
    /// Resolve a user-supplied path. A directory selects the first `.shp`
    /// inside it by file name.
    pub fn resolve(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        if path.is_dir() {
            return find_shapefile(path).map(BoundarySource::Shapefile);
        }

        match extension_of(path).as_deref() {
            Some("shp") => Ok(BoundarySource::Shapefile(path.to_path_buf())),
            Some("json") | Some("geojson") => Ok(BoundarySource::GeoJson(path.to_path_buf())),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            BoundarySource::Shapefile(p) | BoundarySource::GeoJson(p) => p,
        }
    }
}

/// Load every named polygon from `path`, in file order
pub fn load_boundaries(
    path: &Path,
    options: &LoaderOptions,
) -> Result<BoundaryCollection, LoadError> {
    let source = BoundarySource::resolve(path)?;
    info!("Loading boundaries from {}", source.path().display());

    let records = match &source {
        BoundarySource::Shapefile(p) => shp::read_boundaries(p, &options.name_field)?,
        BoundarySource::GeoJson(p) => geojson_file::read_boundaries(p, &options.name_field)?,
    };

    let collection = BoundaryCollection::new(records);
    info!(
        "Loaded {} boundaries ({} named)",
        collection.len(),
        collection.names().count()
    );

    Ok(collection)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}

fn find_shapefile(dir: &Path) -> Result<PathBuf, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && extension_of(&path).as_deref() == Some("shp") {
            candidates.push(path);
        }
    }

    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| LoadError::NoShapefile {
            path: dir.to_path_buf(),
        })
}

/// Normalize a raw attribute value; blank counts as missing
fn clean_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
