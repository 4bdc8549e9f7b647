//! Error types for boundary loading and coordinate input.

use std::path::PathBuf;

/// Failure to read or interpret a boundary source.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("boundary source '{path}' does not exist")]
    NotFound { path: PathBuf },
    #[error("no .shp file found in directory '{path}'")]
    NoShapefile { path: PathBuf },
    #[error("unsupported boundary format for '{path}' (expected .shp, .json or .geojson)")]
    UnsupportedFormat { path: PathBuf },
    #[error("failure reading '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("name field '{field}' not found in '{path}'")]
    MissingField { field: String, path: PathBuf },
    #[error("name field '{field}' in '{path}' has unsupported type {kind}")]
    FieldType {
        field: String,
        path: PathBuf,
        kind: String,
    },
}

/// Failure to interpret textual coordinate input.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InputError {
    #[error("{axis} '{value}' is not a number")]
    NotANumber { axis: &'static str, value: String },
    #[error("{axis} '{value}' is not finite")]
    NotFinite { axis: &'static str, value: String },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<InputError>,
    },
    #[error("column '{column}' not found in input header")]
    MissingColumn { column: String },
}

/// Any failure of the path-based classification entry point.
#[derive(thiserror::Error, Debug)]
pub enum ClassifyError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Input(#[from] InputError),
}
