//! Core data models for point classification.

pub mod boundary;
pub mod classification;
pub mod point;

pub use boundary::{BoundaryCollection, BoundaryRecord};
pub use classification::{ClassificationResult, DEFAULT_SENTINEL};
pub use point::{parse_coordinate, GeoPoint};
