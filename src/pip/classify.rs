//! Linear intersects join of one point against a boundary collection.

use geo::{Intersects, Point};
use tracing::debug;

use crate::models::{BoundaryCollection, BoundaryRecord, ClassificationResult, GeoPoint};

/// First record, in collection order, whose geometry intersects `point`.
/// Touching an edge or vertex counts as a match.
pub fn first_match<'a>(
    point: &Point<f64>,
    boundaries: &'a BoundaryCollection,
) -> Option<&'a BoundaryRecord> {
    if !(point.x().is_finite() && point.y().is_finite()) {
        return None;
    }
    boundaries.iter().find(|b| b.geometry.intersects(point))
}

/// Classify a point against a boundary collection.
///
/// Returns [`ClassificationResult::Outside`] when nothing matches or when the
/// first matching record has no name.
pub fn classify(point: GeoPoint, boundaries: &BoundaryCollection) -> ClassificationResult {
    let geometry = point.to_geometry();
    let result = resolve(first_match(&geometry, boundaries));

    debug!(
        "Classified ({}, {}) against {} boundaries: {:?}",
        point.lat,
        point.lon,
        boundaries.len(),
        result
    );

    result
}

pub(crate) fn resolve(matched: Option<&BoundaryRecord>) -> ClassificationResult {
    match matched.and_then(|b| b.name.as_deref()) {
        Some(name) => ClassificationResult::Boundary(name.to_string()),
        None => ClassificationResult::Outside,
    }
}
