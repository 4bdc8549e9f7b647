//! PIP service for classifying many points against one loaded boundary set.

use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

use super::classify::resolve;
use super::BoundaryIndex;
use crate::error::LoadError;
use crate::loader::{load_boundaries, LoaderOptions};
use crate::models::{BoundaryCollection, ClassificationResult, GeoPoint, DEFAULT_SENTINEL};

/// Point-in-Polygon lookup service.
///
/// Holds an immutable index, so one instance can be shared across threads.
pub struct PipService {
    index: BoundaryIndex,
    sentinel: String,
}

impl PipService {
    /// Create a new PIP service over an already loaded collection
    pub fn new(boundaries: BoundaryCollection) -> Self {
        Self {
            index: BoundaryIndex::build(boundaries),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }

    /// Load boundaries from `path` and index them
    pub fn open(path: &Path, options: &LoaderOptions) -> Result<Self, LoadError> {
        Ok(Self::new(load_boundaries(path, options)?))
    }

    /// Replace the text reported for points outside every boundary
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn classify(&self, point: GeoPoint) -> ClassificationResult {
        let result = resolve(self.index.lookup(point.lon, point.lat));
        debug!("PIP lookup at ({}, {}): {:?}", point.lat, point.lon, result);
        result
    }

    /// Boundary name or the sentinel, as printed by the CLI
    pub fn label(&self, point: GeoPoint) -> String {
        self.classify(point).label(&self.sentinel).to_string()
    }

    /// Classify in parallel, keeping input order
    pub fn classify_many(&self, points: &[GeoPoint]) -> Vec<ClassificationResult> {
        self.classify_many_with(points, || {})
    }

    /// [`PipService::classify_many`], calling `on_each` after every point
    pub fn classify_many_with<F>(&self, points: &[GeoPoint], on_each: F) -> Vec<ClassificationResult>
    where
        F: Fn() + Sync,
    {
        points
            .par_iter()
            .map(|p| {
                let result = self.classify(*p);
                on_each();
                result
            })
            .collect()
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn boundaries(&self) -> &BoundaryCollection {
        self.index.boundaries()
    }

    /// Get the spatial index (for stats/debugging)
    pub fn index(&self) -> &BoundaryIndex {
        &self.index
    }
}
