//! Spatial index for fast boundary lookups.

use geo::{Intersects, Point};
use rstar::{RTree, RTreeObject, AABB};
use tracing::info;

use crate::models::{BoundaryCollection, BoundaryRecord};

/// Position of a boundary in its collection, wrapped for R-tree indexing
#[derive(Clone)]
struct IndexedBoundary {
    ordinal: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedBoundary {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedBoundary {
    fn new(ordinal: usize, boundary: &BoundaryRecord) -> Option<Self> {
        let (min_x, min_y, max_x, max_y) = boundary.bbox()?;
        Some(Self {
            ordinal,
            envelope: AABB::from_corners([min_x, min_y], [max_x, max_y]),
        })
    }
}

/// R-tree over boundary envelopes.
///
/// Lookups return the same record a linear scan would: among all
/// intersecting boundaries, the one earliest in the collection.
pub struct BoundaryIndex {
    tree: RTree<IndexedBoundary>,
    boundaries: BoundaryCollection,
}

impl BoundaryIndex {
    /// Build spatial index from a boundary collection
    pub fn build(boundaries: BoundaryCollection) -> Self {
        info!(
            "Building spatial index for {} boundaries...",
            boundaries.len()
        );

        let indexed: Vec<IndexedBoundary> = boundaries
            .iter()
            .enumerate()
            .filter_map(|(ordinal, b)| IndexedBoundary::new(ordinal, b))
            .collect();

        let tree = RTree::bulk_load(indexed);

        info!("Spatial index built with {} entries", tree.size());

        Self { tree, boundaries }
    }

    /// Find the first boundary intersecting a point
    pub fn lookup(&self, lon: f64, lat: f64) -> Option<&BoundaryRecord> {
        if !(lon.is_finite() && lat.is_finite()) {
            return None;
        }

        let point = Point::new(lon, lat);
        let query_envelope = AABB::from_point([lon, lat]);

        // Envelope candidates come back in tree order, so pick the lowest ordinal explicitly
        self.tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|ib| {
                self.boundaries
                    .get(ib.ordinal)
                    .is_some_and(|b| b.geometry.intersects(&point))
            })
            .map(|ib| ib.ordinal)
            .min()
            .and_then(|ordinal| self.boundaries.get(ordinal))
    }

    /// Get total number of indexed boundaries
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The indexed collection, in source order
    pub fn boundaries(&self) -> &BoundaryCollection {
        &self.boundaries
    }
}
