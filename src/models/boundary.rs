//! Named boundary polygons.

use geo::{BoundingRect, MultiPolygon};

/// A single boundary polygon with its identifying name
#[derive(Debug, Clone)]
pub struct BoundaryRecord {
    /// Value of the name attribute. `None` when the source row is null or blank.
    pub name: Option<String>,
    pub geometry: MultiPolygon<f64>,
}

impl BoundaryRecord {
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self {
            name: Some(name.into()),
            geometry,
        }
    }

    /// A record whose name attribute was missing in the source
    pub fn unnamed(geometry: MultiPolygon<f64>) -> Self {
        Self {
            name: None,
            geometry,
        }
    }

    /// Get the bounding box of this boundary
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.geometry
            .bounding_rect()
            .map(|rect| (rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }
}

/// Boundaries in source order. Order decides which record wins when
/// several intersect the same point.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCollection {
    records: Vec<BoundaryRecord>,
}

impl BoundaryCollection {
    pub fn new(records: Vec<BoundaryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, ordinal: usize) -> Option<&BoundaryRecord> {
        self.records.get(ordinal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoundaryRecord> {
        self.records.iter()
    }

    /// Names of all named records, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(|r| r.name.as_deref())
    }
}

impl From<Vec<BoundaryRecord>> for BoundaryCollection {
    fn from(records: Vec<BoundaryRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a BoundaryCollection {
    type Item = &'a BoundaryRecord;
    type IntoIter = std::slice::Iter<'a, BoundaryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
