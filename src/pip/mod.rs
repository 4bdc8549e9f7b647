//! Point-in-Polygon (PIP) boundary classification.
//!
//! Finds the named boundary containing a point, either by a linear scan
//! over a [`BoundaryCollection`](crate::models::BoundaryCollection) or
//! through an R-tree spatial index for repeated lookups.

mod classify;
mod index;
mod service;

pub use classify::{classify, first_match};
pub use index::BoundaryIndex;
pub use service::PipService;
