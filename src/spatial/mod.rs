//! Spatial indexing for neighbour search on large point sets.
//!
//! This module provides an R-tree based spatial index used by the neighbour
//! graph builder when the point count makes a quadratic scan too slow.

mod rtree;

pub use rtree::{IndexedPoint, SpatialIndex};
