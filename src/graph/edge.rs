//! Edge type.
//!
//! An edge links a point to one of its nearest neighbours. Each edge has:
//! - Source and target point IDs (never equal)
//! - The Euclidean distance between them
//!
//! Edges are directed: if A picks B, B need not pick A.

use std::fmt;

use super::node::PointId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: PointId,
    pub target: PointId,
    pub distance: f32,
}

impl Edge {
    #[inline]
    pub fn new(source: PointId, target: PointId, distance: f32) -> Self {
        Self { source, target, distance }
    }

    /// Flat `[source, target]` pair for index buffers.
    #[inline]
    pub fn as_pair(self) -> [u32; 2] {
        [self.source.0, self.target.0]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.source.0, self.target.0)
    }
}
