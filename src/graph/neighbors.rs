//! K-nearest-neighbour selection.
//!
//! Neighbours are ranked by squared Euclidean distance, ties broken by the
//! lower point index. Both search strategies produce the same ranking; the
//! brute-force scan is quadratic and the spatial index is used for larger
//! point counts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::node::Point;
use crate::spatial::SpatialIndex;

/// A ranked neighbour candidate: `(squared distance, point index)`.
///
/// Squared distances are f64 so they neither overflow nor flush to zero for
/// any f32 sphere radius.
pub type Candidate = (f64, usize);

/// How the neighbour graph is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NeighborSearch {
    /// Brute force below the spatial index threshold, R-tree above it.
    #[default]
    Auto,
    /// Full pairwise distance scan.
    BruteForce,
    /// R-tree nearest-neighbour iteration.
    SpatialIndex,
}

impl NeighborSearch {
    /// Resolve `Auto` to a concrete strategy for `point_count` points.
    pub fn resolve(self, point_count: usize, threshold: usize) -> NeighborSearch {
        match self {
            NeighborSearch::Auto if point_count > threshold => NeighborSearch::SpatialIndex,
            NeighborSearch::Auto => NeighborSearch::BruteForce,
            concrete => concrete,
        }
    }
}

/// Rank order: closer first, then lower index.
#[inline]
pub(crate) fn rank_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// The `k` nearest other points to `points[index]`, closest first.
///
/// Returns fewer than `k` candidates when there are not enough other points.
pub fn nearest_brute_force(points: &[Point], index: usize, k: usize) -> Vec<Candidate> {
    if k == 0 || index >= points.len() {
        return Vec::new();
    }

    let origin = points[index];
    let mut candidates: Vec<Candidate> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(j, &p)| (origin.distance_squared(p), j))
        .collect();

    if candidates.len() > k {
        candidates.select_nth_unstable_by(k - 1, rank_order);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(rank_order);
    candidates
}

/// Neighbour lists for every point, using the given concrete strategy.
///
/// `Auto` is treated as brute force; callers resolve it first.
pub fn nearest_all(points: &[Point], k: usize, search: NeighborSearch) -> Vec<Vec<Candidate>> {
    match search {
        NeighborSearch::SpatialIndex => {
            let index = SpatialIndex::from_points(points);
            (0..points.len())
                .map(|i| index.k_nearest(points, i, k))
                .collect()
        }
        NeighborSearch::BruteForce | NeighborSearch::Auto => (0..points.len())
            .map(|i| nearest_brute_force(points, i, k))
            .collect(),
    }
}
