//! R-tree based spatial index using the rstar crate.
//!
//! Provides O(log n) K-nearest queries over the sampled points, ranked with
//! the neighbour-graph tie-break. Positions are stored widened to f64 so
//! squared distances match the brute-force scan bit for bit.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::graph::neighbors::Candidate;
use crate::graph::{Point, rank_order};

/// A point in the spatial index with its index in the sampled sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    /// Index of the point in the sampled sequence.
    pub index: usize,
    /// Position as `[x, y, z]`.
    pub position: [f64; 3],
}

impl IndexedPoint {
    /// Create a new IndexedPoint.
    pub fn new(index: usize, point: Point) -> Self {
        Self {
            index,
            position: point.to_f64_array(),
        }
    }
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedPoint {
    // Same arithmetic as `Point::distance_squared` (query minus candidate)
    // so both search strategies rank on identical values.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = point[0] - self.position[0];
        let dy = point[1] - self.position[1];
        let dz = point[2] - self.position[2];
        dx * dx + dy * dy + dz * dz
    }

    fn contains_point(&self, point: &[f64; 3]) -> bool {
        self.position == *point
    }
}

/// Spatial index over the sampled points.
///
/// Uses an R*-tree, bulk loaded once per scene build.
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Bulk load an index over `points`, keyed by their position in the slice.
    pub fn from_points(points: &[Point]) -> Self {
        let indexed: Vec<_> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| IndexedPoint::new(i, p))
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// The `k` nearest other points to `points[index]`, closest first.
    ///
    /// The tree yields candidates in non-decreasing distance but in no
    /// particular order among equal distances, so candidates are pulled
    /// until the distance strictly exceeds the k-th one and the whole set is
    /// then ranked with the lower-index tie-break.
    pub fn k_nearest(&self, points: &[Point], index: usize, k: usize) -> Vec<Candidate> {
        if k == 0 || index >= points.len() {
            return Vec::new();
        }

        let query = points[index].to_f64_array();
        let mut picked: Vec<Candidate> = Vec::with_capacity(k.min(points.len()) + 2);

        for (candidate, distance_2) in self.tree.nearest_neighbor_iter_with_distance_2(&query) {
            if candidate.index == index {
                continue;
            }
            if picked.len() >= k && distance_2 > picked[k - 1].0 {
                break;
            }
            picked.push((distance_2, candidate.index));
        }

        picked.sort_unstable_by(rank_order);
        picked.truncate(k);
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(10.0, 10.0, 10.0),
            Point::new(5.0, 5.0, 5.0),
            Point::new(1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_k_nearest_skips_self() {
        let pts = points();
        let index = SpatialIndex::from_points(&pts);

        let near = index.k_nearest(&pts, 0, 2);
        assert_eq!(near.iter().map(|&(_, i)| i).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(near[0].0, 1.0);
    }

    #[test]
    fn test_k_nearest_breaks_ties_by_index() {
        // Four points at distance 1 from the origin, inserted out of order
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, -1.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        ];
        let index = SpatialIndex::from_points(&pts);

        let near = index.k_nearest(&pts, 0, 2);
        assert_eq!(near, vec![(1.0, 1), (1.0, 2)]);
    }

    #[test]
    fn test_k_nearest_saturates() {
        let pts = points();
        let index = SpatialIndex::from_points(&pts);
        assert_eq!(index.k_nearest(&pts, 1, 10).len(), 3);
        assert!(index.k_nearest(&pts, 1, 0).is_empty());
    }

    #[test]
    fn test_empty() {
        let index = SpatialIndex::from_points(&[]);
        assert!(index.k_nearest(&[], 0, 3).is_empty());
    }

    #[test]
    fn test_k_nearest_out_of_f32_square_range() {
        // Squared separations here overflow f32 but not f64
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(3e20, 0.0, 0.0),
            Point::new(1e20, 0.0, 0.0),
            Point::new(0.0, 2e20, 0.0),
        ];
        let index = SpatialIndex::from_points(&pts);
        let near: Vec<usize> = index.k_nearest(&pts, 0, 3).into_iter().map(|(_, i)| i).collect();
        assert_eq!(near, vec![2, 3, 1]);
    }
}
