//! NeuralWeb - the static point/edge structure of the hero scene.
//!
//! The NeuralWeb stores the nearest-neighbour edges in petgraph's
//! StableGraph and keeps flat buffers of point positions and line-segment
//! endpoints for direct upload to the host's vertex buffers. It is built
//! once per configuration and never mutated afterwards.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Directed;

use super::edge::Edge;
use super::neighbors::{self, NeighborSearch};
use super::node::{Point, PointId};

/// The sampled points and their nearest-neighbour graph.
///
/// This struct manages:
/// - Point positions in a flat `[x0, y0, z0, x1, ...]` buffer
/// - Edge topology via petgraph, weighted by distance
/// - The line-segment buffer, two endpoints per edge
pub struct NeuralWeb {
    /// Sampled points, index-addressable.
    points: Vec<Point>,

    /// Node weights are the stable PointId, edge weights the distance.
    /// Edges are inserted closest-first per source, so edge index order is
    /// the construction order.
    graph: StableGraph<PointId, f32, Directed>,

    /// Neighbours requested per point (K).
    neighbors_requested: usize,

    /// Strategy actually used for the search (`Auto` resolved).
    search: NeighborSearch,

    /// Point positions (interleaved xyz).
    positions: Vec<f32>,

    /// Line segment endpoints (interleaved xyz, two per edge).
    line_segments: Vec<f32>,
}

impl NeuralWeb {
    /// Build the neighbour graph over `points` with `k` neighbours per point.
    ///
    /// `search` must already be resolved; `Auto` falls back to brute force.
    /// When `k` exceeds the number of other points every point links to all
    /// the others.
    pub fn build(points: Vec<Point>, k: usize, search: NeighborSearch) -> Self {
        let n = points.len();
        let per_point = k.min(n.saturating_sub(1));
        let search = match search {
            NeighborSearch::Auto => NeighborSearch::BruteForce,
            concrete => concrete,
        };

        let mut graph: StableGraph<PointId, f32, Directed> =
            StableGraph::with_capacity(n, n * per_point);
        let nodes: Vec<NodeIndex> = (0..n)
            .map(|i| graph.add_node(PointId(i as u32)))
            .collect();

        for (i, ranked) in neighbors::nearest_all(&points, per_point, search)
            .into_iter()
            .enumerate()
        {
            for (distance_2, j) in ranked {
                graph.add_edge(nodes[i], nodes[j], distance_2.sqrt() as f32);
            }
        }

        let positions = points.iter().flat_map(|p| p.to_array()).collect();

        let mut web = Self {
            points,
            graph,
            neighbors_requested: k,
            search,
            positions,
            line_segments: Vec::new(),
        };
        web.line_segments = web.build_line_segments();
        web
    }

    fn build_line_segments(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.graph.edge_count() * 6);
        for edge in self.graph.edge_references() {
            let source = self.points[edge.source().index()];
            let target = self.points[edge.target().index()];
            buffer.extend_from_slice(&source.to_array());
            buffer.extend_from_slice(&target.to_array());
        }
        buffer
    }

    // =========================================================================
    // Points
    // =========================================================================

    /// Get the number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get a point's position.
    pub fn point(&self, id: PointId) -> Option<Point> {
        self.points.get(id.index()).copied()
    }

    /// All points in sampling order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Flat `[x0, y0, z0, x1, ...]` position buffer.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbours requested per point (K).
    pub fn neighbors_requested(&self) -> usize {
        self.neighbors_requested
    }

    /// Outgoing edges per point after saturation: `min(K, N - 1)`.
    pub fn neighbors_per_point(&self) -> usize {
        self.neighbors_requested
            .min(self.points.len().saturating_sub(1))
    }

    /// Search strategy used to build the graph.
    pub fn search(&self) -> NeighborSearch {
        self.search
    }

    /// All edges in construction order: by source, closest neighbour first.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|e| Edge::new(self.graph[e.source()], self.graph[e.target()], *e.weight()))
            .collect()
    }

    /// Neighbours of a point, closest first.
    pub fn neighbors(&self, id: PointId) -> Vec<PointId> {
        let index = NodeIndex::new(id.index());
        if !self.graph.contains_node(index) {
            return Vec::new();
        }

        let mut outgoing: Vec<(EdgeIndex, PointId)> = self
            .graph
            .edges(index)
            .map(|e| (e.id(), self.graph[e.target()]))
            .collect();
        // petgraph walks adjacency most-recent first; edge index is rank order
        outgoing.sort_unstable_by_key(|&(edge, _)| edge);
        outgoing.into_iter().map(|(_, id)| id).collect()
    }

    /// How many points picked each point as a neighbour.
    pub fn in_degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0u32; self.points.len()];
        for edge in self.graph.edge_references() {
            degrees[edge.target().index()] += 1;
        }
        degrees
    }

    /// Flat `[x, y, z]` line-segment buffer, two endpoints per edge.
    ///
    /// Length is `edge_count * 6`.
    pub fn line_segments(&self) -> &[f32] {
        &self.line_segments
    }
}
