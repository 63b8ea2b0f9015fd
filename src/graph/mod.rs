//! Neural web data structures.
//!
//! This module provides the point and edge types and the NeuralWeb, which
//! holds the nearest-neighbour graph in petgraph's StableGraph alongside
//! flat position and line-segment buffers for GPU upload.

mod edge;
pub mod neighbors;
mod node;
mod web;

pub use edge::Edge;
pub use neighbors::{NeighborSearch, nearest_brute_force};
pub(crate) use neighbors::rank_order;
pub use node::{Point, PointId};
pub use web::NeuralWeb;
