//! Point type and its stable identifier.
//!
//! Points are the vertices of the neural web. Each point has:
//! - A stable index in `0..N` assigned at sampling time
//! - A position (x, y, z) on the sampling sphere
//!
//! Points never move after construction; per-frame motion is an offset
//! computed by the animation driver.

use std::fmt;

/// Stable point identifier.
///
/// Wraps the point's index in the sampled sequence as a u32 for
/// WebAssembly interop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u32);

impl PointId {
    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Position of the point in the sampled sequence.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", self.0)
    }
}

/// A position in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance, evaluated in f64.
    ///
    /// The square of any pair of finite f32 coordinates fits in f64 without
    /// overflow or underflow to zero, so neighbour ranking stays exact for
    /// every sphere radius. The R-tree repeats this arithmetic.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        let dz = self.z as f64 - other.z as f64;
        dx * dx + dy * dy + dz * dz
    }

    /// Position widened to f64, as stored in the spatial index.
    #[inline]
    pub fn to_f64_array(self) -> [f64; 3] {
        [self.x as f64, self.y as f64, self.z as f64]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
