//! Golden-angle spiral sampling of a sphere.
//!
//! Places N points with the vertical coordinate stepping evenly from -1 to 1
//! and the azimuth advancing by the golden angle, which spreads successive
//! points around the sphere without banding. The layout is a pure function
//! of (N, R): repeated builds produce bit-identical positions.

use crate::graph::Point;

/// π(3 − √5): the golden angle in radians.
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Sample `count` points on a sphere of `radius` centred at the origin.
///
/// - `count == 0` yields an empty sequence.
/// - `count == 1` yields the south pole `(0, -radius, 0)`.
///
/// Computation runs in f64 and is rounded once per coordinate.
pub fn sample_sphere(count: usize, radius: f32) -> Vec<Point> {
    let r = radius as f64;
    (0..count).map(|i| spiral_point(i, count, r)).collect()
}

fn spiral_point(i: usize, count: usize, radius: f64) -> Point {
    let y = if count > 1 {
        -1.0 + 2.0 * i as f64 / (count - 1) as f64
    } else {
        -1.0
    };
    // Rounding can push 1 - y² a hair below zero at the poles
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = i as f64 * GOLDEN_ANGLE;

    Point::new(
        (theta.cos() * ring * radius) as f32,
        (y * radius) as f32,
        (theta.sin() * ring * radius) as f32,
    )
}
