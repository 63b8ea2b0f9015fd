//! Neural ribbon curves.
//!
//! Three glowing tubes sweep through the hero behind the neural web. Each is
//! a Catmull-Rom spline through eight control points laid out by a phase
//! seed; the host extrudes the sampled polyline into a tube.

use crate::graph::Point;

/// Phase seeds of the ribbons, in draw order.
pub const RIBBON_SEEDS: [f32; 3] = [0.1, 0.7, 1.3];

/// Number of ribbons.
pub const RIBBON_COUNT: usize = RIBBON_SEEDS.len();

/// Control points per ribbon.
pub const CONTROL_POINTS: usize = 8;

/// Uniform scale the host applies to the ribbon group.
pub const RIBBON_SCALE: f32 = 4.6;

/// Control points of the ribbon with phase `seed`.
pub fn control_points(seed: f32) -> Vec<Point> {
    let seed = seed as f64;
    (0..CONTROL_POINTS)
        .map(|k| {
            let k = k as f64;
            Point::new(
                ((k * 0.6 + seed).sin() * 1.5) as f32,
                ((k * 0.5 + seed).cos() * 0.6) as f32,
                ((k - 4.0) * 0.4) as f32,
            )
        })
        .collect()
}

/// Sample `segments + 1` points along an open uniform Catmull-Rom spline.
///
/// The curve passes through every control point; the missing neighbours at
/// the two ends are reflected through the end points. Fewer than two control
/// points are returned unchanged.
pub fn catmull_rom(points: &[Point], segments: usize) -> Vec<Point> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }
    if segments == 0 {
        return vec![points[0]];
    }

    (0..=segments)
        .map(|s| {
            // Integer numerator keeps knots exact when segments divides evenly
            let p = (s * (n - 1)) as f64 / segments as f64;
            let span = (p.floor() as usize).min(n - 2);
            let weight = p - span as f64;

            let p1 = points[span];
            let p2 = points[span + 1];
            let p0 = if span == 0 { reflect(p1, p2) } else { points[span - 1] };
            let p3 = if span + 2 < n { points[span + 2] } else { reflect(p2, p1) };

            interpolate(p0, p1, p2, p3, weight)
        })
        .collect()
}

/// Sampled polyline of ribbon `index`, or `None` past the last ribbon.
pub fn ribbon_polyline(index: usize, segments: usize) -> Option<Vec<Point>> {
    RIBBON_SEEDS
        .get(index)
        .map(|&seed| catmull_rom(&control_points(seed), segments))
}

#[inline]
fn reflect(anchor: Point, other: Point) -> Point {
    Point::new(
        2.0 * anchor.x - other.x,
        2.0 * anchor.y - other.y,
        2.0 * anchor.z - other.z,
    )
}

fn interpolate(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let axis = |a: f32, b: f32, c: f32, d: f32| -> f32 {
        let (a, b, c, d) = (a as f64, b as f64, c as f64, d as f64);
        let t2 = t * t;
        let t3 = t2 * t;
        (0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)) as f32
    };
    Point::new(
        axis(p0.x, p1.x, p2.x, p3.x),
        axis(p0.y, p1.y, p2.y, p3.y),
        axis(p0.z, p1.z, p2.z, p3.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_points() {
        let pts = control_points(0.0);
        assert_eq!(pts.len(), CONTROL_POINTS);
        assert!(pts[0].distance_squared(Point::new(0.0, 0.6, -1.6)) < 1e-12);
        assert!((pts[7].z - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_spline_passes_through_knots() {
        let pts = control_points(RIBBON_SEEDS[1]);
        // 7 spans, 4 samples per span: every 4th sample is a knot
        let curve = catmull_rom(&pts, 28);
        assert_eq!(curve.len(), 29);
        for (k, &knot) in pts.iter().enumerate() {
            let sample = curve[k * 4];
            assert!(sample.distance_squared(knot) < 1e-10, "knot {k}: {sample:?} vs {knot:?}");
        }
    }

    #[test]
    fn test_straight_line_stays_straight() {
        let pts: Vec<Point> = (0..4).map(|i| Point::new(i as f32, 0.0, 0.0)).collect();
        let curve = catmull_rom(&pts, 6);
        for (s, p) in curve.iter().enumerate() {
            assert!((p.x - s as f32 * 0.5).abs() < 1e-6);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(catmull_rom(&[], 10).is_empty());
        let one = [Point::new(1.0, 2.0, 3.0)];
        assert_eq!(catmull_rom(&one, 10), one.to_vec());
        let two = [Point::default(), Point::new(1.0, 0.0, 0.0)];
        assert_eq!(catmull_rom(&two, 0), vec![Point::default()]);
    }

    #[test]
    fn test_ribbon_polyline() {
        assert_eq!(ribbon_polyline(0, 200).map(|p| p.len()), Some(201));
        assert!(ribbon_polyline(RIBBON_COUNT, 10).is_none());
    }
}
