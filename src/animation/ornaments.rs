//! The hero's secondary animated elements.
//!
//! Around the neural web sit a slowly turning circuit ring, a carousel of
//! glass tiles, a bobbing wireframe trophy and three glowing ribbons. Like
//! the driver, each is a pure function of elapsed time.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::layout::RIBBON_COUNT;

/// Tiles in the floating carousel.
pub const TILE_COUNT: usize = 8;

/// Carousel radius.
pub const TILE_ORBIT_RADIUS: f32 = 3.5;

/// Circuit ring turns per second.
const RING_TURNS_PER_SECOND: f64 = 0.03;

/// Carousel angular speed, radians per second.
const TILE_ORBIT_SPEED: f64 = 0.1;

const TILE_BOB_FREQ: f64 = 0.8;
const TILE_BOB: f64 = 0.2;
const TILE_SWAY: f64 = 0.2;

const TROPHY_REST: f64 = -0.3;
const TROPHY_BOB_FREQ: f64 = 0.8;
const TROPHY_BOB: f64 = 0.15;

const GLOW_REST: f64 = 0.9;
const GLOW_SWING: f64 = 0.25;
const GLOW_FREQ: f64 = 2.0;

/// Placement of one carousel tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileTransform {
    pub position: [f32; 3],
    /// Rotation about the Y axis.
    pub yaw: f32,
}

/// Ornament state for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrnamentFrame {
    pub ring_angle: f32,
    pub tiles: [TileTransform; TILE_COUNT],
    pub trophy_height: f32,
    pub ribbon_glow: [f32; RIBBON_COUNT],
}

impl OrnamentFrame {
    pub fn at(t: f32) -> Self {
        Self {
            ring_angle: ring_angle(t),
            tiles: std::array::from_fn(|i| tile_transform(i, t)),
            trophy_height: trophy_height(t),
            ribbon_glow: std::array::from_fn(|i| ribbon_glow(i, t)),
        }
    }

    /// Write the tiles as `[x, y, z, yaw]` per tile into `buffer`.
    ///
    /// Stops at whichever of `buffer` and the tile list runs out first.
    pub fn write_tiles(&self, buffer: &mut [f32]) {
        for (slot, tile) in buffer.chunks_exact_mut(4).zip(&self.tiles) {
            let [x, y, z] = tile.position;
            slot.copy_from_slice(&[x, y, z, tile.yaw]);
        }
    }
}

/// Circuit ring rotation about its axis, wrapped to `[0, 2π)`.
pub fn ring_angle(t: f32) -> f32 {
    (t as f64 * RING_TURNS_PER_SECOND * TAU).rem_euclid(TAU) as f32
}

/// Carousel tile `index` at time `t`. Indices wrap modulo [`TILE_COUNT`].
pub fn tile_transform(index: usize, t: f32) -> TileTransform {
    let i = (index % TILE_COUNT) as f64;
    let t = t as f64;

    let base_angle = i / TILE_COUNT as f64 * TAU;
    let height = (index % 4) as f64 * 0.6 - 1.2;
    let angle = (base_angle + t * TILE_ORBIT_SPEED).rem_euclid(TAU);
    let radius = TILE_ORBIT_RADIUS as f64;

    TileTransform {
        position: [
            (angle.cos() * radius) as f32,
            (height + (t * TILE_BOB_FREQ + i).sin() * TILE_BOB) as f32,
            (angle.sin() * radius) as f32,
        ],
        yaw: (angle + (t + i).sin() * TILE_SWAY) as f32,
    }
}

/// Height of the holo trophy.
pub fn trophy_height(t: f32) -> f32 {
    (TROPHY_REST + (t as f64 * TROPHY_BOB_FREQ).sin() * TROPHY_BOB) as f32
}

/// Emissive intensity of ribbon `index`.
pub fn ribbon_glow(index: usize, t: f32) -> f32 {
    (GLOW_REST + (t as f64 * GLOW_FREQ + index as f64).sin() * GLOW_SWING) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline() {
        let frame = OrnamentFrame::at(0.0);
        assert_eq!(frame.ring_angle, 0.0);
        assert!((frame.trophy_height + 0.3).abs() < 1e-6);
        assert!((frame.ribbon_glow[0] - 0.9).abs() < 1e-6);
        let [x, y, z] = frame.tiles[0].position;
        assert_eq!((x, z), (3.5, 0.0));
        assert!((y + 1.2).abs() < 1e-6);
        assert_eq!(frame.tiles[0].yaw, 0.0);
    }

    #[test]
    fn test_ring_full_turn() {
        // 0.03 turns per second: one turn every 33⅓ s
        assert!(ring_angle(100.0 / 3.0) < 1e-4 || ring_angle(100.0 / 3.0) > 6.2831);
        assert!((ring_angle(100.0 / 6.0) - std::f32::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn test_tiles_stay_on_orbit() {
        for t in [0.0_f32, 1.0, 17.5, 1234.0] {
            for tile in OrnamentFrame::at(t).tiles {
                let [x, _, z] = tile.position;
                assert!(((x * x + z * z).sqrt() - TILE_ORBIT_RADIUS).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_tile_heights() {
        let heights: Vec<f32> = (0..TILE_COUNT)
            .map(|i| ((i % 4) as f32) * 0.6 - 1.2)
            .collect();
        for (i, tile) in OrnamentFrame::at(0.0).tiles.iter().enumerate() {
            let bob = (tile.position[1] - heights[i]).abs();
            assert!(bob <= 0.2 + 1e-5, "tile {i} bobbed {bob}");
        }
    }

    #[test]
    fn test_trophy_and_glow_ranges() {
        for i in 0..200 {
            let t = i as f32 * 0.1;
            let h = trophy_height(t);
            assert!((-0.45 - 1e-6..=-0.15 + 1e-6).contains(&h));
            for r in 0..RIBBON_COUNT {
                let g = ribbon_glow(r, t);
                assert!((0.65 - 1e-6..=1.15 + 1e-6).contains(&g));
            }
        }
    }

    #[test]
    fn test_tile_buffer_layout() {
        let frame = OrnamentFrame::at(2.0);
        let mut buffer = vec![0.0; TILE_COUNT * 4];
        frame.write_tiles(&mut buffer);
        assert_eq!(buffer[4..8], [
            frame.tiles[1].position[0],
            frame.tiles[1].position[1],
            frame.tiles[1].position[2],
            frame.tiles[1].yaw,
        ]);
    }
}
