//! Scene - static geometry plus reusable per-frame buffers.
//!
//! A Scene is built from a validated [`SceneConfig`]: the sphere is sampled,
//! the neighbour graph built and the ribbon polylines sampled once. Each call
//! to [`Scene::frame`] runs the animation driver for every point and writes
//! the results into buffers that are allocated at build time and reused for
//! the lifetime of the scene.

use crate::animation::{
    AnimationDriver, FrameState, OrnamentFrame, Parallax, Pointer, Rotation, TILE_COUNT,
};
use crate::config::SceneConfig;
use crate::console::{console_log, console_warn};
use crate::error::SceneError;
use crate::graph::{NeuralWeb, Point, PointId};
use crate::layout::{RIBBON_COUNT, ribbon_polyline, sample_sphere};

/// Line segments per sampled ribbon.
pub const RIBBON_SEGMENTS: usize = 200;

/// The hero scene: neural web, ornaments and frame buffers.
pub struct Scene {
    config: SceneConfig,
    web: NeuralWeb,
    driver: AnimationDriver,
    parallax: Parallax,

    /// Ribbon polylines (interleaved xyz), one buffer per ribbon.
    ribbons: Vec<Vec<f32>>,

    // =========================================================================
    // Frame buffers
    // =========================================================================
    /// Static position plus the frame's offset (interleaved xyz).
    animated_positions: Vec<f32>,
    /// Point colours (interleaved rgb).
    colors: Vec<f32>,
    scales: Vec<f32>,
    opacities: Vec<f32>,
    /// Tile transforms, `[x, y, z, yaw]` per tile.
    tiles: Vec<f32>,
    rotation: Rotation,
    edge_opacity: f32,
    ornaments: OrnamentFrame,
    /// Time of the last computed frame.
    time: f32,
}

impl Scene {
    /// Validate `config` and build the scene. The first frame is computed at
    /// `t = 0` with the pointer centred.
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let settings = config.resolve()?;

        let points = sample_sphere(settings.point_count, settings.radius);
        let web = NeuralWeb::build(points, settings.neighbors, settings.search);
        let n = web.point_count();

        console_log!(
            "built neural web: {} points, {} edges ({:?})",
            n,
            web.edge_count(),
            web.search()
        );

        let ribbons = (0..RIBBON_COUNT)
            .filter_map(|i| ribbon_polyline(i, RIBBON_SEGMENTS))
            .map(|polyline| polyline.iter().flat_map(|p| p.to_array()).collect())
            .collect();

        let mut scene = Self {
            config,
            web,
            driver: AnimationDriver::new(settings.motion, settings.palette),
            parallax: Parallax::new(),
            ribbons,
            animated_positions: vec![0.0; n * 3],
            colors: vec![0.0; n * 3],
            scales: vec![0.0; n],
            opacities: vec![0.0; n],
            tiles: vec![0.0; TILE_COUNT * 4],
            rotation: Rotation::default(),
            edge_opacity: 0.0,
            ornaments: OrnamentFrame::at(0.0),
            time: 0.0,
        };
        scene.frame(0.0, Pointer::CENTER);
        Ok(scene)
    }

    /// Replace the scene with one built from `config`.
    ///
    /// The new scene is built completely before anything is swapped, so a
    /// rejected configuration leaves the current scene untouched. Parallax
    /// easing starts over from rest.
    pub fn rebuild(&mut self, config: SceneConfig) -> Result<(), SceneError> {
        match Scene::new(config) {
            Ok(scene) => {
                *self = scene;
                Ok(())
            }
            Err(err) => {
                console_warn!("rebuild rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Compute the frame at time `t` (seconds) with the pointer at
    /// `pointer` (normalized to `[-1, 1]`).
    ///
    /// A non-finite `t` leaves the previous frame in place. A non-finite
    /// pointer is treated as centred. Under reduced motion the parallax
    /// easing stays at rest.
    pub fn frame(&mut self, t: f32, pointer: Pointer) {
        if !t.is_finite() {
            console_warn!("ignoring frame with non-finite time {}", t);
            return;
        }
        if !self.config.reduced_motion {
            self.parallax.update(pointer);
        }
        let pointer = if pointer.is_finite() { pointer } else { Pointer::CENTER };

        let n = self.web.point_count();
        for (i, base) in self.web.points().iter().enumerate() {
            let state = self.driver.point_frame(i, n, t, pointer);
            let [r, g, b] = state.color.to_array();
            let [dx, dy, dz] = state.offset;

            self.animated_positions[i * 3..i * 3 + 3]
                .copy_from_slice(&[base.x + dx, base.y + dy, base.z + dz]);
            self.colors[i * 3..i * 3 + 3].copy_from_slice(&[r, g, b]);
            self.scales[i] = state.scale;
            self.opacities[i] = state.opacity;
        }

        self.rotation = self.driver.rotation(t, pointer);
        self.edge_opacity = self.driver.edge_opacity(t);

        let ornament_time = if self.config.reduced_motion { 0.0 } else { t };
        self.ornaments = OrnamentFrame::at(ornament_time);
        self.ornaments.write_tiles(&mut self.tiles);

        self.time = t;
    }

    /// Frame state at `t` as a standalone value, for inspection and export.
    pub fn frame_state(&self, t: f32, pointer: Pointer) -> FrameState {
        self.driver.frame(self.web.point_count(), t, pointer)
    }

    // =========================================================================
    // Static data
    // =========================================================================

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn web(&self) -> &NeuralWeb {
        &self.web
    }

    pub fn point_count(&self) -> usize {
        self.web.point_count()
    }

    pub fn edge_count(&self) -> usize {
        self.web.edge_count()
    }

    /// Static point positions (interleaved xyz).
    pub fn base_positions(&self) -> &[f32] {
        self.web.positions()
    }

    /// Edge endpoints (interleaved xyz, two per edge).
    pub fn line_segments(&self) -> &[f32] {
        self.web.line_segments()
    }

    /// Neighbours of point `index` in rank order. Empty for unknown points.
    pub fn neighbors(&self, index: u32) -> Vec<u32> {
        self.web
            .neighbors(PointId(index))
            .into_iter()
            .map(PointId::raw)
            .collect()
    }

    pub fn point(&self, index: u32) -> Option<Point> {
        self.web.point(PointId(index))
    }

    /// Sampled polyline of ribbon `index` (interleaved xyz).
    pub fn ribbon(&self, index: usize) -> Option<&[f32]> {
        self.ribbons.get(index).map(Vec::as_slice)
    }

    // =========================================================================
    // Frame data
    // =========================================================================

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn animated_positions(&self) -> &[f32] {
        &self.animated_positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    pub fn opacities(&self) -> &[f32] {
        &self.opacities
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn edge_opacity(&self) -> f32 {
        self.edge_opacity
    }

    pub fn ornaments(&self) -> &OrnamentFrame {
        &self.ornaments
    }

    /// Tile transforms, `[x, y, z, yaw]` per tile.
    pub fn tiles(&self) -> &[f32] {
        &self.tiles
    }

    pub fn parallax(&self) -> &Parallax {
        &self.parallax
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Palette;

    fn scene(n: i64, k: i64) -> Scene {
        Scene::new(SceneConfig::with_counts(n, k, 2.0)).unwrap()
    }

    #[test]
    fn test_buffer_sizes() {
        let scene = scene(50, 3);
        assert_eq!(scene.point_count(), 50);
        assert_eq!(scene.edge_count(), 150);
        assert_eq!(scene.base_positions().len(), 150);
        assert_eq!(scene.animated_positions().len(), 150);
        assert_eq!(scene.colors().len(), 150);
        assert_eq!(scene.scales().len(), 50);
        assert_eq!(scene.opacities().len(), 50);
        assert_eq!(scene.line_segments().len(), 150 * 6);
        assert_eq!(scene.tiles().len(), TILE_COUNT * 4);
    }

    #[test]
    fn test_first_point_at_rest_initially() {
        let scene = scene(20, 3);
        // Point 0 has zero phase, so its offset vanishes at t = 0
        assert_eq!(scene.animated_positions()[..3], scene.base_positions()[..3]);
        assert_eq!(scene.rotation(), Rotation { pitch: 0.0, yaw: 0.0 });
    }

    #[test]
    fn test_frame_moves_points() {
        let mut scene = scene(20, 3);
        let before = scene.animated_positions().to_vec();
        scene.frame(1.5, Pointer::new(0.3, -0.2));
        assert_ne!(scene.animated_positions(), &before[..]);
        assert_eq!(scene.time(), 1.5);
        assert!(scene.rotation().yaw != 0.0);
    }

    #[test]
    fn test_frame_matches_driver() {
        let mut scene = scene(12, 2);
        let pointer = Pointer::new(-0.4, 0.9);
        scene.frame(3.25, pointer);
        let state = scene.frame_state(3.25, pointer);

        assert_eq!(state.rotation, scene.rotation());
        assert_eq!(state.edge_opacity, scene.edge_opacity());
        for (i, point) in state.points.iter().enumerate() {
            assert_eq!(scene.scales()[i], point.scale);
            assert_eq!(scene.opacities()[i], point.opacity);
            assert_eq!(scene.colors()[i * 3..i * 3 + 3], point.color.to_array());
            let base = scene.base_positions()[i * 3];
            assert_eq!(scene.animated_positions()[i * 3], base + point.offset[0]);
        }
    }

    #[test]
    fn test_frames_are_repeatable() {
        let mut a = scene(30, 4);
        let mut b = scene(30, 4);
        a.frame(9.0, Pointer::new(0.5, 0.5));
        a.frame(2.0, Pointer::CENTER);
        b.frame(2.0, Pointer::CENTER);
        assert_eq!(a.animated_positions(), b.animated_positions());
        assert_eq!(a.colors(), b.colors());
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_non_finite_time_keeps_previous_frame() {
        let mut scene = scene(10, 2);
        scene.frame(1.0, Pointer::CENTER);
        let positions = scene.animated_positions().to_vec();
        scene.frame(f32::NAN, Pointer::CENTER);
        scene.frame(f32::INFINITY, Pointer::CENTER);
        assert_eq!(scene.animated_positions(), &positions[..]);
        assert_eq!(scene.time(), 1.0);
    }

    #[test]
    fn test_non_finite_pointer_is_centred() {
        let mut a = scene(10, 2);
        let mut b = scene(10, 2);
        a.frame(2.0, Pointer::new(f32::NAN, f32::INFINITY));
        b.frame(2.0, Pointer::CENTER);
        assert_eq!(a.rotation(), b.rotation());
        assert!(a.animated_positions().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_reduced_motion_freezes_everything() {
        let config = SceneConfig {
            reduced_motion: true,
            ..SceneConfig::with_counts(16, 3, 2.0)
        };
        let mut scene = Scene::new(config).unwrap();
        let positions = scene.animated_positions().to_vec();
        let tiles = scene.tiles().to_vec();

        scene.frame(12.0, Pointer::new(1.0, -1.0));
        assert_eq!(scene.animated_positions(), &positions[..]);
        assert_eq!(scene.tiles(), &tiles[..]);
        assert_eq!(scene.rotation(), Rotation::default());
        assert_eq!(scene.ornaments().ring_angle, 0.0);
        assert_eq!(scene.parallax().tilt(), (0.0, 0.0));
    }

    #[test]
    fn test_empty_scene() {
        let mut scene = scene(0, 3);
        scene.frame(5.0, Pointer::new(0.2, 0.2));
        assert_eq!(scene.point_count(), 0);
        assert_eq!(scene.edge_count(), 0);
        assert!(scene.animated_positions().is_empty());
        assert!(scene.line_segments().is_empty());
        assert!(scene.neighbors(0).is_empty());
    }

    #[test]
    fn test_rebuild_swaps_on_success_only() {
        let mut scene = scene(10, 2);
        scene.frame(1.0, Pointer::new(1.0, 1.0));
        assert_ne!(scene.parallax().tilt(), (0.0, 0.0));

        let err = scene.rebuild(SceneConfig::with_counts(-5, 2, 2.0)).unwrap_err();
        assert_eq!(err, SceneError::NegativePointCount(-5));
        assert_eq!(scene.point_count(), 10);

        scene.rebuild(SceneConfig::with_counts(30, 4, 1.0)).unwrap();
        assert_eq!(scene.point_count(), 30);
        assert_eq!(scene.edge_count(), 120);
        assert_eq!(scene.parallax().tilt(), (0.0, 0.0));
        assert_eq!(scene.config().radius, 1.0);
    }

    #[test]
    fn test_ribbons_sampled() {
        let scene = scene(4, 1);
        for i in 0..RIBBON_COUNT {
            assert_eq!(scene.ribbon(i).unwrap().len(), (RIBBON_SEGMENTS + 1) * 3);
        }
        assert!(scene.ribbon(RIBBON_COUNT).is_none());
    }

    #[test]
    fn test_single_color_palette() {
        let config = SceneConfig {
            palette: vec!["#FF0000".into()],
            ..SceneConfig::with_counts(8, 2, 1.0)
        };
        let mut scene = Scene::new(config).unwrap();
        scene.frame(4.0, Pointer::CENTER);
        let red = Palette::from_hex(&["#FF0000"]).unwrap().sample(0.3).to_array();
        for rgb in scene.colors().chunks_exact(3) {
            assert_eq!(rgb, red);
        }
    }
}
