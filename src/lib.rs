//! Hero Scene - WASM Module
//!
//! This module computes the procedural 3D hero scene of the landing page: a
//! neural web of points spread over a sphere, joined to their nearest
//! neighbours and animated every frame. It is compiled to WebAssembly and
//! exposes a JavaScript-friendly API via wasm-bindgen; the host owns the
//! canvas and the render loop and uploads the buffers exposed here.
//!
//! # Architecture
//!
//! - `layout`: Golden-angle sphere sampling and ribbon curves
//! - `graph`: Nearest-neighbour graph using petgraph's StableGraph
//! - `spatial`: R-tree index for neighbour search on large point counts
//! - `animation`: Per-frame driver, ornaments and parallax easing
//! - `config`: Host configuration and validation
//! - `scene`: Static scene plus reusable frame buffers

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
mod console;
pub mod error;
pub mod graph;
pub mod layout;
pub mod scene;
pub mod spatial;

use animation::Pointer;
use config::SceneConfig;
use scene::Scene;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Main entry point for the hero scene.
///
/// This struct wraps the internal Scene and provides the public API
/// exposed to JavaScript.
#[wasm_bindgen]
pub struct HeroScene {
    scene: Scene,
}

#[wasm_bindgen]
impl HeroScene {
    /// Create a scene with default tuning.
    ///
    /// # Arguments
    ///
    /// * `point_count` - Number of points on the sphere
    /// * `neighbors` - Nearest neighbours linked per point
    /// * `radius` - Sphere radius
    #[wasm_bindgen(constructor)]
    pub fn new(point_count: i32, neighbors: i32, radius: f32) -> Result<HeroScene, JsError> {
        let config = SceneConfig::with_counts(point_count as i64, neighbors as i64, radius);
        Ok(Self {
            scene: Scene::new(config)?,
        })
    }

    /// Create a scene from a configuration object. Missing fields take
    /// their defaults; `undefined` gives the default scene.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<HeroScene, JsError> {
        let config = SceneConfig::from_js(config)?;
        Ok(Self {
            scene: Scene::new(config)?,
        })
    }

    /// Rebuild the scene from a new configuration object.
    ///
    /// On error the current scene is kept. Views obtained before a successful
    /// rebuild are invalidated.
    pub fn rebuild(&mut self, config: JsValue) -> Result<(), JsError> {
        let config = SceneConfig::from_js(config)?;
        self.scene.rebuild(config)?;
        Ok(())
    }

    /// The active configuration as a plain object.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.scene.config())?)
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Compute the frame at `t` seconds with the pointer at `(px, py)`,
    /// normalized to `[-1, 1]`. Results land in the frame buffer views.
    pub fn frame(&mut self, t: f32, px: f32, py: f32) {
        self.scene.frame(t, Pointer::new(px, py));
    }

    /// Full per-point frame state at `(t, px, py)` as a plain object.
    ///
    /// Allocates; intended for debugging and tests rather than the render
    /// loop.
    #[wasm_bindgen(js_name = frameState)]
    pub fn frame_state(&self, t: f32, px: f32, py: f32) -> Result<JsValue, JsError> {
        let state = self.scene.frame_state(t, Pointer::new(px, py));
        Ok(serde_wasm_bindgen::to_value(&state)?)
    }

    /// Time of the last computed frame.
    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f32 {
        self.scene.time()
    }

    /// Edge line opacity for the current frame.
    #[wasm_bindgen(js_name = edgeOpacity)]
    pub fn edge_opacity(&self) -> f32 {
        self.scene.edge_opacity()
    }

    /// Group rotation about X (pitch) for the current frame.
    #[wasm_bindgen(js_name = rotationX)]
    pub fn rotation_x(&self) -> f32 {
        self.scene.rotation().pitch
    }

    /// Group rotation about Y (yaw) for the current frame.
    #[wasm_bindgen(js_name = rotationY)]
    pub fn rotation_y(&self) -> f32 {
        self.scene.rotation().yaw
    }

    // =========================================================================
    // Zero-copy views
    // =========================================================================

    /// Get a view of the static point positions (interleaved xyz).
    ///
    /// # Safety
    ///
    /// Views are invalidated by `rebuild` and by any WASM memory growth.
    /// Re-acquire them after either.
    #[wasm_bindgen(js_name = getBasePositionsView)]
    pub fn get_base_positions_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.base_positions()) }
    }

    /// Get a view of the animated point positions (interleaved xyz).
    #[wasm_bindgen(js_name = getPositionsView)]
    pub fn get_positions_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.animated_positions()) }
    }

    /// Get a view of the point colours (interleaved rgb, `0..1`).
    #[wasm_bindgen(js_name = getColorsView)]
    pub fn get_colors_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.colors()) }
    }

    #[wasm_bindgen(js_name = getScalesView)]
    pub fn get_scales_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.scales()) }
    }

    #[wasm_bindgen(js_name = getOpacitiesView)]
    pub fn get_opacities_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.opacities()) }
    }

    /// Get a view of the edge line segments (xyz per endpoint, two per edge).
    #[wasm_bindgen(js_name = getLineSegmentsView)]
    pub fn get_line_segments_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.line_segments()) }
    }

    /// Get a view of the tile transforms (`[x, y, z, yaw]` per tile).
    #[wasm_bindgen(js_name = getTilesView)]
    pub fn get_tiles_view(&self) -> Float32Array {
        unsafe { Float32Array::view(self.scene.tiles()) }
    }

    /// Copy of ribbon `index`'s sampled polyline (interleaved xyz), or
    /// `undefined` past the last ribbon.
    #[wasm_bindgen(js_name = getRibbon)]
    pub fn get_ribbon(&self, index: usize) -> Option<Vec<f32>> {
        self.scene.ribbon(index).map(<[f32]>::to_vec)
    }

    // =========================================================================
    // Ornaments
    // =========================================================================

    #[wasm_bindgen(js_name = ringAngle)]
    pub fn ring_angle(&self) -> f32 {
        self.scene.ornaments().ring_angle
    }

    #[wasm_bindgen(js_name = trophyHeight)]
    pub fn trophy_height(&self) -> f32 {
        self.scene.ornaments().trophy_height
    }

    /// Emissive intensity of ribbon `index` (0 past the last ribbon).
    #[wasm_bindgen(js_name = ribbonGlow)]
    pub fn ribbon_glow(&self, index: usize) -> f32 {
        self.scene
            .ornaments()
            .ribbon_glow
            .get(index)
            .copied()
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = ribbonCount)]
    pub fn ribbon_count(&self) -> usize {
        layout::RIBBON_COUNT
    }

    #[wasm_bindgen(js_name = ribbonScale)]
    pub fn ribbon_scale(&self) -> f32 {
        layout::RIBBON_SCALE
    }

    #[wasm_bindgen(js_name = tileCount)]
    pub fn tile_count(&self) -> usize {
        animation::TILE_COUNT
    }

    /// Eased camera tilt about X.
    #[wasm_bindgen(js_name = tiltX)]
    pub fn tilt_x(&self) -> f32 {
        self.scene.parallax().tilt().0
    }

    /// Eased camera tilt about Y.
    #[wasm_bindgen(js_name = tiltY)]
    pub fn tilt_y(&self) -> f32 {
        self.scene.parallax().tilt().1
    }

    /// Eased glow light x position.
    #[wasm_bindgen(js_name = glowX)]
    pub fn glow_x(&self) -> f32 {
        self.scene.parallax().glow().0
    }

    /// Eased glow light y position.
    #[wasm_bindgen(js_name = glowY)]
    pub fn glow_y(&self) -> f32 {
        self.scene.parallax().glow().1
    }

    // =========================================================================
    // Graph
    // =========================================================================

    #[wasm_bindgen(js_name = pointCount)]
    pub fn point_count(&self) -> u32 {
        self.scene.point_count() as u32
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> u32 {
        self.scene.edge_count() as u32
    }

    /// Neighbours of a point, closest first. Empty for unknown points.
    #[wasm_bindgen(js_name = getNeighbors)]
    pub fn get_neighbors(&self, point_id: u32) -> Vec<u32> {
        self.scene.neighbors(point_id)
    }

    /// Edges as flat `[source0, target0, source1, target1, ...]` pairs in
    /// construction order.
    #[wasm_bindgen(js_name = getEdgePairs)]
    pub fn get_edge_pairs(&self) -> Vec<u32> {
        self.scene
            .web()
            .edges()
            .iter()
            .flat_map(|edge| edge.as_pair())
            .collect()
    }

    /// Incoming edge count per point.
    #[wasm_bindgen(js_name = getInDegrees)]
    pub fn get_in_degrees(&self) -> Vec<u32> {
        self.scene.web().in_degrees()
    }
}
