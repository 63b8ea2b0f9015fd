//! Scene configuration.
//!
//! The host passes a plain JS object; every field is optional and falls back
//! to the defaults below. Counts arrive as signed integers so that negative
//! values are reported as configuration errors rather than decode failures.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::animation::{DEFAULT_PALETTE, MotionParams, Palette};
use crate::error::SceneError;
use crate::graph::NeighborSearch;

/// Upper bound on the point count of one scene.
pub const MAX_POINTS: usize = 1 << 20;

/// Raw scene configuration as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    /// Number of points on the sphere (N).
    pub point_count: i64,
    /// Neighbours per point (K).
    pub neighbors: i64,
    /// Sphere radius (R).
    pub radius: f32,
    /// Colour ramp cycles per second.
    pub drift_rate: f32,
    /// Group yaw in radians per second.
    pub spin_rate: f32,
    /// Radians of group rotation at full pointer deflection.
    pub pointer_influence: f32,
    /// Amplitude of each point's positional wobble.
    pub wobble: f32,
    /// Point scale at rest.
    pub base_scale: f32,
    /// Relative depth of the scale pulse.
    pub pulse_amount: f32,
    /// Edge line opacity at rest.
    pub edge_opacity: f32,
    /// Freeze the animation at its baseline (prefers-reduced-motion).
    pub reduced_motion: bool,
    pub neighbor_search: NeighborSearch,
    /// Point count above which `Auto` search switches to the R-tree.
    pub spatial_index_threshold: u32,
    /// Colour ramp as `#RRGGBB` strings.
    pub palette: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            point_count: 180,
            neighbors: 3,
            radius: 2.2,
            drift_rate: 0.05,
            spin_rate: 0.08,
            pointer_influence: 0.35,
            wobble: 0.04,
            base_scale: 0.035,
            pulse_amount: 0.25,
            edge_opacity: 0.35,
            reduced_motion: false,
            neighbor_search: NeighborSearch::Auto,
            spatial_index_threshold: 512,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A validated configuration, ready to build a scene from.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub point_count: usize,
    pub neighbors: usize,
    pub radius: f32,
    /// Concrete search strategy (`Auto` already resolved).
    pub search: NeighborSearch,
    pub motion: MotionParams,
    pub palette: Palette,
}

impl SceneConfig {
    /// Defaults with the three structural parameters overridden.
    pub fn with_counts(point_count: i64, neighbors: i64, radius: f32) -> Self {
        Self {
            point_count,
            neighbors,
            radius,
            ..Self::default()
        }
    }

    /// Decode from a JS object. `undefined` and `null` mean all defaults.
    pub fn from_js(value: JsValue) -> Result<Self, SceneError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    /// Validate and convert into build settings.
    pub fn resolve(&self) -> Result<SceneSettings, SceneError> {
        if self.point_count < 0 {
            return Err(SceneError::NegativePointCount(self.point_count));
        }
        let point_count = self.point_count as usize;
        if point_count > MAX_POINTS {
            return Err(SceneError::PointCountTooLarge {
                count: self.point_count,
                max: MAX_POINTS,
            });
        }
        if self.neighbors < 0 {
            return Err(SceneError::NegativeNeighborCount(self.neighbors));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidRadius(self.radius));
        }

        let tuning = [
            ("driftRate", self.drift_rate),
            ("spinRate", self.spin_rate),
            ("pointerInfluence", self.pointer_influence),
            ("wobble", self.wobble),
            ("baseScale", self.base_scale),
            ("pulseAmount", self.pulse_amount),
            ("edgeOpacity", self.edge_opacity),
        ];
        if let Some(&(name, value)) = tuning.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SceneError::InvalidParameter { name, value });
        }

        // Neighbours beyond N - 1 saturate; clamping keeps the cast in range.
        let neighbors = (self.neighbors as u64).min(MAX_POINTS as u64) as usize;

        Ok(SceneSettings {
            point_count,
            neighbors,
            radius: self.radius,
            search: self
                .neighbor_search
                .resolve(point_count, self.spatial_index_threshold as usize),
            motion: MotionParams {
                drift_rate: self.drift_rate,
                spin_rate: self.spin_rate,
                pointer_influence: self.pointer_influence,
                wobble: self.wobble,
                base_scale: self.base_scale,
                pulse_amount: self.pulse_amount,
                edge_opacity: self.edge_opacity,
                reduced_motion: self.reduced_motion,
            },
            palette: Palette::from_hex(&self.palette)?,
        })
    }
}
