//! Per-frame animation of the neural web.
//!
//! Every quantity here is a pure function of the elapsed time, the pointer
//! position and the point index, so a frame can be recomputed at any time
//! without history. Trigonometry runs in f64: the inputs are unconstrained
//! finite reals and `freq * t` must not overflow f32 into infinity (and from
//! there into NaN).

use std::f64::consts::{PI, TAU};

use serde::Serialize;

use super::palette::{Palette, Rgb};

/// Phase step between successive points; desynchronises their motion.
const PHASE_STEP: f64 = 0.618_033_988_749_895;

/// Angular frequencies of the positional wobble, per axis.
const WOBBLE_FREQ: [f64; 3] = [0.9, 0.7, 1.1];

/// Angular frequency of the scale/opacity pulse.
const PULSE_FREQ: f64 = 1.6;

/// Angular frequency of the edge opacity breathing.
const EDGE_FREQ: f64 = 0.5;

/// Relative depth of the edge opacity breathing.
const EDGE_SWING: f64 = 0.35;

/// Pitch responds at half the yaw's pointer influence.
const PITCH_RATIO: f64 = 0.5;

/// Normalised pointer position, nominally in `[-1, 1]²`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Group rotation in radians, each angle wrapped to `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rotation {
    /// Rotation about the X axis.
    pub pitch: f32,
    /// Rotation about the Y axis.
    pub yaw: f32,
}

/// Transient visual state of one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointFrame {
    /// Offset from the static position.
    pub offset: [f32; 3],
    /// Position on the colour ramp, in `[0, 1)`.
    pub blend: f32,
    pub color: Rgb,
    pub scale: f32,
    pub opacity: f32,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameState {
    pub rotation: Rotation,
    pub edge_opacity: f32,
    pub points: Vec<PointFrame>,
}

/// Tuning values for the driver. See `SceneConfig` for defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Colour ramp cycles per second.
    pub drift_rate: f32,
    /// Yaw in radians per second.
    pub spin_rate: f32,
    /// Radians of rotation at full pointer deflection.
    pub pointer_influence: f32,
    /// Amplitude of the positional wobble.
    pub wobble: f32,
    /// Point scale at rest.
    pub base_scale: f32,
    /// Relative depth of the scale pulse.
    pub pulse_amount: f32,
    /// Edge opacity at rest.
    pub edge_opacity: f32,
    /// Freeze the scene at its baseline.
    pub reduced_motion: bool,
}

/// Computes frame state from (time, pointer). Holds no per-frame state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    params: MotionParams,
    palette: Palette,
}

impl AnimationDriver {
    pub fn new(params: MotionParams, palette: Palette) -> Self {
        Self { params, palette }
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Reduced motion pins time at zero and ignores the pointer.
    #[inline]
    fn effective(&self, t: f32, pointer: Pointer) -> (f64, Pointer) {
        if self.params.reduced_motion {
            (0.0, Pointer::CENTER)
        } else {
            (t as f64, pointer)
        }
    }

    /// Frame state of point `index` out of `count`.
    pub fn point_frame(&self, index: usize, count: usize, t: f32, pointer: Pointer) -> PointFrame {
        let (t, _) = self.effective(t, pointer);
        let phase = index as f64 * PHASE_STEP;
        let wobble = self.params.wobble as f64;

        let offset = [
            (wobble * (WOBBLE_FREQ[0] * t + phase).sin()) as f32,
            (wobble * (WOBBLE_FREQ[1] * t + 2.0 * phase).sin()) as f32,
            (wobble * (WOBBLE_FREQ[2] * t + 3.0 * phase).sin()) as f32,
        ];

        let blend = color_blend(index, count, t, self.params.drift_rate as f64);

        let pulse = (PULSE_FREQ * t + phase).sin();
        let scale = (self.params.base_scale as f64 * (1.0 + self.params.pulse_amount as f64 * pulse)) as f32;
        let opacity = (0.75 + 0.25 * pulse).clamp(0.0, 1.0) as f32;

        PointFrame {
            offset,
            blend,
            color: self.palette.sample(blend),
            scale,
            opacity,
        }
    }

    /// Global opacity of the edge lines.
    pub fn edge_opacity(&self, t: f32) -> f32 {
        let (t, _) = self.effective(t, Pointer::CENTER);
        let breathing = 1.0 + EDGE_SWING * (EDGE_FREQ * t).sin();
        (self.params.edge_opacity as f64 * breathing).clamp(0.0, 1.0) as f32
    }

    /// Group rotation: yaw accumulates with time and follows the pointer's
    /// x; pitch follows the pointer's y.
    pub fn rotation(&self, t: f32, pointer: Pointer) -> Rotation {
        let (t, pointer) = self.effective(t, pointer);
        let influence = self.params.pointer_influence as f64;

        let yaw = t * self.params.spin_rate as f64 + pointer.x as f64 * influence;
        let pitch = -(pointer.y as f64) * influence * PITCH_RATIO;

        Rotation {
            pitch: wrap_angle(pitch) as f32,
            yaw: wrap_angle(yaw) as f32,
        }
    }

    /// Full frame state for `count` points.
    pub fn frame(&self, count: usize, t: f32, pointer: Pointer) -> FrameState {
        FrameState {
            rotation: self.rotation(t, pointer),
            edge_opacity: self.edge_opacity(t),
            points: (0..count)
                .map(|i| self.point_frame(i, count, t, pointer))
                .collect(),
        }
    }
}

/// `(index / count + t * drift) mod 1`, with `count == 0` treated as one.
fn color_blend(index: usize, count: usize, t: f64, drift: f64) -> f32 {
    let spread = index as f64 / count.max(1) as f64;
    let blend = (spread + t * drift).rem_euclid(1.0) as f32;
    // f64 -> f32 rounding can land on 1.0
    if blend >= 1.0 { 0.0 } else { blend }
}

/// Wrap an angle to `(-π, π]`. Non-finite angles collapse to zero.
fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}
