//! Pointer parallax easing.
//!
//! The camera tilts and a glow light drifts toward the pointer, each easing a
//! fixed fraction of the remaining distance per frame. Unlike the rest of the
//! animation this carries state between frames, so it lives with the host
//! adapter and starts over from rest whenever the scene is rebuilt.

use super::driver::Pointer;

/// Maximum camera tilt in radians at full pointer deflection.
pub const TILT_MAX: f32 = 0.12;
/// Fraction of the remaining tilt applied per frame.
pub const TILT_EASE: f32 = 0.05;
/// Glow light travel at full pointer deflection, `(x, y)`.
pub const GLOW_SPAN: (f32, f32) = (3.0, 2.0);
/// Fraction of the remaining glow travel applied per frame.
pub const GLOW_EASE: f32 = 0.1;

/// A 2D value easing toward a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eased {
    pub x: f32,
    pub y: f32,
    factor: f32,
}

impl Eased {
    pub fn new(factor: f32) -> Self {
        Self { x: 0.0, y: 0.0, factor: factor.clamp(0.0, 1.0) }
    }

    /// Move one step toward `(tx, ty)`.
    pub fn step(&mut self, tx: f32, ty: f32) -> (f32, f32) {
        self.x += (tx - self.x) * self.factor;
        self.y += (ty - self.y) * self.factor;
        (self.x, self.y)
    }
}

/// Camera tilt and glow light, both following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    tilt: Eased,
    glow: Eased,
}

impl Parallax {
    pub fn new() -> Self {
        Self {
            tilt: Eased::new(TILT_EASE),
            glow: Eased::new(GLOW_EASE),
        }
    }

    /// Advance one frame. Non-finite pointer input is ignored so a bad
    /// sample cannot poison the eased state.
    pub fn update(&mut self, pointer: Pointer) {
        if !pointer.is_finite() {
            return;
        }
        self.tilt.step(pointer.y * TILT_MAX, -pointer.x * TILT_MAX);
        self.glow.step(pointer.x * GLOW_SPAN.0, pointer.y * GLOW_SPAN.1);
    }

    /// Camera rotation `(x, y)` in radians.
    pub fn tilt(&self) -> (f32, f32) {
        (self.tilt.x, self.tilt.y)
    }

    /// Glow light position `(x, y)`.
    pub fn glow(&self) -> (f32, f32) {
        (self.glow.x, self.glow.y)
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new()
    }
}
