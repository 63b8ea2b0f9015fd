//! Colour ramp for the neural web.
//!
//! Points cycle through a fixed ramp of brand colours. The ramp is cyclic: a
//! blend value of 1.0 lands back on the first stop, so the drift never jumps.

use serde::Serialize;

use crate::error::SceneError;

/// Default ramp: cyan, lime, orange.
pub const DEFAULT_PALETTE: [&str; 3] = ["#00E5FF", "#B6FF4D", "#FF6A3D"];

/// Linear RGB colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32, SceneError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Linear interpolation, `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// A cyclic colour ramp with at least one stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Palette {
    pub fn new(stops: Vec<Rgb>) -> Result<Self, SceneError> {
        if stops.is_empty() {
            return Err(SceneError::EmptyPalette);
        }
        Ok(Self { stops })
    }

    /// Build a ramp from `#RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, SceneError> {
        let stops = colors
            .iter()
            .map(|c| Rgb::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stops)
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Colour at blend value `t`. `t` wraps, so any finite value is valid.
    pub fn sample(&self, t: f32) -> Rgb {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }

        let scaled = t.rem_euclid(1.0) * n as f32;
        let base = scaled.floor();
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        let i = (base as usize) % n;
        let frac = (scaled - base).clamp(0.0, 1.0);

        self.stops[i].lerp(self.stops[(i + 1) % n], frac)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stops: vec![
                Rgb::new(0.0, 229.0 / 255.0, 1.0),
                Rgb::new(182.0 / 255.0, 1.0, 77.0 / 255.0),
                Rgb::new(1.0, 106.0 / 255.0, 61.0 / 255.0),
            ],
        }
    }
}
