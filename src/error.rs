//! Error type for scene construction.
//!
//! Everything past construction is infallible: sampling, neighbour search and
//! frame computation accept any well-formed configuration.

use thiserror::Error;

/// Errors raised while validating or decoding a scene configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// Point count supplied by the host was negative.
    #[error("point count must be non-negative, got {0}")]
    NegativePointCount(i64),

    /// Point count exceeds what a single scene may hold.
    #[error("point count {count} exceeds the maximum of {max}")]
    PointCountTooLarge { count: i64, max: usize },

    /// Neighbour count supplied by the host was negative.
    #[error("neighbor count must be non-negative, got {0}")]
    NegativeNeighborCount(i64),

    /// Sphere radius was zero, negative or not finite.
    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    /// A tuning value was NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// A palette entry was not a `#RRGGBB` string.
    #[error("invalid color `{0}`, expected #RRGGBB")]
    InvalidColor(String),

    /// The colour ramp needs at least one stop.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// The JS configuration object could not be decoded.
    #[error("failed to decode scene config: {0}")]
    Deserialize(String),
}

impl From<serde_wasm_bindgen::Error> for SceneError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SceneError::Deserialize(err.to_string())
    }
}
