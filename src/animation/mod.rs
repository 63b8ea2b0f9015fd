//! Frame-by-frame animation.
//!
//! The driver and ornaments are pure functions of elapsed time and pointer
//! position; the host adapter copies their output into render buffers. The
//! parallax easing is the one piece with memory and is owned by the adapter.

pub mod driver;
pub mod ornaments;
pub mod palette;
pub mod parallax;

pub use driver::{AnimationDriver, FrameState, MotionParams, PointFrame, Pointer, Rotation};
pub use ornaments::{OrnamentFrame, TILE_COUNT, TileTransform};
pub use palette::{DEFAULT_PALETTE, Palette, Rgb};
pub use parallax::Parallax;
