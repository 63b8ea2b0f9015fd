//! Static scene geometry.
//!
//! This module computes the positions that stay fixed for the lifetime of a
//! scene: the sphere sampling behind the neural web and the ribbon curves.
//! Everything here runs once at mount and is a pure function of its inputs.

pub mod ribbon;
pub mod sphere;

pub use ribbon::{RIBBON_COUNT, RIBBON_SCALE, catmull_rom, ribbon_polyline};
pub use sphere::{GOLDEN_ANGLE, sample_sphere};
