//! The Doom fire effect
//!
//! `FireField` holds the heat, `Palette` turns heat into color and
//! `rasterize` writes a frame into a `PixelBuffer`.

mod field;
mod palette;
mod raster;

pub use field::{FieldError, FireField};
pub use palette::{Palette, Rgba, MAX_INTENSITY, PALETTE_LEN};
pub use raster::rasterize;
