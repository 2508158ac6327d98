//! Coordinate types shared by drawables, rasterizers and the canvas.
//!
//! Canonical space:
//! - Pixel units
//! - Origin top-left
//! - +X right, +Y down
//! - Pixel `(x, y)` is covered when the integer point `(x, y)` lies inside a
//!   shape, boundary inclusive

mod point;
mod rect;

pub use point::{Point, MAX_DIM};
pub use rect::PixelRect;
