//! Scan conversion.
//!
//! Each routine decides which integer pixels a shape covers, clips that set
//! to the canvas, and hands it to the canvas blend primitives. Nothing here
//! keeps state between calls.
//!
//! Coverage convention: pixel `(x, y)` is covered when the point `(x, y)`
//! lies inside the shape or on its boundary.

mod mask;
mod rect;
mod triangle;

pub use mask::fill_coverage;
pub use rect::fill_rect;
pub use triangle::{fill_triangle, point_in_triangle};
