//! Drawable sources composited onto a canvas.
//!
//! Responsibilities:
//! - the [`Drawable`] capability (color per pixel + paint onto a canvas)
//! - [`Figure`]: uniform color + [`Shape`] (rect, triangle, procedural mask)
//! - [`ImageSource`]: decoded image pixels
//!
//! Extending:
//! - a new closed geometric shape: add a [`Shape`] variant and a rasterizer
//!   under `render`
//! - anything else: implement [`Drawable`] directly

mod drawable;
mod figure;
mod image_source;
mod shape;

pub use drawable::Drawable;
pub use figure::Figure;
pub use image_source::ImageSource;
pub use shape::{MaskFn, Shape};
