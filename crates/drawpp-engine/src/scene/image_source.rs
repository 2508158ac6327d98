use std::path::Path;

use crate::canvas::Canvas;
use crate::codec::{self, CodecError, RgbaGrid};
use crate::coords::PixelRect;
use crate::paint::Color;

use super::Drawable;

/// A drawable backed by decoded 8-bit RGBA pixels, placed at the canvas
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    grid: RgbaGrid<u8>,
}

impl ImageSource {
    pub fn from_grid(grid: RgbaGrid<u8>) -> Self {
        Self { grid }
    }

    /// Decodes an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        codec::decode(path).map(Self::from_grid)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::of_size(self.width(), self.height())
    }

    #[inline]
    pub fn grid(&self) -> &RgbaGrid<u8> {
        &self.grid
    }
}

impl Drawable for ImageSource {
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_u8(self.grid.get(x, y))
    }

    /// Blends the part of the image that overlaps the canvas.
    fn paint(&self, canvas: &mut Canvas) {
        let Some(r) = self.bounds().intersect(canvas.bounds()) else {
            log::warn!(
                "{}x{} image does not overlap the {}x{} canvas",
                self.width(),
                self.height(),
                canvas.width(),
                canvas.height()
            );
            return;
        };

        for y in r.y0 as u32..=r.y1 as u32 {
            for x in r.x0 as u32..=r.x1 as u32 {
                canvas.put_pixel(x, y, self.pixel(x, y));
            }
        }
    }
}
