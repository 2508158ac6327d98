use crate::canvas::Canvas;
use crate::paint::Color;

/// Anything that can supply a color per pixel and paint itself onto a
/// [`Canvas`].
///
/// Implementations do not keep a reference to the canvas they are
/// registered on; the canvas hands itself to [`paint`](Self::paint) during
/// [`Canvas::draw`].
pub trait Drawable {
    /// Color contributed at pixel `(x, y)`.
    fn pixel(&self, x: u32, y: u32) -> Color;

    /// Blends this drawable into `canvas`.
    ///
    /// The default visits every canvas pixel and blends [`pixel`](Self::pixel)
    /// into it. Shapes override this to visit only the pixels they cover.
    fn paint(&self, canvas: &mut Canvas) {
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                canvas.put_pixel(x, y, self.pixel(x, y));
            }
        }
    }
}
