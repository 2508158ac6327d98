use crate::coords::{PixelRect, Point};
use crate::render::point_in_triangle;

/// Procedural coverage function: given the figure's parameter points and a
/// pixel, returns coverage in `[0, 1]`. Values outside that range are
/// clamped when painting.
pub type MaskFn = fn(params: &[Point], x: u32, y: u32) -> f32;

/// Geometry of a [`Figure`](super::Figure), parameterized by the figure's
/// points.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Axis-aligned rectangle with corners `points[0]` and `points[1]`.
    Rect,
    /// Triangle with vertices `points[0..3]`.
    Triangle,
    /// User-defined coverage. Points are free-form parameters (resolution,
    /// zoom, offset, ...), not necessarily positions.
    Mask(MaskFn),
}

impl Shape {
    /// Minimum number of points a figure of this shape must carry.
    #[inline]
    pub fn min_points(&self) -> usize {
        match self {
            Shape::Rect => 2,
            Shape::Triangle => 3,
            Shape::Mask(_) => 0,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rect => "rect",
            Shape::Triangle => "triangle",
            Shape::Mask(_) => "mask",
        }
    }

    /// Coverage of pixel `(x, y)` in `[0, 1]`.
    ///
    /// Geometric shapes answer 0 or 1 with the same boundary-inclusive rule
    /// the rasterizers use.
    pub fn coverage(&self, points: &[Point], x: u32, y: u32) -> f32 {
        assert!(
            points.len() >= self.min_points(),
            "{} shape needs {} points, got {}",
            self.name(),
            self.min_points(),
            points.len()
        );
        let inside = match self {
            Shape::Rect => PixelRect::from_corners(points[0], points[1]).contains(x as i64, y as i64),
            Shape::Triangle => {
                point_in_triangle(points[0], points[1], points[2], Point::new(x as f32, y as f32))
            }
            Shape::Mask(f) => return f(points, x, y).clamp(0.0, 1.0),
        };
        if inside { 1.0 } else { 0.0 }
    }

    /// Whether pixel `(x, y)` receives any coverage.
    #[inline]
    pub fn covers(&self, points: &[Point], x: u32, y: u32) -> bool {
        self.coverage(points, x, y) > 0.0
    }
}
