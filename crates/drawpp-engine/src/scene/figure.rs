use crate::canvas::Canvas;
use crate::coords::Point;
use crate::paint::Color;
use crate::render;

use super::{Drawable, MaskFn, Shape};

/// A uniformly colored shape.
///
/// `pixel` always returns the figure's color; the shape only decides which
/// pixels receive it.
#[derive(Debug, Clone)]
pub struct Figure {
    color: Color,
    shape: Shape,
    points: Vec<Point>,
}

impl Figure {
    /// # Panics
    /// Panics if `points` has fewer entries than `shape` requires.
    pub fn new(color: Color, shape: Shape, points: Vec<Point>) -> Self {
        assert!(
            points.len() >= shape.min_points(),
            "{} figure needs {} points, got {}",
            shape.name(),
            shape.min_points(),
            points.len()
        );
        Self { color, shape, points }
    }

    /// Rectangle between two corners, in either order.
    pub fn rect(p0: Point, p1: Point, color: Color) -> Self {
        Self::new(color, Shape::Rect, vec![p0, p1])
    }

    pub fn triangle(a: Point, b: Point, c: Point, color: Color) -> Self {
        Self::new(color, Shape::Triangle, vec![a, b, c])
    }

    /// Procedural figure; `params` are passed to `mask` unchanged.
    pub fn mask(color: Color, mask: MaskFn, params: Vec<Point>) -> Self {
        Self::new(color, Shape::Mask(mask), params)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coverage of pixel `(x, y)`; see [`Shape::coverage`].
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> f32 {
        self.shape.coverage(&self.points, x, y)
    }
}

impl Drawable for Figure {
    fn pixel(&self, _x: u32, _y: u32) -> Color {
        self.color
    }

    fn paint(&self, canvas: &mut Canvas) {
        let p: &[Point] = &self.points;
        let touched = match self.shape {
            Shape::Rect => render::fill_rect(canvas, p[0], p[1], self.color),
            Shape::Triangle => render::fill_triangle(canvas, p[0], p[1], p[2], self.color),
            Shape::Mask(f) => render::fill_coverage(canvas, self.color, |x, y| f(p, x, y)),
        };

        if touched == 0 {
            log::warn!(
                "{} figure covers no pixel of the {}x{} canvas",
                self.shape.name(),
                canvas.width(),
                canvas.height()
            );
        } else {
            log::trace!("{} figure touched {touched} pixel(s)", self.shape.name());
        }
    }
}
