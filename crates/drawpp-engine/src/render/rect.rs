use crate::canvas::Canvas;
use crate::coords::{PixelRect, Point};
use crate::paint::Color;

/// Blends `color` over every pixel between two corners (inclusive, either
/// order), clipped to the canvas. Returns the number of pixels touched.
pub fn fill_rect(canvas: &mut Canvas, p0: Point, p1: Point, color: Color) -> u64 {
    let Some(r) = PixelRect::from_corners(p0, p1).intersect(canvas.bounds()) else {
        return 0;
    };

    canvas.fill_blend(r.x0 as u32, r.x1 as u32, r.y0 as u32, r.y1 as u32, color);
    r.width() * r.height()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    fn painted(c: &Canvas) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..c.height() {
            for x in 0..c.width() {
                if c.pixel(x, y) != Color::white() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn covers_inclusive_corners() {
        let mut c = Canvas::new(6, 6);
        let n = fill_rect(&mut c, Point::new(1.0, 2.0), Point::new(3.0, 4.0), RED);
        assert_eq!(n, 9);
        let px = painted(&c);
        assert_eq!(px.len(), 9);
        assert!(px.iter().all(|&(x, y)| (1..=3).contains(&x) && (2..=4).contains(&y)));
    }

    #[test]
    fn swapped_corners_cover_same_pixels() {
        let mut a = Canvas::new(6, 6);
        let mut b = Canvas::new(6, 6);
        fill_rect(&mut a, Point::new(1.0, 2.0), Point::new(3.0, 4.0), RED);
        fill_rect(&mut b, Point::new(3.0, 4.0), Point::new(1.0, 2.0), RED);
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn clipped_to_canvas() {
        let mut c = Canvas::new(4, 4);
        let n = fill_rect(&mut c, Point::new(-10.0, 2.0), Point::new(100.0, 100.0), RED);
        assert_eq!(n, 8);
        assert_eq!(painted(&c).len(), 8);
    }

    #[test]
    fn zero_width_rect_is_one_column() {
        let mut c = Canvas::new(4, 4);
        assert_eq!(fill_rect(&mut c, Point::new(2.0, 0.0), Point::new(2.0, 3.0), RED), 4);
    }

    #[test]
    fn empty_and_offscreen_rects_touch_nothing() {
        let mut c = Canvas::new(4, 4);
        assert_eq!(fill_rect(&mut c, Point::new(1.2, 0.0), Point::new(1.8, 3.0), RED), 0);
        assert_eq!(fill_rect(&mut c, Point::new(10.0, 10.0), Point::new(20.0, 20.0), RED), 0);
        assert!(painted(&c).is_empty());
    }

    #[test]
    fn non_finite_corner_touches_nothing() {
        let mut c = Canvas::new(4, 4);
        assert_eq!(fill_rect(&mut c, Point::new(f32::NAN, 0.0), Point::new(3.0, 3.0), RED), 0);
        assert_eq!(fill_rect(&mut c, Point::new(0.0, 0.0), Point::new(f32::INFINITY, 3.0), RED), 0);
        assert!(painted(&c).is_empty());
    }
}
