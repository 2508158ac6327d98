use crate::canvas::Canvas;
use crate::coords::Point;
use crate::paint::Color;

/// Slack applied when rounding scanline bounds to pixels, so vertices and
/// edges that land on integers stay covered despite float error. Span ends
/// are then trimmed with [`point_in_triangle`], so the slack never paints a
/// pixel outside the triangle.
const EDGE_EPS: f64 = 1e-4;

/// Scanline fill of the triangle `a b c`, boundary inclusive, clipped to
/// the canvas. Returns the number of pixels touched.
///
/// Zero-area (collinear) triangles cover nothing.
pub fn fill_triangle(canvas: &mut Canvas, a: Point, b: Point, c: Point, color: Color) -> u64 {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) || twice_area(a, b, c) == 0.0 {
        return 0;
    }
    let bounds = canvas.bounds();
    if bounds.is_empty() {
        return 0;
    }

    let mut v = [a, b, c];
    v.sort_by(|p, q| p.y().total_cmp(&q.y()));
    let [top, mid, bottom] = v;

    let y_start = ((top.y() as f64 - EDGE_EPS).ceil() as i64).max(bounds.y0);
    let y_end = ((bottom.y() as f64 + EDGE_EPS).floor() as i64).min(bounds.y1);

    let mut covered = 0;
    for y in y_start..=y_end {
        let yf = y as f64;
        let long = edge_x(top, bottom, yf);
        let short = if yf < mid.y() as f64 {
            edge_x(top, mid, yf)
        } else {
            edge_x(mid, bottom, yf)
        };
        let (lo, hi) = if long <= short { (long, short) } else { (short, long) };

        let mut x0 = ((lo - EDGE_EPS).ceil() as i64).max(bounds.x0);
        let mut x1 = ((hi + EDGE_EPS).floor() as i64).min(bounds.x1);
        let inside = |x: i64| point_in_triangle(a, b, c, Point::new(x as f32, y as f32));
        while x0 <= x1 && !inside(x0) {
            x0 += 1;
        }
        while x1 > x0 && !inside(x1) {
            x1 -= 1;
        }
        if x0 > x1 {
            continue;
        }

        canvas.fill_blend_row(x0 as u32, x1 as u32, y as u32, color);
        covered += (x1 - x0 + 1) as u64;
    }
    covered
}

/// X where edge `p → q` crosses scanline `y`. A horizontal edge has no
/// single crossing; its first endpoint stands in.
#[inline]
fn edge_x(p: Point, q: Point, y: f64) -> f64 {
    let (px, py) = (p.x() as f64, p.y() as f64);
    let (qx, qy) = (q.x() as f64, q.y() as f64);
    if qy == py {
        return px;
    }
    (y - qy) * (qx - px) / (qy - py) + qx
}

/// Whether `p` is inside the triangle `a b c` or on its boundary.
///
/// All three edge cross products must share a sign (zero counts as
/// either). Zero-area triangles and non-finite input contain nothing.
pub fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    if !(a.is_finite() && b.is_finite() && c.is_finite() && p.is_finite()) {
        return false;
    }
    if twice_area(a, b, c) == 0.0 {
        return false;
    }
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Evaluated in `f64`: differences and products of `f32` inputs are exact
/// there, so the sign is reliable for pixels next to an edge.
#[inline]
fn cross(a: Point, b: Point, p: Point) -> f64 {
    let (ax, ay) = (a.x() as f64, a.y() as f64);
    (b.x() as f64 - ax) * (p.y() as f64 - ay) - (b.y() as f64 - ay) * (p.x() as f64 - ax)
}

#[inline]
fn twice_area(a: Point, b: Point, c: Point) -> f64 {
    cross(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Fills the triangle and checks every pixel against the point test.
    fn assert_matches_point_test(size: u32, a: Point, b: Point, c: Point) {
        let mut canvas = Canvas::new(size, size);
        let n = fill_triangle(&mut canvas, a, b, c, RED);

        let mut expected = 0;
        for y in 0..size {
            for x in 0..size {
                let inside = point_in_triangle(a, b, c, p(x as f32, y as f32));
                let painted = canvas.pixel(x, y) == RED;
                assert_eq!(painted, inside, "pixel ({x}, {y}) for {a:?} {b:?} {c:?}");
                expected += inside as u64;
            }
        }
        assert_eq!(n, expected);
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn right_triangle_covers_x_plus_y_le_10() {
        let mut canvas = Canvas::new(12, 12);
        fill_triangle(&mut canvas, p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0), RED);
        for y in 0..12u32 {
            for x in 0..12u32 {
                let expected = x + y <= 10;
                assert_eq!(canvas.pixel(x, y) == RED, expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn scanline_matches_point_test() {
        let cases = [
            (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)),
            (p(2.0, 1.0), p(17.0, 6.0), p(7.0, 18.0)),
            (p(15.0, 2.0), p(3.0, 9.0), p(12.0, 19.0)),
            (p(1.0, 10.0), p(19.0, 10.0), p(10.0, 1.0)),
            (p(1.0, 3.0), p(19.0, 3.0), p(10.0, 17.0)),
            (p(4.0, 4.0), p(5.0, 16.0), p(6.0, 5.0)),
        ];
        for (a, b, c) in cases {
            assert_matches_point_test(20, a, b, c);
        }
    }

    #[test]
    fn fractional_vertices_match_point_test() {
        // xorshift; vertices on a 0.005 grid inside a 21x21 canvas.
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut coord = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 4201) as f32 * 0.005
        };
        for _ in 0..500 {
            let a = p(coord(), coord());
            let b = p(coord(), coord());
            let c = p(coord(), coord());
            assert_matches_point_test(21, a, b, c);
        }
    }

    #[test]
    fn edge_just_short_of_pixel_leaves_it_unpainted() {
        // The edge from the second vertex to the third crosses y = 16 at
        // x ~ 15.99998, so pixel (16, 16) lies outside.
        let (a, b, c) = (p(14.115, 18.525), p(16.265, 15.645), p(12.37, 14.28));
        assert!(!point_in_triangle(a, b, c, p(16.0, 16.0)));
        assert_matches_point_test(21, a, b, c);
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let (a, b, c) = (p(2.0, 1.0), p(17.0, 6.0), p(7.0, 18.0));
        let mut first = Canvas::new(20, 20);
        let mut second = Canvas::new(20, 20);
        fill_triangle(&mut first, a, b, c, RED);
        fill_triangle(&mut second, c, a, b, RED);
        assert_eq!(first.samples(), second.samples());
    }

    #[test]
    fn clipped_to_canvas() {
        let mut canvas = Canvas::new(8, 8);
        let n = fill_triangle(&mut canvas, p(-20.0, -20.0), p(40.0, -20.0), p(-20.0, 40.0), RED);
        assert_eq!(n, 64);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn collinear_triangle_covers_nothing() {
        let mut canvas = Canvas::new(10, 10);
        assert_eq!(fill_triangle(&mut canvas, p(1.0, 1.0), p(5.0, 5.0), p(8.0, 8.0), RED), 0);
        assert_eq!(fill_triangle(&mut canvas, p(1.0, 4.0), p(5.0, 4.0), p(8.0, 4.0), RED), 0);
        assert_eq!(fill_triangle(&mut canvas, p(3.0, 3.0), p(3.0, 3.0), p(3.0, 3.0), RED), 0);
    }

    #[test]
    fn non_finite_vertex_covers_nothing() {
        let mut canvas = Canvas::new(10, 10);
        assert_eq!(fill_triangle(&mut canvas, p(f32::NAN, 1.0), p(5.0, 5.0), p(8.0, 1.0), RED), 0);
    }

    #[test]
    fn sliver_between_pixels_covers_nothing() {
        let mut canvas = Canvas::new(10, 10);
        assert_eq!(fill_triangle(&mut canvas, p(2.2, 1.0), p(2.8, 1.0), p(2.5, 8.0), RED), 0);
    }

    // ── point test ────────────────────────────────────────────────────────

    #[test]
    fn point_test_is_boundary_inclusive() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(point_in_triangle(a, b, c, p(0.0, 0.0)));
        assert!(point_in_triangle(a, b, c, p(2.0, 2.0)));
        assert!(point_in_triangle(a, b, c, p(1.0, 1.0)));
        assert!(!point_in_triangle(a, b, c, p(3.0, 2.0)));
    }

    #[test]
    fn point_test_rejects_non_finite_vertices() {
        let (b, c) = (p(5.0, 5.0), p(8.0, 1.0));
        for bad in [p(f32::NAN, 1.0), p(f32::INFINITY, 1.0)] {
            for y in 0..10 {
                for x in 0..10 {
                    assert!(!point_in_triangle(bad, b, c, p(x as f32, y as f32)), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn point_test_handles_either_winding() {
        let inside = p(2.0, 1.0);
        assert!(point_in_triangle(p(0.0, 0.0), p(6.0, 0.0), p(0.0, 6.0), inside));
        assert!(point_in_triangle(p(0.0, 6.0), p(6.0, 0.0), p(0.0, 0.0), inside));
    }
}
