use crate::canvas::Canvas;
use crate::paint::Color;

/// Visits every canvas pixel and blends `color` with its alpha scaled by
/// `coverage(x, y)`, clamped to `[0, 1]`. Pixels with zero (or NaN)
/// coverage are skipped. Returns the number of pixels touched.
pub fn fill_coverage(canvas: &mut Canvas, color: Color, coverage: impl Fn(u32, u32) -> f32) -> u64 {
    let mut covered = 0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let cov = coverage(x, y);
            if cov.is_nan() || cov <= 0.0 {
                continue;
            }
            canvas.put_pixel(x, y, color.with_alpha(color.a * cov.min(1.0)));
            covered += 1;
        }
    }
    covered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_coverage_matches_put_pixel() {
        let color = Color::new(0.2, 0.4, 0.6, 0.8);
        let mut a = Canvas::new(3, 3);
        let mut b = Canvas::new(3, 3);

        assert_eq!(fill_coverage(&mut a, color, |_, _| 1.0), 9);
        for y in 0..3 {
            for x in 0..3 {
                b.put_pixel(x, y, color);
            }
        }
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn partial_coverage_scales_alpha() {
        let mut c = Canvas::with_background(1, 1, Color::black());
        fill_coverage(&mut c, Color::white(), |_, _| 0.25);
        let px = c.pixel(0, 0);
        assert!((px.r - 0.25).abs() < 1e-6);
        assert_eq!(px.a, 1.0);
    }

    #[test]
    fn over_unit_coverage_is_clamped() {
        let mut c = Canvas::with_background(1, 1, Color::black());
        fill_coverage(&mut c, Color::white().with_alpha(0.5), |_, _| 4.0);
        assert!((c.pixel(0, 0).r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_negative_and_nan_coverage_skip() {
        let mut c = Canvas::new(3, 1);
        let n = fill_coverage(&mut c, Color::black(), |x, _| match x {
            0 => 0.0,
            1 => -1.0,
            _ => f32::NAN,
        });
        assert_eq!(n, 0);
        assert!((0..3).all(|x| c.pixel(x, 0) == Color::white()));
    }
}
