//! Demo scenes.

use std::path::Path;

use anyhow::{Context, Result};
use drawpp_engine::canvas::Canvas;
use drawpp_engine::coords::Point;
use drawpp_engine::paint::Color;
use drawpp_engine::scene::{Figure, ImageSource};

/// Three 80×120 squares stepping down-right; the middle one is half
/// transparent.
pub fn squares() -> Canvas {
    let mut canvas = Canvas::new(640, 480);
    let colors = [
        Color::rgb(1.0, 0.0, 0.0),
        Color::new(0.0, 1.0, 0.0, 0.5),
        Color::rgb(0.0, 0.0, 1.0),
    ];
    for (i, color) in colors.into_iter().enumerate() {
        let d = 20.0 * i as f32;
        canvas.add_drawable(Figure::rect(
            Point::new(370.0 + d, 280.0 + d),
            Point::new(450.0 + d, 400.0 + d),
            color,
        ));
    }
    canvas.draw();
    canvas
}

/// A fan of translucent triangles around the canvas center.
pub fn triangles() -> Canvas {
    let (w, h) = (512.0f32, 512.0f32);
    let center = Point::new(w / 2.0, h / 2.0);
    let mut canvas = Canvas::new(w as u32, h as u32);

    const SPOKES: usize = 12;
    for i in 0..SPOKES {
        let t0 = i as f32 / SPOKES as f32 * std::f32::consts::TAU;
        let t1 = t0 + std::f32::consts::TAU / SPOKES as f32 * 0.8;
        let r = 0.45 * w;
        let hue = i as f32 / SPOKES as f32;
        canvas.add_drawable(Figure::triangle(
            center,
            center + Point::new(t0.cos(), t0.sin()) * r,
            center + Point::new(t1.cos(), t1.sin()) * r,
            Color::new(hue, 0.4, 1.0 - hue, 0.6),
        ));
    }
    canvas.draw();
    canvas
}

/// Decodes `path` onto a canvas of the image's own size.
pub fn image_canvas(path: &Path) -> Result<Canvas> {
    let image = ImageSource::open(path).with_context(|| format!("loading {}", path.display()))?;
    let mut canvas = Canvas::new(image.width(), image.height());
    canvas.add_drawable(image);
    canvas.draw();
    Ok(canvas)
}

/// Draws a procedural mustache over the image at `path`.
///
/// Mask parameters: `[resolution, zoom, position]`, position in
/// normalized image coordinates.
pub fn mustache(path: &Path) -> Result<Canvas> {
    let image = ImageSource::open(path).with_context(|| format!("loading {}", path.display()))?;
    let (w, h) = (image.width(), image.height());

    let mut canvas = Canvas::new(w, h);
    canvas.add_drawable(image);
    canvas.add_drawable(Figure::mask(
        Color::rgb(0.3, 0.1, 0.0),
        mustache_mask,
        vec![Point::new(w as f32, h as f32), Point::splat(0.25), Point::new(0.6, 0.65)],
    ));
    canvas.draw();
    Ok(canvas)
}

/// Band between two sine arcs whose height grows away from the center.
fn mustache_mask(params: &[Point], px: u32, py: u32) -> f32 {
    let (res, zoom, pos) = (params[0], params[1], params[2]);

    let x = px as f32 / res.x() / zoom.x() + 0.5 - pos.x() / zoom.x();
    let y = py as f32 / res.y() / zoom.y() - pos.y() / zoom.y();
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }

    let from_center = (x - 0.5).abs();
    let arc = (x * std::f32::consts::PI).sin();
    let upper = (from_center * (arc * 0.772 - 1.0 / 1.92) + 0.25).abs();
    let lower = (from_center * (arc * 0.324 - 1.0 / 1.96 + 0.5)).abs();

    if upper >= y && lower < y { 1.0 } else { 0.0 }
}
