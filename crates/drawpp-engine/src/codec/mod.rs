//! PNG in/out.
//!
//! The rest of the engine only sees [`RgbaGrid`]s; file access and the
//! `image` crate stay behind [`decode`] and [`encode`]. Decoding always
//! yields 8-bit RGBA regardless of the file's own layout.

mod error;
mod grid;
mod metadata;

pub use error::CodecError;
pub use grid::{RgbaGrid, Sample};
pub use metadata::{BitDepth, ColorLayout, Compression, ImageMetadata, PngFilter};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, ImageResult};

/// Reads and decodes an image file into 8-bit RGBA.
pub fn decode(path: impl AsRef<Path>) -> Result<RgbaGrid<u8>, CodecError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|source| CodecError::Io { path: path.to_owned(), source })?;
    let grid = decode_image(&bytes)
        .map_err(|source| CodecError::Decode { path: Some(path.to_owned()), source })?;

    log::debug!("decoded {}x{} image from {}", grid.width(), grid.height(), path.display());
    Ok(grid)
}

/// Decodes an in-memory image into 8-bit RGBA.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaGrid<u8>, CodecError> {
    decode_image(bytes).map_err(|source| CodecError::Decode { path: None, source })
}

fn decode_image(bytes: &[u8]) -> ImageResult<RgbaGrid<u8>> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    let pixels = img.pixels().map(|p| p.0).collect();
    Ok(RgbaGrid::new(width, height, pixels))
}

/// Encodes `grid` as PNG into `path`.
///
/// A file that was created before encoding failed is removed.
pub fn encode<T: Sample>(
    path: impl AsRef<Path>,
    grid: &RgbaGrid<T>,
    metadata: &ImageMetadata,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let io_err = |source| CodecError::Io { path: path.to_owned(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    let result = write_png(&mut writer, grid, metadata)
        .map_err(|source| CodecError::Encode { path: Some(path.to_owned()), source })
        .and_then(|()| writer.flush().map_err(io_err));

    if let Err(err) = &result {
        log::warn!("{err}; removing partial output");
        drop(writer);
        let _ = fs::remove_file(path);
    } else {
        log::debug!("encoded {}x{} image to {}", grid.width(), grid.height(), path.display());
    }
    result
}

/// Encodes `grid` as PNG into memory.
pub fn encode_bytes<T: Sample>(
    grid: &RgbaGrid<T>,
    metadata: &ImageMetadata,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    write_png(&mut out, grid, metadata)
        .map_err(|source| CodecError::Encode { path: None, source })?;
    Ok(out)
}

fn write_png<W: Write, T: Sample>(
    writer: W,
    grid: &RgbaGrid<T>,
    metadata: &ImageMetadata,
) -> ImageResult<()> {
    let encoder =
        PngEncoder::new_with_quality(writer, metadata.compression.into(), metadata.filter.into());
    let color_type = T::color_type(metadata.color_layout);
    let (w, h) = (grid.width(), grid.height());
    match metadata.color_layout {
        ColorLayout::Rgba => encoder.write_image(grid.as_bytes(), w, h, color_type),
        ColorLayout::Rgb => {
            let rgb = grid.to_rgb();
            encoder.write_image(bytemuck::cast_slice(&rgb), w, h, color_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::canvas::Canvas;
    use crate::coords::Point;
    use crate::paint::Color;
    use crate::scene::{Figure, ImageSource};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("drawpp-{}-{name}", std::process::id()))
    }

    fn sample_canvas() -> Canvas {
        let mut c = Canvas::new(24, 16);
        let red = Color::rgb(0.8, 0.1, 0.1);
        c.add_drawable(Figure::rect(Point::new(2.0, 2.0), Point::new(12.0, 10.0), red));
        c.add_drawable(Figure::triangle(
            Point::new(6.0, 1.0),
            Point::new(22.0, 8.0),
            Point::new(9.0, 15.0),
            Color::new(0.1, 0.3, 0.9, 0.5),
        ));
        c.draw();
        c
    }

    fn assert_within_one(a: &Canvas, b: &Canvas) {
        for (x, y) in a.samples().iter().zip(b.samples()) {
            assert!((x - y).abs() <= 1.0 / 255.0 + 1e-6, "{x} vs {y}");
        }
    }

    // ── in memory ─────────────────────────────────────────────────────────

    #[test]
    fn bytes_round_trip_is_lossless_at_eight_bits() {
        let grid = sample_canvas().export_buffer();
        let png = encode_bytes(&grid, &ImageMetadata::default()).unwrap();
        assert_eq!(decode_bytes(&png).unwrap(), grid);
    }

    #[test]
    fn rgb_layout_decodes_opaque() {
        let grid = RgbaGrid::new(1, 1, vec![[10u8, 20, 30, 40]]);
        let meta = ImageMetadata { color_layout: ColorLayout::Rgb, ..Default::default() };
        let png = encode_bytes(&grid, &meta).unwrap();
        assert_eq!(decode_bytes(&png).unwrap().get(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn sixteen_bit_decodes_to_eight() {
        let grid = RgbaGrid::new(1, 1, vec![[65535u16, 0, 32896, 65535]]);
        let png = encode_bytes(&grid, &ImageMetadata::default()).unwrap();
        assert_eq!(decode_bytes(&png).unwrap().get(0, 0), [255, 0, 128, 255]);
    }

    #[test]
    fn compression_and_filter_do_not_change_pixels() {
        let grid = sample_canvas().export_buffer();
        let meta = ImageMetadata {
            compression: Compression::Best,
            filter: PngFilter::Paeth,
            ..Default::default()
        };
        let png = encode_bytes(&grid, &meta).unwrap();
        assert_eq!(decode_bytes(&png).unwrap(), grid);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_bytes(b"definitely not a png").unwrap_err();
        assert!(matches!(err, CodecError::Decode { path: None, .. }));
    }

    // ── files ─────────────────────────────────────────────────────────────

    #[test]
    fn canvas_round_trips_through_file() {
        let original = sample_canvas();
        let path = temp_path("round-trip.png");
        original.save_png(&path).unwrap();

        let (w, h) = (original.width(), original.height());
        let mut rebuilt = Canvas::with_background(w, h, Color::transparent());
        rebuilt.add_drawable(ImageSource::open(&path).unwrap());
        rebuilt.draw();
        let _ = fs::remove_file(&path);

        assert_within_one(&original, &rebuilt);
        assert!(original.compare(&rebuilt) < 1e-4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode(temp_path("does-not-exist.png")).unwrap_err();
        assert!(matches!(err, CodecError::Io { .. }));
        assert!(err.to_string().contains("does-not-exist.png"));
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let path = temp_path("no-such-dir").join("out.png");
        let grid = RgbaGrid::new(1, 1, vec![[0u8; 4]]);
        let err = encode(&path, &grid, &ImageMetadata::default()).unwrap_err();
        assert!(matches!(err, CodecError::Io { .. }));
    }
}
