//! The raster buffer and its ordered list of drawables.
//!
//! Responsibilities:
//! - own a fixed-size `width × height` RGBA buffer (normalized `f32` samples)
//! - expose bounds-checked blend and overwrite primitives
//! - run drawables in registration order (painter's algorithm)
//! - export the buffer to the codec and score similarity between canvases
//!
//! Out-of-range pixel access and mismatched sizes in [`Canvas::compare`]
//! are programmer errors and panic.

mod compare;
mod config;

pub use config::CanvasConfig;

use core::fmt;
use std::path::Path;
use std::rc::Rc;

use crate::codec::{self, BitDepth, CodecError, ImageMetadata, RgbaGrid};
use crate::coords::PixelRect;
use crate::paint::{BlendMode, Blender, ChannelClamp, Color};
use crate::scene::Drawable;

/// Samples per pixel in the buffer.
pub const CHANNELS: usize = 4;

/// A fixed-size RGBA raster plus the drawables composited onto it.
///
/// Cloning deep-copies the pixel buffer; drawables are shared.
#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Row-major, `(y * width + x) * CHANNELS + channel`.
    buf: Vec<f32>,
    drawables: Vec<Rc<dyn Drawable>>,
    blend_mode: BlendMode,
    clamp: ChannelClamp,
    metadata: ImageMetadata,
}

impl Canvas {
    /// Opaque white canvas with default blend and clamp policies.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(CanvasConfig::new(width, height))
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self::from_config(CanvasConfig::new(width, height).background(background))
    }

    pub fn from_config(config: CanvasConfig) -> Self {
        let CanvasConfig { width, height, background, blend_mode, clamp, metadata } = config;

        let bg = clamp.apply(background);
        let len = width as usize * height as usize;
        let mut buf = Vec::with_capacity(len * CHANNELS);
        for _ in 0..len {
            buf.extend_from_slice(&[bg.r, bg.g, bg.b, bg.a]);
        }

        log::debug!("canvas {width}x{height} created, background {bg:?}");

        Self {
            width,
            height,
            buf,
            drawables: Vec::new(),
            blend_mode,
            clamp,
            metadata,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Every addressable pixel.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::of_size(self.width, self.height)
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    #[inline]
    pub fn clamp(&self) -> ChannelClamp {
        self.clamp
    }

    #[inline]
    pub fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    /// Raw samples, row-major RGBA.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.buf
    }

    // ── drawables ─────────────────────────────────────────────────────────

    /// Appends a drawable. Later drawables composite on top of earlier ones.
    pub fn add_drawable(&mut self, drawable: impl Drawable + 'static) {
        self.add_shared(Rc::new(drawable));
    }

    /// Appends a drawable that may also be registered on other canvases.
    pub fn add_shared(&mut self, drawable: Rc<dyn Drawable>) {
        self.drawables.push(drawable);
    }

    pub fn drawables(&self) -> &[Rc<dyn Drawable>] {
        &self.drawables
    }

    pub fn clear_drawables(&mut self) {
        self.drawables.clear();
    }

    /// Paints every registered drawable in registration order.
    ///
    /// Each drawable reads the buffer as left by the ones before it. Calling
    /// `draw` twice composites everything twice.
    pub fn draw(&mut self) {
        let drawables = std::mem::take(&mut self.drawables);
        log::debug!("drawing {} drawable(s) onto {}x{}", drawables.len(), self.width, self.height);

        for (i, drawable) in drawables.iter().enumerate() {
            log::trace!("painting drawable #{i}");
            drawable.paint(self);
        }

        // Keep anything a drawable registered while painting, after the originals.
        let added = std::mem::replace(&mut self.drawables, drawables);
        self.drawables.extend(added);
    }

    // ── pixel access ──────────────────────────────────────────────────────

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Buffer range covering pixels `x1..=x2` of row `y`, corners in either order.
    fn row_range(&self, x1: u32, x2: u32, y: u32) -> core::ops::Range<usize> {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = self.offset(lo, y);
        let end = self.offset(hi, y) + CHANNELS;
        start..end
    }

    #[inline]
    fn load(&self, i: usize) -> Color {
        let s = &self.buf[i..i + CHANNELS];
        Color::new(s[0], s[1], s[2], s[3])
    }

    #[inline]
    fn store(&mut self, i: usize, color: Color) {
        let c = self.clamp.apply(color);
        self.buf[i..i + CHANNELS].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    /// Current color at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.load(self.offset(x, y))
    }

    /// Blends `color` into `(x, y)` with the canvas's blend mode.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.offset(x, y);
        let blended = Blender::new(color, self.blend_mode).apply(self.load(i));
        self.store(i, blended);
    }

    /// Replaces `(x, y)` with `color`, ignoring both alphas.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.offset(x, y);
        self.store(i, color);
    }

    /// Blends `color` across pixels `x1..=x2` of row `y`.
    pub fn fill_blend_row(&mut self, x1: u32, x2: u32, y: u32, color: Color) {
        let range = self.row_range(x1, x2, y);
        let blender = Blender::new(color, self.blend_mode);
        if blender.is_noop() {
            return;
        }
        let clamp = self.clamp;
        for px in self.buf[range].chunks_exact_mut(CHANNELS) {
            let c = clamp.apply(blender.apply(Color::new(px[0], px[1], px[2], px[3])));
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Blends `color` across the block `x1..=x2 × y1..=y2`.
    pub fn fill_blend(&mut self, x1: u32, x2: u32, y1: u32, y2: u32, color: Color) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for y in lo..=hi {
            self.fill_blend_row(x1, x2, y, color);
        }
    }

    /// Overwrites pixels `x1..=x2` of row `y` with `color`.
    pub fn fill_overwrite_row(&mut self, x1: u32, x2: u32, y: u32, color: Color) {
        let range = self.row_range(x1, x2, y);
        let c = self.clamp.apply(color);
        for px in self.buf[range].chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Overwrites the block `x1..=x2 × y1..=y2` with `color`.
    pub fn fill_overwrite(&mut self, x1: u32, x2: u32, y1: u32, y2: u32, color: Color) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for y in lo..=hi {
            self.fill_overwrite_row(x1, x2, y, color);
        }
    }

    /// Resets every pixel to `color` without blending.
    pub fn clear(&mut self, color: Color) {
        let c = self.clamp.apply(color);
        for px in self.buf.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    // ── export ────────────────────────────────────────────────────────────

    /// Quantizes the buffer to 8-bit RGBA.
    pub fn export_buffer(&self) -> RgbaGrid<u8> {
        let pixels = self.colors().map(Color::to_u8).collect();
        RgbaGrid::new(self.width, self.height, pixels)
    }

    /// Quantizes the buffer to 16-bit RGBA.
    pub fn export_buffer16(&self) -> RgbaGrid<u16> {
        let pixels = self.colors().map(Color::to_u16).collect();
        RgbaGrid::new(self.width, self.height, pixels)
    }

    /// Writes the buffer to a PNG file using the canvas's metadata.
    ///
    /// On error the file at `path` must not be treated as valid output.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let path = path.as_ref();
        log::debug!("exporting {}x{} canvas to {}", self.width, self.height, path.display());
        match self.metadata.bit_depth {
            BitDepth::Eight => codec::encode(path, &self.export_buffer(), &self.metadata),
            BitDepth::Sixteen => codec::encode(path, &self.export_buffer16(), &self.metadata),
        }
    }

    fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.buf
            .chunks_exact(CHANNELS)
            .map(|s| Color::new(s[0], s[1], s[2], s[3]))
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("drawables", &self.drawables.len())
            .field("blend_mode", &self.blend_mode)
            .field("clamp", &self.clamp)
            .field("metadata", &self.metadata)
            .finish()
    }
}
