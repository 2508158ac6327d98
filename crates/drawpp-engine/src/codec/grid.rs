use image::ExtendedColorType;

use super::ColorLayout;

/// Channel type a grid can be encoded from.
pub trait Sample: bytemuck::Pod {
    /// Encoder color type for this sample width and `layout`.
    fn color_type(layout: ColorLayout) -> ExtendedColorType;
}

impl Sample for u8 {
    fn color_type(layout: ColorLayout) -> ExtendedColorType {
        match layout {
            ColorLayout::Rgba => ExtendedColorType::Rgba8,
            ColorLayout::Rgb => ExtendedColorType::Rgb8,
        }
    }
}

impl Sample for u16 {
    fn color_type(layout: ColorLayout) -> ExtendedColorType {
        match layout {
            ColorLayout::Rgba => ExtendedColorType::Rgba16,
            ColorLayout::Rgb => ExtendedColorType::Rgb16,
        }
    }
}

/// Row-major `width × height` RGBA samples, the unit exchanged with the
/// codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaGrid<T = u8> {
    width: u32,
    height: u32,
    pixels: Vec<[T; 4]>,
}

impl<T: Copy> RgbaGrid<T> {
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[T; 4]>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "RgbaGrid::new: pixel count does not match {width}x{height}"
        );
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[[T; 4]] {
        &self.pixels
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<[T; 4]> {
        self.pixels
    }

    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [T; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Same samples with the alpha channel dropped.
    pub fn to_rgb(&self) -> Vec<[T; 3]> {
        self.pixels.iter().map(|p| [p[0], p[1], p[2]]).collect()
    }
}

impl<T: Sample> RgbaGrid<T> {
    /// Samples as native-endian bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
