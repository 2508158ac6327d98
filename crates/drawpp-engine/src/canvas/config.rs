use crate::codec::ImageMetadata;
use crate::paint::{BlendMode, ChannelClamp, Color};

/// Construction parameters for a [`Canvas`](super::Canvas).
///
/// ```
/// use drawpp_engine::canvas::{Canvas, CanvasConfig};
/// use drawpp_engine::paint::{BlendMode, Color};
///
/// let canvas = Canvas::from_config(
///     CanvasConfig::new(64, 32)
///         .background(Color::transparent())
///         .blend_mode(BlendMode::Over),
/// );
/// assert_eq!(canvas.width(), 64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Initial value of every pixel. Written as-is, not blended.
    pub background: Color,
    pub blend_mode: BlendMode,
    pub clamp: ChannelClamp,
    /// Stored untouched and forwarded to the encoder on export.
    pub metadata: ImageMetadata,
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::white(),
            blend_mode: BlendMode::default(),
            clamp: ChannelClamp::default(),
            metadata: ImageMetadata::default(),
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    pub fn clamp(mut self, clamp: ChannelClamp) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn metadata(mut self, metadata: ImageMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
