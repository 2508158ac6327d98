use core::ops::Mul;

/// Linear straight-alpha RGBA color.
///
/// Channels are nominally in `[0, 1]`. Construction does not clamp; whether
/// out-of-range values survive a write into a canvas is decided by the
/// canvas's [`ChannelClamp`] policy.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from 8-bit channels (`0`–`255`).
    #[inline]
    pub fn from_u8(rgba: [u8; 4]) -> Self {
        Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }

    /// Quantizes to 8-bit channels, rounding to nearest. Values outside
    /// `[0, 1]` saturate.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        [
            quantize(self.r, 255.0) as u8,
            quantize(self.g, 255.0) as u8,
            quantize(self.b, 255.0) as u8,
            quantize(self.a, 255.0) as u8,
        ]
    }

    /// Quantizes to 16-bit channels, rounding to nearest.
    #[inline]
    pub fn to_u16(self) -> [u16; 4] {
        [
            quantize(self.r, 65535.0) as u16,
            quantize(self.g, 65535.0) as u16,
            quantize(self.b, 65535.0) as u16,
            quantize(self.a, 65535.0) as u16,
        ]
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Sum of the four channels. Used by the canvas similarity score.
    #[inline]
    pub fn channel_sum(self) -> f64 {
        self.r as f64 + self.g as f64 + self.b as f64 + self.a as f64
    }
}

#[inline]
fn quantize(v: f32, max: f32) -> f32 {
    (v.clamp(0.0, 1.0) * max).round()
}

/// Channel-wise product.
impl Mul for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

/// Scales every channel, alpha included.
impl Mul<f32> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

/// What happens to channel values outside `[0, 1]` when they are written
/// into a canvas.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ChannelClamp {
    /// Clamp every channel to `[0, 1]`.
    #[default]
    Clamp,
    /// Store values unchanged.
    Passthrough,
}

impl ChannelClamp {
    #[inline]
    pub fn apply(self, color: Color) -> Color {
        match self {
            ChannelClamp::Clamp => color.clamped(),
            ChannelClamp::Passthrough => color,
        }
    }
}
