use super::Color;

/// Compositing law used when a source color is blended into a canvas.
///
/// Both laws mix RGB the same way (`dst * (1 - src.a) + src * src.a`); they
/// differ only in the resulting alpha.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BlendMode {
    /// Strict alpha-over: `a = src.a + dst.a * (1 - src.a)`.
    #[default]
    Over,
    /// Maximal coverage: `a = max(dst.a, src.a)`.
    ///
    /// Kept for canvases that must reproduce the old multi-drawable
    /// composite. Not associative, so layered results depend on grouping.
    MaxAlpha,
}

/// Alpha-over composite of `src` onto `dst`.
#[inline]
pub fn blend_over(dst: Color, src: Color) -> Color {
    Blender::new(src, BlendMode::Over).apply(dst)
}

/// Composite of `src` onto `dst` under `mode`.
#[inline]
pub fn blend(dst: Color, src: Color, mode: BlendMode) -> Color {
    Blender::new(src, mode).apply(dst)
}

/// A source color with its blend coefficients computed once.
///
/// Row and block fills build one `Blender` and apply it to every covered
/// pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Blender {
    mode: BlendMode,
    src_a: f32,
    /// `1 - src.a`
    keep: f32,
    /// `src.rgb * src.a`
    weighted: [f32; 3],
}

impl Blender {
    #[inline]
    pub fn new(src: Color, mode: BlendMode) -> Self {
        let a = src.a;
        Self {
            mode,
            src_a: a,
            keep: 1.0 - a,
            weighted: [src.r * a, src.g * a, src.b * a],
        }
    }

    /// Whether applying this blender leaves every destination unchanged.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.src_a == 0.0
    }

    #[inline]
    pub fn apply(&self, dst: Color) -> Color {
        let a = match self.mode {
            BlendMode::Over => self.src_a + dst.a * self.keep,
            BlendMode::MaxAlpha => dst.a.max(self.src_a),
        };
        Color::new(
            dst.r * self.keep + self.weighted[0],
            dst.g * self.keep + self.weighted[1],
            dst.b * self.keep + self.weighted[2],
            a,
        )
    }
}
