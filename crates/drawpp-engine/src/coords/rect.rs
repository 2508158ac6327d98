use super::Point;

/// Inclusive integer pixel box: every `(x, y)` with `x0 <= x <= x1` and
/// `y0 <= y <= y1`.
///
/// Coordinates are signed so a box can hang off the canvas before it is
/// clipped with [`intersect`](Self::intersect).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub const EMPTY: PixelRect = PixelRect::new(0, 0, -1, -1);

    #[inline]
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The whole `width × height` grid. Empty if either side is zero.
    #[inline]
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64 - 1, height as i64 - 1)
    }

    /// Pixels whose integer coordinates lie between two corners, in either
    /// order. Fractional corners shrink inward (`ceil` on the low side,
    /// `floor` on the high side). A non-finite corner gives an empty box.
    pub fn from_corners(p0: Point, p1: Point) -> Self {
        if !(p0.is_finite() && p1.is_finite()) {
            return Self::EMPTY;
        }
        let (lx, hx) = min_max(p0.x(), p1.x());
        let (ly, hy) = min_max(p0.y(), p1.y());
        Self::new(lx.ceil() as i64, ly.ceil() as i64, hx.floor() as i64, hy.floor() as i64)
    }

    /// Swaps corners so `x0 <= x1` and `y0 <= y1`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    #[inline]
    pub fn width(self) -> u64 {
        if self.is_empty() { 0 } else { (self.x1 - self.x0 + 1) as u64 }
    }

    #[inline]
    pub fn height(self) -> u64 {
        if self.is_empty() { 0 } else { (self.y1 - self.y0 + 1) as u64 }
    }

    #[inline]
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let r = PixelRect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

#[inline]
fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
