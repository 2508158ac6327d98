use super::{Canvas, CHANNELS};

impl Canvas {
    /// Similarity score against `other`; `0.0` means identical buffers.
    ///
    /// Each pixel is reduced to the sum of its four channels. The score is
    /// the sum of squared differences of those sums, divided by
    /// `sqrt(Σa² · Σb²)`. It is not a perceptual metric and is dominated by
    /// bright, opaque regions.
    ///
    /// The score is scale-invariant, so it is the same whether channels are
    /// read as `[0, 1]` floats or as `0..=255` bytes.
    ///
    /// Two all-zero buffers score `0.0`; exactly one all-zero buffer scores
    /// `f64::INFINITY`.
    ///
    /// # Panics
    /// Panics if the canvases differ in width or height.
    pub fn compare(&self, other: &Canvas) -> f64 {
        assert!(
            self.width == other.width && self.height == other.height,
            "compare: canvas sizes differ ({}x{} vs {}x{})",
            self.width,
            self.height,
            other.width,
            other.height
        );

        let mut sum_sq_diff = 0.0f64;
        let mut sum_sq_a = 0.0f64;
        let mut sum_sq_b = 0.0f64;

        for (pa, pb) in self.buf.chunks_exact(CHANNELS).zip(other.buf.chunks_exact(CHANNELS)) {
            let sa = channel_sum(pa);
            let sb = channel_sum(pb);
            let diff = sa - sb;
            sum_sq_diff += diff * diff;
            sum_sq_a += sa * sa;
            sum_sq_b += sb * sb;
        }

        let norm = (sum_sq_a * sum_sq_b).sqrt();
        if norm == 0.0 {
            return if sum_sq_diff == 0.0 { 0.0 } else { f64::INFINITY };
        }
        sum_sq_diff / norm
    }
}

#[inline]
fn channel_sum(px: &[f32]) -> f64 {
    px.iter().map(|&c| c as f64).sum()
}
