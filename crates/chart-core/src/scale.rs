// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-page transforms for the X and Y axes.

/// Maps a data interval onto a page interval. `px_end` may be smaller than
/// `px_start` (the Y axis grows upward on a page that grows downward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + (t as f32) * (self.px_end - self.px_start)
    }
}
