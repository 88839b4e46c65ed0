// File: crates/tipline-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms read by the hover engine.

/// Time coordinate: epoch milliseconds.
pub type Time = f64;

/// Horizontal scale: time to pixel, invertible.
pub trait XScale {
    fn to_px(&self, t: Time) -> f32;
    fn from_px(&self, px: f32) -> Time;
    /// Visible time domain `(start, end)`.
    fn domain(&self) -> (Time, Time);
}

/// Vertical scale: value to pixel.
pub trait YScale {
    fn to_px(&self, v: f64) -> f32;
}

/// Linear time scale mapping `[t0, t1]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub t0: Time,
    pub t1: Time,
    pub left_px: f32,
    pub right_px: f32,
}

impl TimeScale {
    pub fn new(t0: Time, t1: Time, left_px: f32, right_px: f32) -> Self {
        let t1 = if (t1 - t0).abs() < 1e-9 { t0 + 1.0 } else { t1 };
        let right_px = if (right_px - left_px).abs() < 1e-6 { left_px + 1.0 } else { right_px };
        Self { t0, t1, left_px, right_px }
    }

    #[inline]
    fn px_per_ms(&self) -> f64 {
        (self.right_px - self.left_px) as f64 / (self.t1 - self.t0)
    }
}

impl XScale for TimeScale {
    #[inline]
    fn to_px(&self, t: Time) -> f32 {
        self.left_px + ((t - self.t0) * self.px_per_ms()) as f32
    }
    #[inline]
    fn from_px(&self, px: f32) -> Time {
        self.t0 + (px - self.left_px) as f64 / self.px_per_ms()
    }
    fn domain(&self) -> (Time, Time) { (self.t0, self.t1) }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min, log_max }
    }
}

impl YScale for ValueScale {
    #[inline]
    fn to_px(&self, y: f64) -> f32 {
        if self.log {
            let yy = y.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            self.bottom_px - ((yy - self.log_min) / span) as f32 * (self.bottom_px - self.top_px)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
        }
    }
}
