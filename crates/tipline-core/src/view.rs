// File: crates/tipline-core/src/view.rs
// Summary: Visible ranges derived from chart data, and the scales a host builds from them.

use crate::axis::ScaleKind;
use crate::geometry::ChartGeometry;
use crate::scale::{TimeScale, ValueScale};
use crate::series::ChartData;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents of `data` with a 2% vertical margin. Stacked data uses band bottoms and tops.
    pub fn from_data(data: &ChartData) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        match data {
            ChartData::Unstacked(table) => {
                for d in table.rows() {
                    x_min = x_min.min(d.key);
                    x_max = x_max.max(d.key);
                    for v in d.series.iter().filter_map(|v| v.number()) {
                        y_min = y_min.min(v);
                        y_max = y_max.max(v);
                    }
                }
            }
            ChartData::Stacked(stack) => {
                for band in stack.series() {
                    for s in band {
                        x_min = x_min.min(s.x);
                        x_max = x_max.max(s.x);
                        y_min = y_min.min(s.y0).min(s.top());
                        y_max = y_max.max(s.y0).max(s.top());
                    }
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    /// Band-local time scale: `[x_min, x_max]` onto `[0, tick_width]`.
    pub fn time_scale(&self, g: &ChartGeometry) -> TimeScale {
        TimeScale::new(self.x_min, self.x_max, 0.0, g.tick_width)
    }

    /// Value scale onto `[0, y_axis_height]` in overlay space.
    pub fn value_scale(&self, g: &ChartGeometry, kind: ScaleKind) -> ValueScale {
        match kind {
            ScaleKind::Linear => ValueScale::new_linear(0.0, g.y_axis_height, self.y_min, self.y_max),
            ScaleKind::Log10 => ValueScale::new_log10(0.0, g.y_axis_height, self.y_min, self.y_max),
        }
    }
}
