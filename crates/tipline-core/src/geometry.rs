// File: crates/tipline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and the chart geometry supplied by the renderer.

use serde::{Deserialize, Serialize};

use crate::types::{Insets, Padding, TipOffset, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Chart geometry computed by the rendering layer. The hover engine only reads it.
///
/// Overlay space has its origin at `(margin.left, margin.top)` of the chart surface.
/// The plottable band (and the pointer hit region) spans
/// `[plot_left(), plot_left() + tick_width]` in overlay space, and the x scale's
/// pixel range is band-local: `[0, tick_width]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    pub computed_width: f32,
    pub computed_height: f32,
    /// Width of the plottable band.
    pub tick_width: f32,
    /// Width of the y-axis label column.
    pub label_width: f32,
    pub y_axis_padding_right: f32,
    pub y_axis_height: f32,
    pub margin: Insets,
    pub tip_padding: Padding,
    pub tip_offset: TipOffset,
    pub font_size: f32,
    /// Radius of the legend swatch; 0 when the chart has no legend.
    pub legend_radius: f32,
}

impl ChartGeometry {
    /// Geometry for a surface of `width` x `height` with the given margins and label column.
    pub fn for_surface(width: i32, height: i32, margin: Insets, label_width: f32) -> Self {
        let computed_width = (width - margin.hsum() as i32).max(1) as f32;
        let computed_height = (height - margin.vsum() as i32).max(1) as f32;
        let y_axis_padding_right = 8.0;
        Self {
            computed_width,
            computed_height,
            tick_width: (computed_width - label_width - y_axis_padding_right).max(1.0),
            label_width,
            y_axis_padding_right,
            y_axis_height: computed_height,
            margin,
            tip_padding: Padding::default(),
            tip_offset: TipOffset::default(),
            font_size: 12.0,
            legend_radius: 5.0,
        }
    }

    /// Left edge of the plottable band in overlay space.
    pub fn plot_left(&self) -> f32 {
        self.label_width + self.y_axis_padding_right
    }

    /// Convert an x-scale pixel into overlay space.
    #[inline]
    pub fn anchor_x(&self, scale_px: f32) -> f32 {
        scale_px + self.plot_left()
    }

    /// The frame the tip box must stay inside, in overlay space.
    pub fn frame(&self) -> RectF {
        RectF::from_ltwh(0.0, 0.0, self.computed_width, self.computed_height)
    }

    /// Pointer hit region (the plottable band), in overlay space.
    pub fn hit_region(&self) -> RectF {
        RectF::from_ltwh(self.plot_left(), 0.0, self.tick_width, self.computed_height)
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::for_surface(WIDTH, HEIGHT, Insets::default(), 40.0)
    }
}
