// File: crates/tipline-core/src/layout.rs
// Summary: Pure overlay layout: located samples + chart geometry -> positions, texts and activity flags.
// Notes:
// - All positions are in overlay space (origin at the chart's top-left margin corner).
// - The guide line and markers snap to the located sample's time, never the raw cursor.

use crate::axis::AxisText;
use crate::geometry::{clamp, ChartGeometry, Point, RectF};
use crate::label::{format_reading, DateFormatter, FormatValue, Granularity};
use crate::locate::{Located, Reading};
use crate::scale::{Time, XScale, YScale};
use crate::variant::{MissingCheck, SeriesSelection, TipPolicy};

/// Text width measurement, supplied by whatever surface draws the overlay.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed per-character estimate, for hosts without a text shaper.
#[derive(Clone, Copy, Debug)]
pub struct ApproxMeasure {
    pub em_per_char: f32,
}

impl Default for ApproxMeasure {
    fn default() -> Self { Self { em_per_char: 0.6 } }
}

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.em_per_char
    }
}

/// Side of the guide line the tip box sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipDirection {
    /// Box to the left of the guide line.
    Left,
    /// Box to the right of the guide line.
    Right,
}

impl TipDirection {
    fn flip(self) -> Self {
        match self {
            TipDirection::Left => TipDirection::Right,
            TipDirection::Right => TipDirection::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLine {
    pub x: f32,
    pub y1: f32,
    pub y2: f32,
}

/// One series row inside the tip box.
#[derive(Clone, Debug, PartialEq)]
pub struct TipRow {
    pub series: usize,
    pub text: String,
    pub active: bool,
    /// Top-left of the row text.
    pub text_at: Point,
    /// Center of the legend swatch next to the text.
    pub swatch: Point,
    /// Center of the marker on the series path; `None` when the row is inactive.
    pub marker: Option<Point>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Overlay-space origin on the chart surface (left/top margins).
    pub origin: Point,
    pub key: Time,
    pub index: usize,
    pub guide: GuideLine,
    pub tip_box: RectF,
    pub direction: TipDirection,
    pub date_text: String,
    /// Top-left of the date text.
    pub date_at: Point,
    pub rows: Vec<TipRow>,
    pub font_size: f32,
    pub swatch_radius: f32,
    pub marker_radius: f32,
}

/// Everything `compose` reads besides the located samples.
pub struct LayoutContext<'a, X: ?Sized, Y: ?Sized> {
    pub geometry: &'a ChartGeometry,
    pub x_scale: &'a X,
    pub y_scale: &'a Y,
    pub policy: TipPolicy,
    pub axis: &'a AxisText,
    /// Number formatter; usually `&axis.format`.
    pub format: &'a dyn FormatValue,
    pub dates: &'a DateFormatter,
    pub missing_text: &'a str,
    pub measure: &'a dyn TextMeasure,
}

/// Build the overlay for `located`. `cursor` is in hit-region (band-local) coordinates.
///
/// Returns `None` when the policy's missing-value check rejects the row; callers keep
/// showing the previous overlay in that case.
pub fn compose<X, Y>(located: &Located, cursor: Point, ctx: &LayoutContext<'_, X, Y>) -> Option<OverlayLayout>
where
    X: XScale + ?Sized,
    Y: YScale + ?Sized,
{
    let g = ctx.geometry;
    let readings: &[Reading] = match ctx.policy.selection {
        SeriesSelection::All => &located.readings,
        SeriesSelection::FirstOnly => &located.readings[..located.readings.len().min(1)],
    };

    // Checked against the whole located row, before selection narrows it.
    let rejected = match ctx.policy.missing {
        MissingCheck::SuppressRow => located.readings.iter().any(|r| !r.value.is_present()),
        MissingCheck::NonFiniteBand => located.readings.iter().any(|r| r.plotted.is_some_and(|v| !v.is_finite())),
    };
    if rejected {
        return None;
    }

    let active = activity(readings, located.stacked);

    let anchor = g.anchor_x(ctx.x_scale.to_px(located.key));
    let guide = GuideLine { x: anchor, y1: 0.0, y2: g.y_axis_height };

    let date_text = ctx.dates.format(located.key, Granularity::of_domain(ctx.x_scale.domain()));
    let texts: Vec<String> = readings
        .iter()
        .zip(&active)
        .map(|(r, &on)| {
            if on {
                format_reading(r.value, ctx.format, &ctx.axis.prefix, &ctx.axis.suffix, ctx.missing_text)
            } else {
                ctx.missing_text.to_string()
            }
        })
        .collect();

    let font = g.font_size;
    let line_h = font + 2.0;
    let r = g.legend_radius;
    let text_x = r * 2.0 + r / 1.5;
    let rows_w = texts
        .iter()
        .map(|t| text_x + ctx.measure.text_width(t, font))
        .fold(0.0f32, f32::max);
    let content_w = ctx.measure.text_width(&date_text, font).max(rows_w);
    let content_h = texts.len() as f32 * line_h + font;
    let pad = g.tip_padding;
    let box_w = content_w + pad.left + pad.right;
    let box_h = content_h + pad.top + pad.bottom;

    let (direction, left) = place_horizontal(anchor, box_w, cursor.x, g);
    let max_top = (g.computed_height - box_h).max(0.0);
    let top = clamp(g.tip_offset.vertical, 0.0, max_top);
    let tip_box = RectF::from_ltwh(left, top, box_w, box_h);

    let content = Point::new(left + pad.left, top + pad.top);
    let rows = texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let row = (i + 1) as f32;
            let marker = readings[i]
                .plotted
                .filter(|v| active[i] && v.is_finite())
                .map(|v| Point::new(anchor, ctx.y_scale.to_px(v)));
            TipRow {
                series: i,
                text,
                active: active[i],
                text_at: Point::new(content.x + text_x, content.y + row * line_h),
                swatch: Point::new(content.x + r, content.y + row * font * 1.13 + 9.0),
                marker,
            }
        })
        .collect();

    Some(OverlayLayout {
        origin: Point::new(g.margin.left as f32, g.margin.top as f32),
        key: located.key,
        index: located.index,
        guide,
        tip_box,
        direction,
        date_text,
        date_at: content,
        rows,
        font_size: font,
        swatch_radius: r,
        marker_radius: if r > 0.0 { r / 2.0 } else { 2.5 },
    })
}

/// Which rows are shown as active.
///
/// Unstacked: a row is active when its value is present. Stacked: row `i` is active only
/// when rows `0..=i` are all present, so a band drawn on top of a gap is not reported.
pub fn activity(readings: &[Reading], stacked: bool) -> Vec<bool> {
    if !stacked {
        return readings.iter().map(|r| r.value.is_present()).collect();
    }
    readings
        .iter()
        .scan(true, |all_below, r| {
            *all_below = *all_below && r.value.is_present();
            Some(*all_below)
        })
        .collect()
}

/// Pick the box side and its left edge.
///
/// The box points left once the cursor passes the middle of the plottable band. If that
/// side runs out of the frame the other side is tried, and if neither fits the box is
/// clamped into the frame.
fn place_horizontal(anchor: f32, box_w: f32, cursor_x: f32, g: &ChartGeometry) -> (TipDirection, f32) {
    let preferred = if cursor_x > g.tick_width / 2.0 { TipDirection::Left } else { TipDirection::Right };
    let left_of = |dir| match dir {
        TipDirection::Left => anchor - box_w - g.tip_offset.horizontal,
        TipDirection::Right => anchor + g.tip_offset.horizontal,
    };
    let fits = |x: f32| x >= 0.0 && x + box_w <= g.computed_width;

    for dir in [preferred, preferred.flip()] {
        let x = left_of(dir);
        if fits(x) {
            return (dir, x);
        }
    }
    let max_left = (g.computed_width - box_w).max(0.0);
    (preferred, clamp(left_of(preferred), 0.0, max_left))
}
