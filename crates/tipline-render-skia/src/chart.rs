// File: crates/tipline-render-skia/src/chart.rs
// Summary: Headless rendering of chart bands plus the hover overlay using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tipline_core::geometry::ChartGeometry;
use tipline_core::grid::linspace;
use tipline_core::types::{HEIGHT, WIDTH};
use tipline_core::{ChartData, OverlayFrame, OverlayLayout, XScale, YScale};
use tracing::debug;

use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Text is skipped when false (keeps pixel snapshots independent of system fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::dark(), draw_labels: true }
    }
}

/// What the renderer draws underneath the overlay.
pub struct ChartScene<'a, X: ?Sized, Y: ?Sized> {
    pub data: &'a ChartData,
    pub x_scale: &'a X,
    pub y_scale: &'a Y,
    pub geometry: &'a ChartGeometry,
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    pub fn shaper(&self) -> &TextShaper { &self.shaper }

    /// Render to PNG bytes.
    pub fn render_png_bytes<X, Y>(&self, scene: &ChartScene<'_, X, Y>, frame: &OverlayFrame<'_>, opts: &RenderOptions) -> Result<Vec<u8>>
    where
        X: XScale + ?Sized,
        Y: YScale + ?Sized,
    {
        let mut surface = self.draw(scene, frame, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png<X, Y>(
        &self,
        scene: &ChartScene<'_, X, Y>,
        frame: &OverlayFrame<'_>,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()>
    where
        X: XScale + ?Sized,
        Y: YScale + ?Sized,
    {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(scene, frame, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Render to a tightly packed RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_rgba8<X, Y>(&self, scene: &ChartScene<'_, X, Y>, frame: &OverlayFrame<'_>, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)>
    where
        X: XScale + ?Sized,
        Y: YScale + ?Sized,
    {
        let mut surface = self.draw(scene, frame, opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = opts.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, row_bytes))
    }

    fn draw<X, Y>(&self, scene: &ChartScene<'_, X, Y>, frame: &OverlayFrame<'_>, opts: &RenderOptions) -> Result<skia::Surface>
    where
        X: XScale + ?Sized,
        Y: YScale + ?Sized,
    {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let g = scene.geometry;
        canvas.save();
        canvas.translate((g.margin.left as f32, g.margin.top as f32));
        draw_grid(canvas, g, &opts.theme);
        match scene.data {
            ChartData::Unstacked(_) => draw_lines(canvas, scene, &opts.theme),
            ChartData::Stacked(_) => draw_bands(canvas, scene, &opts.theme),
        }
        if frame.visible {
            if let Some(layout) = frame.layout {
                self.draw_overlay(canvas, layout, opts);
            }
        }
        canvas.restore();
        Ok(surface)
    }

    fn draw_overlay(&self, canvas: &skia::Canvas, layout: &OverlayLayout, opts: &RenderOptions) {
        let theme = &opts.theme;

        let mut guide = skia::Paint::default();
        guide.set_anti_alias(true);
        guide.set_stroke_width(1.0);
        guide.set_color(theme.guide);
        let gl = layout.guide;
        canvas.draw_line((gl.x, gl.y1), (gl.x, gl.y2), &guide);

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        for row in &layout.rows {
            if let Some(m) = row.marker {
                dot.set_color(theme.series_color(row.series));
                canvas.draw_circle((m.x, m.y), layout.marker_radius, &dot);
            }
        }

        let b = layout.tip_box;
        let rect = skia::Rect::from_ltrb(b.left, b.top, b.right, b.bottom);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.tip_fill);
        canvas.draw_rect(rect, &fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.tip_border);
        canvas.draw_rect(rect, &border);

        for row in &layout.rows {
            dot.set_color(if row.active { theme.series_color(row.series) } else { theme.tip_text_inactive });
            canvas.draw_circle((row.swatch.x, row.swatch.y), layout.swatch_radius, &dot);
        }

        if !opts.draw_labels {
            return;
        }
        let size = layout.font_size;
        self.shaper.draw_top_left(canvas, &layout.date_text, layout.date_at.x, layout.date_at.y, size, theme.tip_text);
        for row in &layout.rows {
            let color = if row.active { theme.tip_text } else { theme.tip_text_inactive };
            self.shaper.draw_top_left(canvas, &row.text, row.text_at.x, row.text_at.y, size, color);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, g: &ChartGeometry, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, r) = (g.plot_left(), g.plot_left() + g.tick_width);
    let (t, b) = (0.0, g.computed_height);
    // verticals
    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

/// One polyline per series; a missing value breaks the line.
fn draw_lines<X, Y>(canvas: &skia::Canvas, scene: &ChartScene<'_, X, Y>, theme: &Theme)
where
    X: XScale + ?Sized,
    Y: YScale + ?Sized,
{
    let ChartData::Unstacked(table) = scene.data else { return };
    let g = scene.geometry;
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);

    for si in 0..table.width() {
        let mut path = skia::Path::new();
        let mut pen_down = false;
        for d in table.rows() {
            match d.series[si].number() {
                Some(v) => {
                    let p = (g.anchor_x(scene.x_scale.to_px(d.key)), scene.y_scale.to_px(v));
                    if pen_down { path.line_to(p); } else { path.move_to(p); }
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        stroke.set_color(theme.series_color(si));
        canvas.draw_path(&path, &stroke);
    }
}

/// One filled band per stacked series: top edge forward, baseline back.
fn draw_bands<X, Y>(canvas: &skia::Canvas, scene: &ChartScene<'_, X, Y>, theme: &Theme)
where
    X: XScale + ?Sized,
    Y: YScale + ?Sized,
{
    let ChartData::Stacked(stack) = scene.data else { return };
    let g = scene.geometry;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (si, band) in stack.series().iter().enumerate() {
        let Some(first) = band.first() else { continue };
        let px = |x: f64| g.anchor_x(scene.x_scale.to_px(x));
        let mut path = skia::Path::new();
        path.move_to((px(first.x), scene.y_scale.to_px(first.top())));
        for s in band.iter().skip(1) {
            path.line_to((px(s.x), scene.y_scale.to_px(s.top())));
        }
        for s in band.iter().rev() {
            path.line_to((px(s.x), scene.y_scale.to_px(s.y0)));
        }
        path.close();
        fill.set_color(theme.band_fill(si));
        canvas.draw_path(&path, &fill);
    }
}
