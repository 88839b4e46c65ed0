// File: crates/tipline-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart bands and the hover overlay.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub guide: skia::Color,
    pub tip_fill: skia::Color,
    pub tip_border: skia::Color,
    pub tip_text: skia::Color,
    /// Text and swatches of rows showing the placeholder.
    pub tip_text_inactive: skia::Color,
    pub series: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            guide: skia::Color::from_argb(255, 150, 150, 160),
            tip_fill: skia::Color::from_argb(235, 30, 30, 34),
            tip_border: skia::Color::from_argb(255, 90, 90, 100),
            tip_text: skia::Color::from_argb(255, 235, 235, 245),
            tip_text_inactive: skia::Color::from_argb(255, 120, 120, 130),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            guide: skia::Color::from_argb(255, 100, 100, 110),
            tip_fill: skia::Color::from_argb(240, 255, 255, 255),
            tip_border: skia::Color::from_argb(255, 200, 200, 210),
            tip_text: skia::Color::from_argb(255, 20, 20, 30),
            tip_text_inactive: skia::Color::from_argb(255, 150, 150, 160),
            series: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 120, 80, 200),
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            ],
        }
    }

    /// Color of series `i`, cycling through the palette.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.series[i % self.series.len()]
    }

    /// Translucent fill for stacked bands.
    pub fn band_fill(&self, i: usize) -> skia::Color {
        self.series_color(i).with_a(150)
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
