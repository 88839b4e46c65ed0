// File: crates/tipline-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; also measures tip text for box sizing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use tipline_core::TextMeasure;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with `(x, y)` as the top-left of the line box, like SVG text with `dy="1em"`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.layout(text, size, color).paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextMeasure for TextShaper {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        // width of the longest line
        self.layout(text, font_size, skia::Color::from_argb(0, 0, 0, 0)).longest_line()
    }
}
