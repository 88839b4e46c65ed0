// File: crates/tipline-core/src/svg.rs
// Summary: SVG adapter: writes an overlay frame as a `<g>` fragment using the chart's class prefix.

use std::fmt::Write as _;

use crate::session::OverlayFrame;

/// Render `frame` as an SVG group. Inactive elements keep their nodes and only lose the
/// `{prefix}active` class, so a page can toggle visibility with CSS.
pub fn render_overlay(frame: &OverlayFrame<'_>, prefix: &str) -> String {
    let mut out = String::new();
    let Some(layout) = frame.layout else {
        let _ = write!(out, r#"<g class="{prefix}tip"></g>"#);
        return out;
    };
    let active = |on: bool| if on && frame.visible { format!(" {prefix}active") } else { String::new() };
    let shown = active(true);

    let _ = write!(
        out,
        r#"<g class="{prefix}tip" transform="translate({},{})">"#,
        num(layout.origin.x),
        num(layout.origin.y)
    );
    let _ = write!(
        out,
        r#"<g class="{prefix}tip_line-x{shown}"><line x1="{x}" x2="{x}" y1="{}" y2="{}"/></g>"#,
        num(layout.guide.y1),
        num(layout.guide.y2),
        x = num(layout.guide.x),
    );

    let b = layout.tip_box;
    let _ = write!(
        out,
        r#"<g class="{prefix}tip_box{shown}"><rect class="{prefix}tip_rect" x="{}" y="{}" width="{}" height="{}"/>"#,
        num(b.left),
        num(b.top),
        num(b.width()),
        num(b.height())
    );
    let _ = write!(
        out,
        r#"<text class="{prefix}tip_text-date" x="{}" y="{}" dy="1em">{}</text>"#,
        num(layout.date_at.x),
        num(layout.date_at.y),
        escape(&layout.date_text)
    );
    for row in &layout.rows {
        let i = row.series;
        let _ = write!(
            out,
            r#"<g class="{prefix}tip_text-group {prefix}tip_text-group-{i}{}">"#,
            active(row.active)
        );
        let _ = write!(
            out,
            r#"<circle class="{prefix}tip_circle {prefix}tip_circle-{i}" r="{}" cx="{}" cy="{}"/>"#,
            num(layout.swatch_radius),
            num(row.swatch.x),
            num(row.swatch.y)
        );
        let _ = write!(
            out,
            r#"<text class="{prefix}tip_text {prefix}tip_text-{i}" x="{}" y="{}" dy="1em">{}</text></g>"#,
            num(row.text_at.x),
            num(row.text_at.y),
            escape(&row.text)
        );
    }
    out.push_str("</g>");

    let _ = write!(out, r#"<g class="{prefix}tip_path-circle-group{shown}">"#);
    for row in &layout.rows {
        let Some(m) = row.marker else { continue };
        let _ = write!(
            out,
            r#"<circle class="{prefix}tip_path-circle {prefix}tip_path-circle-{}{}" r="{}" cx="{}" cy="{}"/>"#,
            row.series,
            active(row.active),
            num(layout.marker_radius),
            num(m.x),
            num(m.y)
        );
    }
    out.push_str("</g></g>");
    out
}

/// Two decimals, trailing zeros dropped.
fn num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
