// File: crates/tipline-core/tests/svg.rs
// Purpose: SVG overlay fragment: class names, active toggling and text escaping.

use tipline_core::{
    compose, svg, ApproxMeasure, AxisText, ChartGeometry, ChartKind, DateFormatter, LayoutContext, Located,
    OverlayFrame, OverlayLayout, Point, Reading, TimeScale, Value, ValueScale,
};

fn layout(kind: ChartKind, vals: &[Option<f64>], axis: &AxisText) -> OverlayLayout {
    let g = ChartGeometry::default();
    let x = TimeScale::new(0.0, 100.0, 0.0, g.tick_width);
    let y = ValueScale::new_linear(0.0, g.y_axis_height, 0.0, 100.0);
    let dates = DateFormatter::default();
    let ctx = LayoutContext {
        geometry: &g,
        x_scale: &x,
        y_scale: &y,
        policy: kind.policy().expect("interactive"),
        axis,
        format: &axis.format,
        dates: &dates,
        missing_text: "n/a",
        measure: &ApproxMeasure::default(),
    };
    let located = Located {
        index: 0,
        key: 50.0,
        readings: vals.iter().map(|&v| Reading { value: Value::from(v), plotted: v }).collect(),
        stacked: kind.policy().is_some_and(|p| p.stacked.is_some()),
    };
    compose(&located, Point::new(100.0, 100.0), &ctx).expect("not suppressed")
}

#[test]
fn empty_frame_is_an_empty_group() {
    let frame = OverlayFrame { visible: false, layout: None };
    assert_eq!(svg::render_overlay(&frame, "ct-"), r#"<g class="ct-tip"></g>"#);
}

#[test]
fn visible_frame_carries_prefixed_classes() {
    let l = layout(ChartKind::StackedArea, &[Some(1.0), None], &AxisText::default());
    let out = svg::render_overlay(&OverlayFrame { visible: true, layout: Some(&l) }, "ct-");

    assert!(out.starts_with(r#"<g class="ct-tip" transform="translate(72,24)">"#), "{out}");
    assert!(out.contains(r#"class="ct-tip_line-x ct-active""#));
    assert!(out.contains(r#"<line x1="488" x2="488""#));
    assert!(out.contains(r#"class="ct-tip_box ct-active""#));
    assert!(out.contains(r#"class="ct-tip_rect""#));
    assert!(out.contains(r#"class="ct-tip_text-date""#));
    assert!(out.contains(r#"class="ct-tip_text-group ct-tip_text-group-0 ct-active""#));
    // inactive rows keep their nodes without the active class
    assert!(out.contains(r#"class="ct-tip_text-group ct-tip_text-group-1">"#));
    assert!(out.contains(r#"class="ct-tip_circle ct-tip_circle-1""#));
    assert!(out.contains(r#">n/a</text>"#));
    assert!(out.contains(r#"class="ct-tip_path-circle ct-tip_path-circle-0 ct-active""#));
    assert!(!out.contains("ct-tip_path-circle-1"));
    assert!(out.ends_with("</g></g>"));
}

#[test]
fn hidden_frame_drops_active_classes() {
    let l = layout(ChartKind::Line, &[Some(1.0)], &AxisText::default());
    let out = svg::render_overlay(&OverlayFrame { visible: false, layout: Some(&l) }, "wp-");
    assert!(out.contains(r#"class="wp-tip_box""#));
    assert!(!out.contains("wp-active"));
}

#[test]
fn text_is_escaped() {
    let axis = AxisText::new("R&D <", "\"", Default::default());
    let l = layout(ChartKind::Line, &[Some(3.0)], &axis);
    let out = svg::render_overlay(&OverlayFrame { visible: true, layout: Some(&l) }, "ct-");
    assert!(out.contains("R&amp;D &lt;3&quot;</text>"), "{out}");
}
