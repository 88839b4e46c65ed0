// File: crates/demo/src/main.rs
// Summary: Demo loads a time-series CSV, mounts a hover engine, sweeps a cursor across the plot
// and writes one PNG + SVG per frame, then shows leave and idle expiry.
// Usage: tipline-demo [data.csv] [line|multiline|area|stacked-area|stream|column] [tips.json]
// Env: TIPLINE_THEME=dark|light, RUST_LOG=tipline_core=trace for per-move logs.

mod load;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tipline_core::grid::sweep;
use tipline_core::types::Insets;
use tipline_core::{
    stack_layout, svg, ChartData, ChartGeometry, ChartKind, HoverEngine, TipsConfig, ViewState,
};
use tipline_render_skia::{theme, ChartScene, RenderOptions, SkiaRenderer, TextShaper};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const FRAMES: usize = 8;
const FRAME_STEP: Duration = Duration::from_millis(40);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/data/sample_series.csv".to_string());
    let kind_arg = args.next().unwrap_or_else(|| "line".to_string());
    let config = match args.next() {
        Some(p) => TipsConfig::from_path(&p).with_context(|| format!("loading config {p}"))?,
        None => TipsConfig::default(),
    };

    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    let kind = parse_kind(&kind_arg)?;
    let (names, table) = load::load_series_csv(&path)?;
    info!(rows = table.len(), series = names.len(), kind = kind.name(), "loaded");

    let theme_name = std::env::var("TIPLINE_THEME").unwrap_or_else(|_| "dark".to_string());
    let opts = RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() };
    let geometry = ChartGeometry::for_surface(opts.width, opts.height, Insets::default(), 40.0);

    // Stack up front so the value scale covers band tops.
    let data = match kind.policy().and_then(|p| p.stacked) {
        Some(offset) => ChartData::Stacked(stack_layout(&table, offset)?),
        None => ChartData::Unstacked(table),
    };
    let view = ViewState::from_data(&data);
    let x_scale = view.time_scale(&geometry);
    let y_scale = view.value_scale(&geometry, config.y_axis.kind);

    let prefix = config.prefix.clone();
    let mut engine = HoverEngine::mount(kind, data, x_scale, y_scale, geometry, config)?
        .with_measure(TextShaper::new());
    if !engine.is_interactive() {
        warn!(kind = kind.name(), "chart kind has no hover interaction; frames show the bare chart");
    }

    let renderer = SkiaRenderer::new();
    let start = Instant::now();
    let mut at = start;
    for (i, cursor) in sweep(&geometry, FRAMES).into_iter().enumerate() {
        at = start + FRAME_STEP * i as u32;
        if i == 0 {
            engine.pointer_enter(at);
        }
        engine.pointer_move(cursor, at);
        write_frame(&renderer, &engine, &opts, &prefix, &out_name_with(&path, &format!("hover{i:02}")))?;
    }

    // Idle expiry: nothing changes until the deadline, then the overlay hides.
    if let Some(deadline) = engine.next_deadline() {
        let hidden_early = engine.poll(deadline - Duration::from_millis(1));
        let hidden = engine.poll(deadline);
        info!(
            after_ms = (deadline - at).as_millis() as u64,
            hidden_early,
            hidden,
            "idle timeout"
        );
        write_frame(&renderer, &engine, &opts, &prefix, &out_name_with(&path, "idle"))?;
    }

    // Leave hides immediately regardless of the timer.
    engine.pointer_move(sweep(&geometry, 3)[1], at);
    engine.pointer_leave();
    info!(state = ?engine.state(), "pointer left");

    engine.teardown();
    Ok(())
}

fn write_frame<X, Y>(
    renderer: &SkiaRenderer,
    engine: &HoverEngine<X, Y>,
    opts: &RenderOptions,
    prefix: &str,
    out: &Path,
) -> Result<()>
where
    X: tipline_core::XScale,
    Y: tipline_core::YScale,
{
    let scene = ChartScene {
        data: engine.data(),
        x_scale: engine.x_scale(),
        y_scale: engine.y_scale(),
        geometry: engine.geometry(),
    };
    let frame = engine.frame();
    renderer.render_to_png(&scene, &frame, opts, out)?;
    let svg_out = out.with_extension("svg");
    std::fs::write(&svg_out, svg::render_overlay(&frame, prefix))
        .with_context(|| format!("write {}", svg_out.display()))?;
    info!(png = %out.display(), visible = frame.visible, "wrote frame");
    Ok(())
}

fn parse_kind(s: &str) -> Result<ChartKind> {
    let kind = match s {
        "stacked-area" => Some(ChartKind::StackedArea),
        "stacked-column" => Some(ChartKind::StackedColumn),
        other => ChartKind::from_options(other, false),
    };
    kind.with_context(|| format!("unknown chart kind {s:?}"))
}

/// Produce output file name like target/out/tips_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("tips_{stem}_{suffix}.png"))
}
