use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use tipline_core::{ChartData, ChartGeometry, ChartKind, Datum, HoverEngine, Point, Table, TipsConfig, Value, ViewState};
use tipline_render_skia::{ChartScene, RenderOptions, SkiaRenderer};

fn gen_table(n: usize, series: usize) -> Table {
    let rows = (0..n)
        .map(|i| {
            let t = i as f64 * 60_000.0;
            Datum::new(t, (0..series).map(|s| Value::Number((i as f64 * 0.01 + s as f64).sin() * 10.0 + 20.0)))
        })
        .collect();
    Table::new(rows).unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_overlay_png");
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    for &(n, kind) in &[(1_000usize, ChartKind::Line), (1_000, ChartKind::StackedArea), (10_000, ChartKind::Line)] {
        let g = ChartGeometry::default();
        let table = gen_table(n, 4);
        let data = match kind.policy().and_then(|p| p.stacked) {
            Some(offset) => ChartData::Stacked(tipline_core::stack_layout(&table, offset).unwrap()),
            None => ChartData::Unstacked(table),
        };
        let view = ViewState::from_data(&data);
        let (x, y) = (view.time_scale(&g), view.value_scale(&g, Default::default()));
        let mut e = HoverEngine::mount(kind, data, x, y, g, TipsConfig::default()).unwrap();
        e.pointer_move(Point::new(g.tick_width * 0.4, 100.0), Instant::now());

        group.bench_with_input(BenchmarkId::from_parameter(format!("{}_n{n}", kind.name().replace(' ', "-"))), &n, |b, _| {
            let scene = ChartScene { data: e.data(), x_scale: e.x_scale(), y_scale: e.y_scale(), geometry: e.geometry() };
            b.iter(|| {
                let bytes = renderer.render_png_bytes(&scene, &e.frame(), &opts).unwrap();
                black_box(bytes.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
