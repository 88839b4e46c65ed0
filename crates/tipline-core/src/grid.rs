// File: crates/tipline-core/src/grid.rs
// Summary: Evenly spaced positions for grid lines and simulated cursor sweeps.

use crate::geometry::{ChartGeometry, Point};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `steps` band-local cursor positions from the left to the right edge of the plot band,
/// at half height.
pub fn sweep(g: &ChartGeometry, steps: usize) -> Vec<Point> {
    let y = g.computed_height / 2.0;
    linspace(0.0, g.tick_width as f64, steps)
        .into_iter()
        .map(|x| Point::new(x as f32, y))
        .collect()
}
