// File: crates/tipline-core/src/locate.rs
// Summary: Nearest-sample lookup along the time axis (bisect-left + neighbour tie-break).

use crate::scale::{Time, XScale};
use crate::series::{ChartData, Value};

/// One series' reading at the located time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub value: Value,
    /// Value to place on the y scale: the value itself when unstacked, the top of the
    /// band (`y0 + y`) when stacked.
    pub plotted: Option<f64>,
}

/// Result of a lookup: the shared sample index, its time key, and one reading per series.
#[derive(Clone, Debug, PartialEq)]
pub struct Located {
    pub index: usize,
    pub key: Time,
    pub readings: Vec<Reading>,
    /// True when rows come from a stack layout.
    pub stacked: bool,
}

/// Index of the sample nearest to `target` in `items` (sorted by `key`).
///
/// Bisect-left finds the insertion point, then the two neighbours are compared; an exact
/// tie goes to the later sample. Targets before the first or after the last key clamp to
/// that end. `None` only for an empty slice.
pub fn nearest_index<T>(items: &[T], key: impl Fn(&T) -> Time, target: Time) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let i = items.partition_point(|it| key(it) < target);
    if i == 0 {
        return Some(0);
    }
    if i == items.len() {
        return Some(items.len() - 1);
    }
    let d0 = key(&items[i - 1]);
    let d1 = key(&items[i]);
    Some(if target - d0 >= d1 - target { i } else { i - 1 })
}

/// Convert the cursor's band-local x into a time and locate the nearest sample(s).
pub fn locate<X: XScale + ?Sized>(data: &ChartData, x_scale: &X, cursor_x: f32) -> Option<Located> {
    locate_time(data, x_scale.from_px(cursor_x))
}

/// Locate by time.
///
/// Stacked data resolves to one index shared by every series, taken from the first
/// series' tie-break. Stacked series are validated as time-aligned on construction, so
/// every series reports the same time.
pub fn locate_time(data: &ChartData, t: Time) -> Option<Located> {
    match data {
        ChartData::Unstacked(table) => {
            let index = nearest_index(table.rows(), |d| d.key, t)?;
            let row = &table.rows()[index];
            let readings = row
                .series
                .iter()
                .map(|&value| Reading { value, plotted: value.number() })
                .collect();
            Some(Located { index, key: row.key, readings, stacked: false })
        }
        ChartData::Stacked(stack) => {
            let first = stack.series().first()?;
            let index = nearest_index(first, |s| s.x, t)?;
            let key = first[index].x;
            let readings = stack
                .series()
                .iter()
                .enumerate()
                .map(|(si, band)| {
                    let s = &band[index];
                    Reading {
                        value: s.raw.get(si).copied().unwrap_or(Value::Missing),
                        plotted: Some(s.top()),
                    }
                })
                .collect();
            Some(Located { index, key, readings, stacked: true })
        }
    }
}
