// File: crates/tipline-core/src/stack.rs
// Summary: Stack layout turning unstacked rows into per-series bands (stacked area, stream graph).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TipsError};
use crate::series::{StackedData, StackedSample, Table, Value};

/// Baseline of the bottom band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOffset {
    /// Bottom band sits on zero.
    Zero,
    /// Stack centered around zero (stream graph).
    Silhouette,
}

/// Stack `table` column by column. Missing values contribute a zero-height band and keep
/// their `Missing` marker in `raw`.
pub fn stack_layout(table: &Table, offset: StackOffset) -> Result<StackedData> {
    let n = table.width();
    if n == 0 {
        return Err(TipsError::EmptyStack);
    }
    let mut series: Vec<Vec<StackedSample>> = (0..n).map(|_| Vec::with_capacity(table.len())).collect();
    for d in table.rows() {
        let raw: Arc<[Value]> = Arc::from(d.series.as_slice());
        let heights = d.series.iter().map(|v| v.number().unwrap_or(0.0));
        let mut y0 = match offset {
            StackOffset::Zero => 0.0,
            StackOffset::Silhouette => -0.5 * heights.clone().sum::<f64>(),
        };
        for (band, y) in series.iter_mut().zip(heights) {
            band.push(StackedSample { x: d.key, y, y0, raw: Arc::clone(&raw) });
            y0 += y;
        }
    }
    StackedData::new(series)
}
