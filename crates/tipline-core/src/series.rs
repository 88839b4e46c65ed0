// File: crates/tipline-core/src/series.rs
// Summary: Time-indexed series model: unstacked rows, stacked layout samples, and load-time validation.
// Notes:
// - Sortedness and alignment are checked when data is built, never at hover time.
//   `locate` relies on both for bisection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TipsError};
use crate::scale::Time;

/// One reading. `Missing` marks "no data at this time" and is distinct from a real zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Missing,
}

impl Value {
    pub fn number(self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(v),
            Value::Missing => None,
        }
    }
    pub fn is_present(self) -> bool { matches!(self, Value::Number(_)) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Number(v) }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self { v.map_or(Value::Missing, Value::Number) }
}

/// One sample of a single series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub key: Time,
    pub val: Value,
}

/// Unstacked row: one time key and one value per series, in series order.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    pub key: Time,
    pub series: Vec<Value>,
}

impl Datum {
    pub fn new(key: Time, series: impl IntoIterator<Item = Value>) -> Self {
        Self { key, series: series.into_iter().collect() }
    }
}

/// Sorted rows of unstacked data.
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Vec<Datum>,
    width: usize,
}

impl Table {
    /// Validate and wrap rows. Keys must be finite and non-decreasing; every row
    /// must carry the same number of series values, and present values must be finite.
    /// A gap is `Value::Missing`, never NaN.
    pub fn new(rows: Vec<Datum>) -> Result<Self> {
        let width = rows.first().map_or(0, |d| d.series.len());
        check_sorted(rows.iter().map(|d| d.key))?;
        for (row, d) in rows.iter().enumerate() {
            if d.series.len() != width {
                return Err(TipsError::RaggedRow { row, expected: width, found: d.series.len() });
            }
            if let Some(series) = d.series.iter().position(|v| v.number().is_some_and(|x| !x.is_finite())) {
                return Err(TipsError::NonFiniteValue { row, series });
            }
        }
        Ok(Self { rows, width })
    }

    /// Build rows from time-aligned series: series `i` supplies column `i`.
    pub fn from_series(series: Vec<Vec<Sample>>) -> Result<Self> {
        let Some(first) = series.first() else { return Self::new(Vec::new()) };
        let mut rows: Vec<Datum> = first
            .iter()
            .map(|s| Datum { key: s.key, series: Vec::with_capacity(series.len()) })
            .collect();
        for (si, samples) in series.iter().enumerate() {
            if samples.len() != rows.len() {
                return Err(TipsError::MisalignedSeries { series: si, index: samples.len().min(rows.len()) });
            }
            for (index, (row, s)) in rows.iter_mut().zip(samples).enumerate() {
                if s.key != row.key {
                    return Err(TipsError::MisalignedSeries { series: si, index });
                }
                row.series.push(s.val);
            }
        }
        Self::new(rows)
    }

    pub fn rows(&self) -> &[Datum] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    /// Number of series (values per row).
    pub fn width(&self) -> usize { self.width }

    /// Extract series `i` as samples.
    pub fn series(&self, i: usize) -> Vec<Sample> {
        self.rows
            .iter()
            .filter_map(|d| d.series.get(i).map(|&val| Sample { key: d.key, val }))
            .collect()
    }
}

/// Layout-computed sample of a stacked series. `raw` is the original row at this time,
/// shared by every series at the same index.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSample {
    pub x: Time,
    pub y: f64,
    pub y0: f64,
    pub raw: Arc<[Value]>,
}

impl StackedSample {
    /// Top of this band: `y0 + y`.
    pub fn top(&self) -> f64 { self.y0 + self.y }
}

/// Stacked layout: one sample sequence per series, all time-aligned.
#[derive(Clone, Debug)]
pub struct StackedData {
    series: Vec<Vec<StackedSample>>,
}

impl StackedData {
    /// Validate an externally computed stack: at least one series, equal lengths,
    /// identical `x` across series at every index, and sorted `x`.
    pub fn new(series: Vec<Vec<StackedSample>>) -> Result<Self> {
        let Some(first) = series.first() else { return Err(TipsError::EmptyStack) };
        check_sorted(first.iter().map(|s| s.x))?;
        for (si, s) in series.iter().enumerate().skip(1) {
            if s.len() != first.len() {
                return Err(TipsError::MisalignedStack { series: si, index: s.len().min(first.len()) });
            }
            if let Some(index) = s.iter().zip(first).position(|(a, b)| a.x != b.x) {
                return Err(TipsError::MisalignedStack { series: si, index });
            }
        }
        Ok(Self { series })
    }

    pub fn series(&self) -> &[Vec<StackedSample>] { &self.series }
    pub fn series_count(&self) -> usize { self.series.len() }
    /// Samples per series.
    pub fn len(&self) -> usize { self.series[0].len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Chart data in one of the two shapes the engine reads.
#[derive(Clone, Debug)]
pub enum ChartData {
    Unstacked(Table),
    Stacked(StackedData),
}

impl ChartData {
    pub fn is_stacked(&self) -> bool { matches!(self, ChartData::Stacked(_)) }

    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Unstacked(t) => t.is_empty(),
            ChartData::Stacked(s) => s.is_empty(),
        }
    }
}

fn check_sorted(keys: impl Iterator<Item = Time>) -> Result<()> {
    let mut prev: Option<Time> = None;
    for (row, key) in keys.enumerate() {
        if !key.is_finite() {
            return Err(TipsError::NonFiniteKey { row });
        }
        if let Some(p) = prev {
            if key < p {
                return Err(TipsError::UnsortedKeys { row, key, prev: p });
            }
        }
        prev = Some(key);
    }
    Ok(())
}
