// File: crates/tipline-core/src/error.rs
// Summary: Error type for data validation, format parsing and config loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TipsError>;

#[derive(Debug, Error)]
pub enum TipsError {
    #[error("row {row}: time key is not finite")]
    NonFiniteKey { row: usize },

    #[error("row {row}: time key {key} is before the previous key {prev}")]
    UnsortedKeys { row: usize, key: f64, prev: f64 },

    #[error("row {row}: series {series} value is not finite")]
    NonFiniteValue { row: usize, series: usize },

    #[error("row {row}: expected {expected} series values, found {found}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("series {series} is not time-aligned with series 0 at index {index}")]
    MisalignedSeries { series: usize, index: usize },

    #[error("stacked series {series} is not aligned with series 0 at index {index}")]
    MisalignedStack { series: usize, index: usize },

    #[error("stacked data needs at least one series")]
    EmptyStack,

    #[error("{kind} charts expect {expected} data")]
    DataShape { kind: &'static str, expected: &'static str },

    #[error("invalid number format {0:?}")]
    InvalidFormat(String),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("config parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
