// File: crates/tipline-core/src/axis.rs
// Summary: Axis scale kind and the y-axis text settings (prefix, suffix, number format) used by tips.

use serde::{Deserialize, Serialize};

use crate::label::ValueFormat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// How y values are written in the tip box: `prefix + format(v) + suffix`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisText {
    pub prefix: String,
    pub suffix: String,
    pub format: ValueFormat,
    pub kind: ScaleKind,
}

impl AxisText {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, format: ValueFormat) -> Self {
        Self { prefix: prefix.into(), suffix: suffix.into(), format, kind: ScaleKind::Linear }
    }
}
