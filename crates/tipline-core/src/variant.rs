// File: crates/tipline-core/src/variant.rs
// Summary: Chart kinds and the hover policy each one uses (stacking, series subset, missing-value check).

use serde::{Deserialize, Serialize};

use crate::stack::StackOffset;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Line,
    MultiLine,
    Area,
    StackedArea,
    Stream,
    Column,
    StackedColumn,
    Bar,
}

/// Which series feed the tip box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesSelection {
    All,
    FirstOnly,
}

/// Check applied to a located row before anything is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingCheck {
    /// Skip the whole update when any series at the located time is missing, including
    /// series the tip box does not show.
    SuppressRow,
    /// Skip when any band's plotted top is not finite. Gaps never skip: a series is shown
    /// only when it and every series below it are present.
    NonFiniteBand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TipPolicy {
    pub stacked: Option<StackOffset>,
    pub selection: SeriesSelection,
    pub missing: MissingCheck,
}

impl ChartKind {
    /// Map the stored chart options (`type` string plus the stacked flag) to a kind.
    pub fn from_options(kind: &str, stacked: bool) -> Option<Self> {
        Some(match (kind, stacked) {
            ("line", _) => ChartKind::Line,
            ("multiline", _) => ChartKind::MultiLine,
            ("area", false) => ChartKind::Area,
            ("area", true) => ChartKind::StackedArea,
            ("stream", _) => ChartKind::Stream,
            ("column", false) => ChartKind::Column,
            ("column", true) => ChartKind::StackedColumn,
            ("bar", _) => ChartKind::Bar,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::MultiLine => "multiline",
            ChartKind::Area => "area",
            ChartKind::StackedArea => "stacked area",
            ChartKind::Stream => "stream",
            ChartKind::Column => "column",
            ChartKind::StackedColumn => "stacked column",
            ChartKind::Bar => "bar",
        }
    }

    /// Hover policy, or `None` for kinds without hover interaction (columns and bars).
    pub fn policy(self) -> Option<TipPolicy> {
        let unstacked = |selection| TipPolicy { stacked: None, selection, missing: MissingCheck::SuppressRow };
        match self {
            ChartKind::Line | ChartKind::Area => Some(unstacked(SeriesSelection::All)),
            ChartKind::MultiLine => Some(unstacked(SeriesSelection::FirstOnly)),
            ChartKind::StackedArea => Some(TipPolicy {
                stacked: Some(StackOffset::Zero),
                selection: SeriesSelection::All,
                missing: MissingCheck::NonFiniteBand,
            }),
            ChartKind::Stream => Some(TipPolicy {
                stacked: Some(StackOffset::Silhouette),
                selection: SeriesSelection::All,
                missing: MissingCheck::NonFiniteBand,
            }),
            ChartKind::Column | ChartKind::StackedColumn | ChartKind::Bar => None,
        }
    }
}
