// File: crates/tipline-core/src/lib.rs
// Summary: Core library entry point; exports the hover engine, its data model and the overlay layout.

pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod layout;
pub mod locate;
pub mod scale;
pub mod series;
pub mod session;
pub mod stack;
pub mod svg;
pub mod types;
pub mod variant;
pub mod view;

pub use axis::{AxisText, ScaleKind};
pub use config::TipsConfig;
pub use error::{Result, TipsError};
pub use geometry::{ChartGeometry, Point, RectF};
pub use label::{DateFormatter, FormatValue, Granularity, ValueFormat};
pub use layout::{compose, ApproxMeasure, LayoutContext, OverlayLayout, TextMeasure, TipDirection, TipRow};
pub use locate::{locate, locate_time, nearest_index, Located, Reading};
pub use scale::{TimeScale, ValueScale, XScale, YScale};
pub use series::{ChartData, Datum, Sample, StackedData, StackedSample, Table, Value};
pub use session::{HoverEngine, HoverState, OverlayFrame, PointerEvent};
pub use stack::{stack_layout, StackOffset};
pub use variant::{ChartKind, MissingCheck, SeriesSelection, TipPolicy};
pub use view::ViewState;
