// File: crates/tipline-render-skia/src/lib.rs
// Summary: Skia adapter for the hover engine: CPU raster rendering of chart bands and overlay frames.

pub mod chart;
pub mod text;
pub mod theme;

pub use chart::{ChartScene, RenderOptions, SkiaRenderer};
pub use text::TextShaper;
pub use theme::Theme;
