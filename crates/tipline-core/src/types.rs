// File: crates/tipline-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, tip padding and offsets).

use serde::{Deserialize, Serialize};

/// Default chart width in pixels.
pub const WIDTH: i32 = 1024;
/// Default chart height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Inner padding of the tip box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Padding {
    fn default() -> Self {
        Self { left: 8.0, right: 8.0, top: 6.0, bottom: 6.0 }
    }
}

/// Gap between the guide line and the tip box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TipOffset {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for TipOffset {
    fn default() -> Self {
        Self { horizontal: 10.0, vertical: 4.0 }
    }
}
