// File: crates/tipline-core/src/config.rs
// Summary: Per-chart tip settings (idle timeout, month names, placeholder text, y-axis text), loaded from JSON.

use std::path::Path;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::axis::AxisText;
use crate::error::{Result, TipsError};
use crate::label::{DateFormatter, DEFAULT_MONTHS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipsConfig {
    /// Per-chart tips switch. Off mounts the engine without hover interaction.
    pub enabled: bool,
    /// CSS class prefix for the SVG adapter.
    pub prefix: String,
    /// Hide the overlay after this long without pointer movement.
    pub idle_timeout_ms: u64,
    pub months_abbr: [String; 12],
    /// Shown in place of a value that is missing or suppressed.
    pub missing_text: String,
    /// Offset used when writing date labels.
    pub utc_offset_minutes: i32,
    pub y_axis: AxisText,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: "ct-".to_string(),
            idle_timeout_ms: 5000,
            months_abbr: DEFAULT_MONTHS.map(String::from),
            missing_text: "n/a".to_string(),
            utc_offset_minutes: 0,
            y_axis: AxisText::default(),
        }
    }
}

impl TipsConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.idle_timeout_ms == 0 {
            return Err(TipsError::InvalidConfig("idle_timeout_ms must be positive"));
        }
        if self.offset().is_none() {
            return Err(TipsError::InvalidConfig("utc_offset_minutes must be within +/-24h"));
        }
        if self.months_abbr.iter().any(|m| m.is_empty()) {
            return Err(TipsError::InvalidConfig("months_abbr entries must be non-empty"));
        }
        Ok(())
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    fn offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes.checked_mul(60).and_then(FixedOffset::east_opt)
    }

    /// Date formatter for this config; an out-of-range offset falls back to UTC.
    pub fn date_formatter(&self) -> DateFormatter {
        let offset = self.offset().unwrap_or_else(|| Utc.fix());
        DateFormatter::new(self.months_abbr.clone(), offset)
    }
}
