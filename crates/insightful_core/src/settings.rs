use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOVER_DELAY_MS: u32 = 200;

/// Session-wide preferences. Replaced wholesale on every change; see
/// [`Settings::merged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hover_delay_ms: u32,
    pub insights_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hover_delay_ms: DEFAULT_HOVER_DELAY_MS,
            insights_enabled: true,
        }
    }
}

impl Settings {
    /// Applies a partial update; fields the patch leaves as `None` are kept.
    pub fn merged(self, patch: SettingsPatch) -> Self {
        Self {
            hover_delay_ms: patch.hover_delay_ms.unwrap_or(self.hover_delay_ms),
            insights_enabled: patch.insights_enabled.unwrap_or(self.insights_enabled),
        }
    }

    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.hover_delay_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsPatch {
    pub hover_delay_ms: Option<u32>,
    pub insights_enabled: Option<bool>,
}

impl SettingsPatch {
    pub fn hover_delay(ms: u32) -> Self {
        Self {
            hover_delay_ms: Some(ms),
            ..Self::default()
        }
    }

    pub fn insights_enabled(enabled: bool) -> Self {
        Self {
            insights_enabled: Some(enabled),
            ..Self::default()
        }
    }
}

/// Parses the hover delay field as typed by the user. Anything that is not a
/// non-negative integer becomes 0.
pub fn parse_hover_delay(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
